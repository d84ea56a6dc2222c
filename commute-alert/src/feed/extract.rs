//! Arrival extraction from a decoded feed.
//!
//! Converts the wire-level `FeedMessage` into the domain's view of it: a
//! sorted list of predicted arrival instants for one route at one stop, in
//! the reference timezone.

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use gtfs_realtime::FeedMessage;

use crate::domain::{RouteId, StopId};

/// Extract predicted arrival instants for `route` at `stop`.
///
/// Entities without a trip update, with a different (or missing) route id,
/// or whose stop-time updates lack an arrival time are skipped. The result
/// is sorted ascending.
///
/// Duplicate predictions for the same physical train (a trip updated
/// mid-run appears once per feed entity) are deliberately kept: the
/// selector only cares about the closest instant, and merging would require
/// trip identity tracking this tool does not need.
pub fn extract_arrivals(
    feed: &FeedMessage,
    route: &RouteId,
    stop: &StopId,
    tz: Tz,
) -> Vec<DateTime<Tz>> {
    let mut arrivals = Vec::new();

    for entity in &feed.entity {
        let Some(trip_update) = &entity.trip_update else {
            continue;
        };

        if trip_update.trip.route_id.as_deref() != Some(route.as_str()) {
            continue;
        }

        for stop_time_update in &trip_update.stop_time_update {
            if stop_time_update.stop_id.as_deref() != Some(stop.as_str()) {
                continue;
            }

            let Some(epoch_secs) = stop_time_update.arrival.as_ref().and_then(|a| a.time) else {
                continue;
            };

            // Epoch-to-zone conversion is always unambiguous.
            if let Some(instant) = tz.timestamp_opt(epoch_secs, 0).single() {
                arrivals.push(instant);
            }
        }
    }

    arrivals.sort();
    arrivals
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::America::New_York;
    use gtfs_realtime::trip_update::{StopTimeEvent, StopTimeUpdate};
    use gtfs_realtime::{FeedEntity, TripDescriptor, TripUpdate};

    fn route(s: &str) -> RouteId {
        RouteId::parse(s).unwrap()
    }

    fn stop(s: &str) -> StopId {
        StopId::parse(s).unwrap()
    }

    fn stop_time(stop_id: &str, arrival_epoch: Option<i64>) -> StopTimeUpdate {
        StopTimeUpdate {
            stop_id: Some(stop_id.to_string()),
            arrival: arrival_epoch.map(|time| StopTimeEvent {
                time: Some(time),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn trip_entity(id: &str, route_id: Option<&str>, stops: Vec<StopTimeUpdate>) -> FeedEntity {
        FeedEntity {
            id: id.to_string(),
            trip_update: Some(TripUpdate {
                trip: TripDescriptor {
                    route_id: route_id.map(str::to_string),
                    ..Default::default()
                },
                stop_time_update: stops,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn feed(entities: Vec<FeedEntity>) -> FeedMessage {
        FeedMessage {
            entity: entities,
            ..Default::default()
        }
    }

    // 2026-03-02 09:10:00 America/New_York
    const T0910: i64 = 1772460600;
    const T0928: i64 = T0910 + 18 * 60;
    const T0945: i64 = T0910 + 35 * 60;

    #[test]
    fn extracts_matching_route_and_stop() {
        let feed = feed(vec![trip_entity(
            "1",
            Some("A"),
            vec![stop_time("A28S", Some(T0910))],
        )]);

        let arrivals = extract_arrivals(&feed, &route("A"), &stop("A28S"), New_York);

        assert_eq!(arrivals.len(), 1);
        assert_eq!(arrivals[0].timestamp(), T0910);
        assert_eq!(arrivals[0].timezone(), New_York);
    }

    #[test]
    fn skips_other_routes() {
        let feed = feed(vec![
            trip_entity("1", Some("C"), vec![stop_time("A28S", Some(T0910))]),
            trip_entity("2", Some("A"), vec![stop_time("A28S", Some(T0928))]),
        ]);

        let arrivals = extract_arrivals(&feed, &route("A"), &stop("A28S"), New_York);

        assert_eq!(arrivals.len(), 1);
        assert_eq!(arrivals[0].timestamp(), T0928);
    }

    #[test]
    fn missing_route_id_never_matches() {
        let feed = feed(vec![trip_entity(
            "1",
            None,
            vec![stop_time("A28S", Some(T0910))],
        )]);

        assert!(extract_arrivals(&feed, &route("A"), &stop("A28S"), New_York).is_empty());
    }

    #[test]
    fn skips_other_stops() {
        let feed = feed(vec![trip_entity(
            "1",
            Some("A"),
            vec![
                stop_time("A27S", Some(T0910)),
                stop_time("A28S", Some(T0928)),
                stop_time("A28N", Some(T0945)),
            ],
        )]);

        let arrivals = extract_arrivals(&feed, &route("A"), &stop("A28S"), New_York);

        assert_eq!(arrivals.len(), 1);
        assert_eq!(arrivals[0].timestamp(), T0928);
    }

    #[test]
    fn skips_entities_without_trip_update() {
        let feed = feed(vec![FeedEntity {
            id: "vehicle-only".to_string(),
            ..Default::default()
        }]);

        assert!(extract_arrivals(&feed, &route("A"), &stop("A28S"), New_York).is_empty());
    }

    #[test]
    fn skips_stop_times_without_arrival() {
        let feed = feed(vec![trip_entity(
            "1",
            Some("A"),
            vec![stop_time("A28S", None), stop_time("A28S", Some(T0928))],
        )]);

        let arrivals = extract_arrivals(&feed, &route("A"), &stop("A28S"), New_York);

        assert_eq!(arrivals.len(), 1);
    }

    #[test]
    fn result_is_sorted_ascending() {
        let feed = feed(vec![
            trip_entity("1", Some("A"), vec![stop_time("A28S", Some(T0945))]),
            trip_entity("2", Some("A"), vec![stop_time("A28S", Some(T0910))]),
            trip_entity("3", Some("A"), vec![stop_time("A28S", Some(T0928))]),
        ]);

        let arrivals = extract_arrivals(&feed, &route("A"), &stop("A28S"), New_York);

        let timestamps: Vec<i64> = arrivals.iter().map(|a| a.timestamp()).collect();
        assert_eq!(timestamps, vec![T0910, T0928, T0945]);
    }

    #[test]
    fn duplicates_are_kept() {
        // The same physical train predicted twice (trip updated mid-run).
        let feed = feed(vec![
            trip_entity("1", Some("A"), vec![stop_time("A28S", Some(T0928))]),
            trip_entity("1-updated", Some("A"), vec![stop_time("A28S", Some(T0928))]),
        ]);

        let arrivals = extract_arrivals(&feed, &route("A"), &stop("A28S"), New_York);

        assert_eq!(arrivals.len(), 2);
        assert_eq!(arrivals[0], arrivals[1]);
    }

    #[test]
    fn extraction_is_idempotent() {
        let feed = feed(vec![
            trip_entity("1", Some("A"), vec![stop_time("A28S", Some(T0945))]),
            trip_entity("2", Some("A"), vec![stop_time("A28S", Some(T0910))]),
        ]);

        let first = extract_arrivals(&feed, &route("A"), &stop("A28S"), New_York);
        let second = extract_arrivals(&feed, &route("A"), &stop("A28S"), New_York);

        assert_eq!(first, second);
    }

    #[test]
    fn empty_feed_yields_no_arrivals() {
        let feed = feed(vec![]);
        assert!(extract_arrivals(&feed, &route("A"), &stop("A28S"), New_York).is_empty());
    }
}
