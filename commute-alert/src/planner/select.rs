//! Arrival selection against a target window.

use chrono::DateTime;
use chrono_tz::Tz;

use crate::domain::TargetWindow;

/// Pick the arrival closest to the window's target time-of-day on the
/// current calendar day.
///
/// The target instant is `now`'s date combined with the window's
/// time-of-day, in `now`'s timezone. With a bounded window only arrivals
/// within the tolerance qualify (boundaries inclusive); with an unbounded
/// window every arrival qualifies and the closest overall wins. Ties on
/// distance go to the earlier element of `arrivals`.
///
/// Returns `None` when no arrival qualifies, or when the target time-of-day
/// does not exist on today's date (the spring-forward DST gap).
pub fn select_arrival(
    arrivals: &[DateTime<Tz>],
    window: &TargetWindow,
    now: DateTime<Tz>,
) -> Option<DateTime<Tz>> {
    let target = window.target_instant(now.date_naive(), now.timezone())?;

    arrivals
        .iter()
        .filter(|arrival| window.contains(**arrival, target))
        .min_by_key(|arrival| (**arrival - target).abs().num_seconds())
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::America::New_York;

    fn window(hour: u32, minute: u32, tolerance: Option<i64>) -> TargetWindow {
        TargetWindow::new(hour, minute, tolerance).unwrap()
    }

    /// A fixed instant on an ordinary (non-DST-transition) day.
    fn at(hour: u32, minute: u32) -> DateTime<Tz> {
        New_York
            .with_ymd_and_hms(2026, 3, 2, hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn picks_closest_within_tolerance() {
        // Arrivals at 09:10, 09:28, 09:45; target 09:30 ±10 → 09:28.
        let arrivals = vec![at(9, 10), at(9, 28), at(9, 45)];

        let selected = select_arrival(&arrivals, &window(9, 30, Some(10)), at(8, 0));

        assert_eq!(selected, Some(at(9, 28)));
    }

    #[test]
    fn tight_tolerance_narrows_the_field() {
        // Same arrivals, target 09:30 ±5 → only 09:28 qualifies.
        let arrivals = vec![at(9, 10), at(9, 28), at(9, 45)];

        let selected = select_arrival(&arrivals, &window(9, 30, Some(5)), at(8, 0));

        assert_eq!(selected, Some(at(9, 28)));
    }

    #[test]
    fn none_when_nothing_qualifies() {
        let arrivals = vec![at(7, 0), at(11, 30)];

        assert!(select_arrival(&arrivals, &window(9, 30, Some(10)), at(8, 0)).is_none());
    }

    #[test]
    fn none_on_empty_input() {
        assert!(select_arrival(&[], &window(9, 30, Some(10)), at(8, 0)).is_none());
        assert!(select_arrival(&[], &window(9, 30, None), at(8, 0)).is_none());
    }

    #[test]
    fn boundary_is_inclusive() {
        // Exactly tolerance minutes away still qualifies.
        let arrivals = vec![at(9, 40)];

        let selected = select_arrival(&arrivals, &window(9, 30, Some(10)), at(8, 0));

        assert_eq!(selected, Some(at(9, 40)));
    }

    #[test]
    fn just_past_boundary_is_excluded() {
        let arrivals = vec![at(9, 41)];

        assert!(select_arrival(&arrivals, &window(9, 30, Some(10)), at(8, 0)).is_none());
    }

    #[test]
    fn equidistant_tie_goes_to_earlier_element() {
        // 09:25 and 09:35 are both 5 minutes from 09:30.
        let arrivals = vec![at(9, 25), at(9, 35)];

        let selected = select_arrival(&arrivals, &window(9, 30, Some(10)), at(8, 0));

        assert_eq!(selected, Some(at(9, 25)));
    }

    #[test]
    fn unbounded_picks_closest_of_all() {
        let arrivals = vec![at(6, 0), at(9, 50), at(14, 15)];

        let selected = select_arrival(&arrivals, &window(9, 30, None), at(8, 0));

        assert_eq!(selected, Some(at(9, 50)));
    }

    #[test]
    fn target_in_dst_gap_selects_nothing() {
        // 02:30 does not exist on 2026-03-08 in New York.
        let now = New_York.with_ymd_and_hms(2026, 3, 8, 1, 0, 0).unwrap();
        let arrivals = vec![New_York.with_ymd_and_hms(2026, 3, 8, 3, 30, 0).unwrap()];

        assert!(select_arrival(&arrivals, &window(2, 30, None), now).is_none());
    }
}
