//! Environment-sourced configuration.
//!
//! All configuration is collected once at startup into an `AppConfig` and
//! passed into each component; nothing downstream reads the environment.
//! A `.env` file is honored via `dotenvy` before the variables are read.
//!
//! Missing notification credentials are not a startup failure: an absent
//! `PUSHOVER_USER` yields `pushover: None` and the notification phase is
//! skipped. A present `PUSHOVER_USER` with no `PUSHOVER_TOKEN` fails fast
//! instead of falling back to a baked-in app token.

use chrono_tz::Tz;

use crate::domain::{InvalidRouteId, InvalidStopId, InvalidWindow, RouteId, StopId, TargetWindow};
use crate::feed::FeedConfig;
use crate::notify::PushoverConfig;

/// Errors from reading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is absent
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable is present but unusable
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },

    /// ROUTE_ID is malformed
    #[error("invalid ROUTE_ID: {0}")]
    Route(#[from] InvalidRouteId),

    /// STOP_ID is malformed
    #[error("invalid STOP_ID: {0}")]
    Stop(#[from] InvalidStopId),

    /// Target time or tolerance is out of range
    #[error(transparent)]
    Window(#[from] InvalidWindow),
}

/// Complete configuration for one run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Feed endpoint configuration
    pub feed: FeedConfig,
    /// Route to watch
    pub route: RouteId,
    /// Stop (with direction suffix) to watch
    pub stop: StopId,
    /// Target time-of-day and tolerance
    pub window: TargetWindow,
    /// Walking buffer in minutes
    pub walk_minutes: i64,
    /// Reference timezone for all instants
    pub tz: Tz,
    /// Notification credentials; `None` skips the notification phase
    pub pushover: Option<PushoverConfig>,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// Loads a `.env` file first if one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through a variable lookup.
    ///
    /// Factored out of `from_env` so tests can supply variables without
    /// mutating the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let route = RouteId::parse(&required(&lookup, "ROUTE_ID")?)?;
        let stop = StopId::parse(&required(&lookup, "STOP_ID")?)?;

        let hour = parse_number::<u32>(&lookup, "TARGET_HOUR")?
            .ok_or(ConfigError::Missing("TARGET_HOUR"))?;
        let minute = parse_number::<u32>(&lookup, "TARGET_MINUTE")?
            .ok_or(ConfigError::Missing("TARGET_MINUTE"))?;
        let tolerance = parse_number::<i64>(&lookup, "TOLERANCE_MINUTES")?;
        let window = TargetWindow::new(hour, minute, tolerance)?;

        let walk_minutes = parse_number::<i64>(&lookup, "WALK_MINUTES")?
            .ok_or(ConfigError::Missing("WALK_MINUTES"))?;
        if walk_minutes < 0 {
            return Err(ConfigError::Invalid {
                key: "WALK_MINUTES",
                reason: "must be non-negative".to_string(),
            });
        }

        let tz = match lookup("TIMEZONE") {
            Some(name) => name.parse::<Tz>().map_err(|e| ConfigError::Invalid {
                key: "TIMEZONE",
                reason: e.to_string(),
            })?,
            None => chrono_tz::America::New_York,
        };

        let mut feed = FeedConfig::new();
        if let Some(url) = lookup("FEED_URL") {
            feed = feed.with_url(url);
        }
        if let Some(key) = lookup("FEED_API_KEY") {
            feed = feed.with_api_key(key);
        }

        let pushover = match lookup("PUSHOVER_USER") {
            Some(user) => {
                let token =
                    lookup("PUSHOVER_TOKEN").ok_or(ConfigError::Missing("PUSHOVER_TOKEN"))?;
                Some(PushoverConfig::new(token, user))
            }
            None => None,
        };

        Ok(Self {
            feed,
            route,
            stop,
            window,
            walk_minutes,
            tz,
            pushover,
        })
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<String, ConfigError> {
    lookup(key).ok_or(ConfigError::Missing(key))
}

fn parse_number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::Invalid {
                key,
                reason: e.to_string(),
            }),
    }
}
