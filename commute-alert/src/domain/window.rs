//! Target time-of-day window.
//!
//! A commute is described as a time-of-day plus an optional tolerance in
//! minutes. The window is resolved against a concrete calendar date (always
//! "today" in the reference timezone) at selection time, so the same
//! configuration works on any day.

use std::fmt;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Timelike};
use chrono_tz::Tz;

/// Error returned when constructing an invalid target window.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid target window: {reason}")]
pub struct InvalidWindow {
    reason: &'static str,
}

/// A target time-of-day with an optional tolerance.
///
/// `tolerance_minutes = None` means unbounded: selection degenerates to
/// "closest arrival regardless of distance". `Some(t)` restricts candidates
/// to `[target - t, target + t]`, boundaries inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetWindow {
    time: NaiveTime,
    tolerance_minutes: Option<i64>,
}

impl TargetWindow {
    /// Create a window from hour (0-23), minute (0-59) and optional
    /// tolerance in minutes (non-negative).
    pub fn new(
        hour: u32,
        minute: u32,
        tolerance_minutes: Option<i64>,
    ) -> Result<Self, InvalidWindow> {
        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or(InvalidWindow {
            reason: "hour must be 0-23 and minute 0-59",
        })?;

        if let Some(t) = tolerance_minutes {
            if t < 0 {
                return Err(InvalidWindow {
                    reason: "tolerance must be non-negative",
                });
            }
        }

        Ok(Self {
            time,
            tolerance_minutes,
        })
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// Returns the tolerance as a Duration, or `None` when unbounded.
    pub fn tolerance(&self) -> Option<Duration> {
        self.tolerance_minutes.map(Duration::minutes)
    }

    /// Resolve the window's time-of-day on `date` in `tz`.
    ///
    /// Returns `None` only when the local time does not exist on that date
    /// (the spring-forward DST gap). An ambiguous local time (fall-back)
    /// resolves to the earlier instant.
    pub fn target_instant(&self, date: NaiveDate, tz: Tz) -> Option<DateTime<Tz>> {
        tz.from_local_datetime(&date.and_time(self.time)).earliest()
    }

    /// Whether `candidate` falls within the tolerance of `target`.
    ///
    /// Always true in unbounded mode. The comparison is on absolute
    /// distance in whole seconds, boundaries inclusive.
    pub fn contains(&self, candidate: DateTime<Tz>, target: DateTime<Tz>) -> bool {
        match self.tolerance() {
            None => true,
            Some(tolerance) => {
                let distance = (candidate - target).abs();
                distance.num_seconds() <= tolerance.num_seconds()
            }
        }
    }
}

impl fmt::Display for TargetWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())?;
        if let Some(t) = self.tolerance_minutes {
            write!(f, " ±{t}m")?;
        }
        Ok(())
    }
}
