//! Leave-by computation.

use chrono::{DateTime, Duration};
use chrono_tz::Tz;

/// Compute the leave-by instant: the arrival minus the walking buffer.
///
/// Pure subtraction on the instant; the result stays in the arrival's
/// timezone, so a buffer spanning a DST transition shifts the wall-clock
/// label but never the underlying instant.
pub fn leave_by(arrival: DateTime<Tz>, buffer_minutes: i64) -> DateTime<Tz> {
    arrival - Duration::minutes(buffer_minutes)
}
