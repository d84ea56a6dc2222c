//! Timed notification scheduling.
//!
//! Brackets the planned departure with two notifications: an immediate
//! advisory carrying the leave-by time, and a reminder timed to fire at the
//! leave-by instant itself. The wait between them is the only suspension
//! point in the whole run, and there is no way to cancel it short of
//! killing the process.

use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use tracing::{info, warn};

use super::error::NotifyError;

/// A notification transport.
///
/// The production implementation is `PushoverClient`; tests substitute a
/// recording stub. Callers only use it through generic bounds, so the
/// future need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait Notifier {
    /// Deliver one notification.
    async fn send(&self, title: &str, message: &str) -> Result<(), NotifyError>;
}

/// Terminal outcome of a scheduling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleOutcome {
    /// The leave-by instant was ahead of us; the reminder fired at it.
    LeftNotified,
    /// The leave-by instant had already passed; the reminder was skipped.
    Expired,
}

/// Schedules the advisory and reminder notifications around a leave-by
/// instant.
#[derive(Debug, Clone)]
pub struct NotificationScheduler<N> {
    notifier: N,
}

impl<N: Notifier> NotificationScheduler<N> {
    /// Create a scheduler over the given transport.
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }

    /// Run the notification sequence for `leave_by`.
    ///
    /// Sends the advisory immediately; a delivery failure is logged and the
    /// sequence continues, since the timing does not depend on delivery.
    /// Then waits until `leave_by` and sends the reminder, or skips it when
    /// the instant has already passed.
    ///
    /// `now` is consulted once, after the advisory send returns, so the
    /// advisory's round-trip time never inflates the wait: a slow send
    /// shortens the remaining delay rather than shifting the reminder past
    /// the leave-by instant.
    pub async fn run(
        &self,
        leave_by: DateTime<Tz>,
        now: impl Fn() -> DateTime<Tz>,
    ) -> ScheduleOutcome {
        let leave_at = leave_by.format("%I:%M %p").to_string();

        match self
            .notifier
            .send(
                "Train reminder set",
                &format!("Leave by {leave_at} to catch your train."),
            )
            .await
        {
            Ok(()) => info!("advisory notification sent"),
            Err(e) => warn!("advisory notification failed: {e}"),
        }

        let delay = leave_by - now();

        if delay <= Duration::zero() {
            info!("leave-by time {leave_at} has already passed; skipping reminder");
            return ScheduleOutcome::Expired;
        }

        info!("waiting {}s until {leave_at}", delay.num_seconds());
        tokio::time::sleep(delay.to_std().unwrap_or_default()).await;

        match self
            .notifier
            .send("Time to leave!", "Head out now to catch your train.")
            .await
        {
            Ok(()) => info!("leave notification sent"),
            Err(e) => warn!("leave notification failed: {e}"),
        }

        ScheduleOutcome::LeftNotified
    }
}
