//! Push notification delivery and timing.
//!
//! `client` is the Pushover transport; `scheduler` decides when each of the
//! two notifications fires. The two are separated by the `Notifier` trait
//! so the timing logic is testable without a network.

mod client;
mod error;
mod scheduler;

pub use client::{PushoverClient, PushoverConfig};
pub use error::NotifyError;
pub use scheduler::{NotificationScheduler, Notifier, ScheduleOutcome};
