//! GTFS-realtime feed access.
//!
//! The feed is a binary protobuf snapshot of predicted trip updates,
//! fetched over HTTP and decoded with the `gtfs-realtime` bindings. This
//! module owns the single outbound fetch (`client`) and the conversion of
//! the decoded message into domain arrival instants (`extract`).

mod client;
mod error;
mod extract;

pub use client::{FeedClient, FeedConfig};
pub use error::FeedError;
pub use extract::extract_arrivals;
