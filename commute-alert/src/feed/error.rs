//! Feed client error types.

/// Errors that can occur when fetching or decoding the realtime feed.
///
/// All of these are fatal for the run: without a decoded feed there is
/// nothing to select from.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed endpoint returned a non-success status
    #[error("feed endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Payload was not a valid GTFS-realtime protobuf message
    #[error("failed to decode GTFS-realtime payload: {0}")]
    Decode(#[from] prost::DecodeError),

    /// Configured API key contains bytes that cannot go in a header
    #[error("invalid API key format")]
    InvalidApiKey,
}
