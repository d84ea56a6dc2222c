//! Notification error types.

/// Errors from the notification transport.
///
/// Unlike feed errors these are non-fatal: a failed notification is logged
/// and the run continues, because the leave-by computation does not depend
/// on delivery success.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Delivery endpoint returned a non-200 status
    #[error("notification endpoint returned {status}: {message}")]
    Status { status: u16, message: String },
}
