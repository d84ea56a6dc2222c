//! Pushover delivery client.
//!
//! Sends notifications as a form POST with `token`, `user`, `title` and
//! `message` fields. HTTP 200 is success; any other status is a delivery
//! failure, reported but never retried.

use serde::Deserialize;

use super::error::NotifyError;
use super::scheduler::Notifier;

/// Default base URL for the Pushover message API.
const DEFAULT_BASE_URL: &str = "https://api.pushover.net/1/messages.json";

/// Error payload returned by Pushover on rejected requests.
#[derive(Debug, Deserialize)]
struct PushoverResponse {
    #[serde(default)]
    errors: Vec<String>,
}

/// Configuration for the Pushover client.
///
/// Both credentials are required: the caller decides whether to construct
/// a client at all (missing credentials skip the notification phase
/// entirely rather than falling back to a built-in secret).
#[derive(Debug, Clone)]
pub struct PushoverConfig {
    /// Application credential
    pub token: String,
    /// Recipient credential
    pub user: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl PushoverConfig {
    /// Create a config with the given credentials.
    pub fn new(token: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user: user.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// Client for the Pushover message API.
#[derive(Debug, Clone)]
pub struct PushoverClient {
    http: reqwest::Client,
    token: String,
    user: String,
    base_url: String,
}

impl PushoverClient {
    /// Create a new Pushover client.
    pub fn new(config: PushoverConfig) -> Result<Self, NotifyError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            token: config.token,
            user: config.user,
            base_url: config.base_url,
        })
    }
}

impl Notifier for PushoverClient {
    async fn send(&self, title: &str, message: &str) -> Result<(), NotifyError> {
        let response = self
            .http
            .post(&self.base_url)
            .form(&[
                ("token", self.token.as_str()),
                ("user", self.user.as_str()),
                ("title", title),
                ("message", message),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Pushover reports failures as a JSON errors array; fall back
            // to the raw body when it isn't one.
            let message = match serde_json::from_str::<PushoverResponse>(&body) {
                Ok(parsed) if !parsed.errors.is_empty() => parsed.errors.join("; "),
                _ => body.chars().take(500).collect(),
            };
            return Err(NotifyError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}
