//! GTFS-realtime feed HTTP client.
//!
//! Fetches the binary trip-update feed and decodes it into a
//! `gtfs_realtime::FeedMessage`. One request per call, no retries: a failed
//! fetch aborts the run, because nothing downstream is usable without a
//! decoded feed.

use gtfs_realtime::FeedMessage;
use prost::Message;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use super::error::FeedError;

/// Default feed URL: the MTA A/C/E trip-update feed.
const DEFAULT_FEED_URL: &str =
    "https://api-endpoint.mta.info/Dataservice/mtagtfsfeeds/nyct%2Fgtfs-ace";

/// Configuration for the feed client.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Feed endpoint URL (defaults to the MTA A/C/E feed)
    pub url: String,
    /// Optional API key, sent as an `x-api-key` header
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl FeedConfig {
    /// Create a config pointing at the default feed.
    pub fn new() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            api_key: None,
            timeout_secs: 30,
        }
    }

    /// Set a custom feed URL (for other feeds, or for testing).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set an API key to send with each request.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP client for a GTFS-realtime trip-update feed.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    url: String,
}

impl FeedClient {
    /// Create a new feed client with the given configuration.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let mut headers = HeaderMap::new();

        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key).map_err(|_| FeedError::InvalidApiKey)?;
            headers.insert(HeaderName::from_static("x-api-key"), value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// Fetch and decode the feed.
    ///
    /// Performs a single GET request. Non-success statuses and undecodable
    /// payloads are errors; there is no retry.
    pub async fn fetch(&self) -> Result<FeedMessage, FeedError> {
        let response = self.http.get(&self.url).send().await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Status {
                status: status.as_u16(),
                body: body.chars().take(500).collect(),
            });
        }

        let bytes = response.bytes().await?;

        let feed = FeedMessage::decode(bytes.as_ref())?;

        Ok(feed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = FeedConfig::new();
        assert_eq!(config.url, DEFAULT_FEED_URL);
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_builder() {
        let config = FeedConfig::new()
            .with_url("http://localhost:8080/feed")
            .with_api_key("secret")
            .with_timeout(5);

        assert_eq!(config.url, "http://localhost:8080/feed");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn client_creation() {
        let client = FeedClient::new(FeedConfig::new());
        assert!(client.is_ok());
    }

    #[test]
    fn client_rejects_unprintable_api_key() {
        let config = FeedConfig::new().with_api_key("bad\nkey");
        assert!(matches!(
            FeedClient::new(config),
            Err(FeedError::InvalidApiKey)
        ));
    }
}
