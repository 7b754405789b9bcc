//! HTTP client for the current-channel endpoint.

use std::time::Duration;

use url::Url;

use crate::channel::CurrentChannel;
use crate::error::{ApiError, Result};

/// Path of the channel resource, relative to the server base URL.
pub const CHANNEL_PATH: &str = "tv/channel";

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for reading the current channel from a server.
///
/// Issues `GET {base}/tv/channel` and expects the structured JSON object
/// described on [`CurrentChannel`]. The client is cheap to clone and safe
/// to share; it holds no state besides the connection pool.
#[derive(Debug, Clone)]
pub struct ChannelClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ChannelClient {
    /// Create a client for the channel endpoint under `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom per-request timeout.
    ///
    /// A request still in flight when the next poll is due is allowed to
    /// race it; keep the timeout bounded so abandoned requests don't pile
    /// up indefinitely.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let base = Url::parse(base_url)?;
        let endpoint = base.join(CHANNEL_PATH)?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { http, endpoint })
    }

    /// The resolved URL this client polls.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch the current channel.
    pub async fn current_channel(&self) -> Result<CurrentChannel> {
        let response = self.http.get(self.endpoint.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::MalformedPayload(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_endpoint_relative_to_base() {
        let client = ChannelClient::new("http://tv.example.com").unwrap();
        assert_eq!(client.endpoint().as_str(), "http://tv.example.com/tv/channel");

        let client = ChannelClient::new("http://tv.example.com/app/").unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "http://tv.example.com/app/tv/channel"
        );
    }

    #[test]
    fn rejects_invalid_base_url() {
        let result = ChannelClient::new("not a url");
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }
}
