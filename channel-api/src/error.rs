//! Error types for the channel-api crate.

use thiserror::Error;

/// Errors from the channel endpoint client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be completed
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("unexpected status {0} from channel endpoint")]
    Status(reqwest::StatusCode),

    /// The response body did not match the structured channel contract
    #[error("malformed channel payload: {0}")]
    MalformedPayload(String),

    /// The configured base URL could not be parsed or joined
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Convenience type alias for Results using ApiError.
pub type Result<T> = std::result::Result<T, ApiError>;
