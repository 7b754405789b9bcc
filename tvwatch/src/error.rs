//! Error types for the tvwatch facade.

use thiserror::Error;

/// Errors surfaced by the sync watcher facade.
#[derive(Debug, Error)]
pub enum WatchError {
    /// The channel endpoint client could not be constructed
    #[error("invalid channel endpoint: {0}")]
    Endpoint(#[from] channel_api::ApiError),

    /// Invalid poller configuration or lifecycle misuse
    #[error(transparent)]
    Poller(#[from] channel_poller::PollerError),

    /// The background worker is no longer accepting commands
    #[error("background worker disconnected")]
    WorkerDisconnected,
}

/// Convenience type alias for Results using WatchError.
pub type Result<T> = std::result::Result<T, WatchError>;
