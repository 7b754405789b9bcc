//! Error types for the channel-poller crate.

use thiserror::Error;

/// Errors from the channel poller lifecycle.
#[derive(Debug, Error)]
pub enum PollerError {
    /// Invalid configuration provided
    #[error("configuration error: {0}")]
    Configuration(String),

    /// start() was called while the polling task is running
    #[error("poller is already running")]
    AlreadyRunning,

    /// stop() was called with no polling task running
    #[error("poller is not running")]
    NotRunning,

    /// The polling task could not be shut down cleanly
    #[error("shutdown error: {0}")]
    Shutdown(String),
}

/// Errors raised by a display target when a source write fails.
#[derive(Debug, Error)]
pub enum TargetError {
    /// The target no longer exists or cannot be written
    #[error("display target unavailable: {0}")]
    Unavailable(String),
}

/// Convenience type alias for Results using PollerError.
pub type Result<T> = std::result::Result<T, PollerError>;
