//! Configuration for the channel poller.

use std::time::Duration;

use crate::error::PollerError;

/// Configuration for a [`ChannelPoller`](crate::ChannelPoller).
#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// Interval between polls of the channel source
    /// Default: 5 seconds
    pub poll_interval: Duration,

    /// Timeout for a single channel request, applied when an HTTP client
    /// is built from this config; custom [`ChannelSource`](crate::ChannelSource)
    /// implementations enforce their own timeouts
    /// Default: 10 seconds
    pub request_timeout: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(5),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl PollerConfig {
    /// Create a new PollerConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a PollerConfig suited to tests and demos: sub-second polls.
    pub fn fast_polling() -> Self {
        Self {
            poll_interval: Duration::from_millis(250),
            request_timeout: Duration::from_secs(2),
        }
    }

    /// Validate the configuration and return any issues.
    pub fn validate(&self) -> Result<(), PollerError> {
        if self.poll_interval == Duration::ZERO {
            return Err(PollerError::Configuration(
                "poll interval must be greater than 0".to_string(),
            ));
        }

        if self.request_timeout == Duration::ZERO {
            return Err(PollerError::Configuration(
                "request timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Set the poll interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Set the per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
