//! Seam between the poller and whatever serves the current channel.

use async_trait::async_trait;
use channel_api::{ApiError, ChannelClient, CurrentChannel};

/// Anything the poller can read the current channel from.
///
/// [`ChannelClient`] implements this for the real HTTP endpoint; tests
/// substitute scripted sources to drive the poller deterministically.
#[async_trait]
pub trait ChannelSource: Send + Sync + 'static {
    /// Fetch the current channel.
    async fn current_channel(&self) -> Result<CurrentChannel, ApiError>;
}

#[async_trait]
impl ChannelSource for ChannelClient {
    async fn current_channel(&self) -> Result<CurrentChannel, ApiError> {
        ChannelClient::current_channel(self).await
    }
}
