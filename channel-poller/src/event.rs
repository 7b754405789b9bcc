//! Change events emitted when the observed channel changes.

use std::time::Instant;

use channel_api::CurrentChannel;

/// Emitted once per detected channel change.
///
/// Unchanged polls emit nothing; consumers only ever see transitions.
#[derive(Debug, Clone)]
pub struct ChannelChange {
    /// The newly observed channel
    pub channel: CurrentChannel,

    /// When the change was detected
    pub timestamp: Instant,
}

impl ChannelChange {
    /// Create a change event stamped with the current time.
    pub fn new(channel: CurrentChannel) -> Self {
        Self {
            channel,
            timestamp: Instant::now(),
        }
    }
}

impl PartialEq for ChannelChange {
    fn eq(&self, other: &Self) -> bool {
        // Timestamp not included in equality
        self.channel == other.channel
    }
}
