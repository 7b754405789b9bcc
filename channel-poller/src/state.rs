//! Last-known channel state with change detection and response ordering.

use channel_api::CurrentChannel;
use parking_lot::Mutex;

/// Outcome of applying a poll response to the state.
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    /// The value differs from the stored baseline; the baseline was updated
    Changed(CurrentChannel),
    /// Same value as the baseline; nothing to do
    Unchanged,
    /// A response from a newer poll was already applied; this one is dropped
    Stale,
}

/// The comparison baseline for change detection.
///
/// Holds the last channel a poll response carried, plus the sequence
/// number of the newest applied response. Polls are fire-and-forget, so
/// responses may arrive out of order; [`apply`](ChannelState::apply)
/// drops anything older than what has already been seen instead of
/// letting a slow response overwrite newer data.
#[derive(Debug, Default)]
pub struct ChannelState {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last: Option<CurrentChannel>,
    applied_seq: u64,
}

impl ChannelState {
    /// Create an empty state: no baseline, nothing applied.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the response of the poll tagged `seq`.
    ///
    /// Sequence numbers start at 1 and increase with every issued
    /// request. A response whose sequence number is not newer than the
    /// last applied one is discarded as [`Applied::Stale`]. Note that an
    /// unchanged response still advances the applied sequence, so an
    /// older in-flight response cannot sneak in behind it.
    pub fn apply(&self, seq: u64, channel: CurrentChannel) -> Applied {
        let mut inner = self.inner.lock();

        if seq <= inner.applied_seq {
            return Applied::Stale;
        }
        inner.applied_seq = seq;

        if inner.last.as_ref() == Some(&channel) {
            Applied::Unchanged
        } else {
            inner.last = Some(channel.clone());
            Applied::Changed(channel)
        }
    }

    /// The last channel applied, if any poll has completed yet.
    pub fn last(&self) -> Option<CurrentChannel> {
        self.inner.lock().last.clone()
    }

    /// Sequence number of the newest applied response (0 = none yet).
    pub fn applied_seq(&self) -> u64 {
        self.inner.lock().applied_seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(id: u64, url: &str) -> CurrentChannel {
        CurrentChannel::new(id, url)
    }

    #[test]
    fn first_response_is_a_change() {
        let state = ChannelState::new();
        assert_eq!(state.last(), None);

        let applied = state.apply(1, channel(1, "https://example.com/a"));
        assert_eq!(applied, Applied::Changed(channel(1, "https://example.com/a")));
        assert_eq!(state.last(), Some(channel(1, "https://example.com/a")));
    }

    #[test]
    fn identical_response_is_unchanged() {
        let state = ChannelState::new();
        state.apply(1, channel(1, "https://example.com/a"));

        let applied = state.apply(2, channel(1, "https://example.com/a"));
        assert_eq!(applied, Applied::Unchanged);
        assert_eq!(state.last(), Some(channel(1, "https://example.com/a")));
    }

    #[test]
    fn new_value_replaces_baseline() {
        let state = ChannelState::new();
        state.apply(1, channel(1, "https://example.com/a"));

        let applied = state.apply(2, channel(2, "https://example.com/b"));
        assert_eq!(applied, Applied::Changed(channel(2, "https://example.com/b")));
        assert_eq!(state.last(), Some(channel(2, "https://example.com/b")));
    }

    #[test]
    fn reordered_response_is_dropped() {
        let state = ChannelState::new();

        // The response for poll 2 lands before the response for poll 1.
        state.apply(2, channel(2, "https://example.com/b"));
        let applied = state.apply(1, channel(1, "https://example.com/a"));

        assert_eq!(applied, Applied::Stale);
        assert_eq!(state.last(), Some(channel(2, "https://example.com/b")));
        assert_eq!(state.applied_seq(), 2);
    }

    #[test]
    fn unchanged_response_still_advances_the_sequence() {
        let state = ChannelState::new();
        state.apply(1, channel(1, "https://example.com/a"));

        // Poll 3 returns the same value, poll 2 was slow and carries an
        // older selection. Poll 2 must not win.
        assert_eq!(state.apply(3, channel(1, "https://example.com/a")), Applied::Unchanged);
        assert_eq!(state.apply(2, channel(9, "https://example.com/old")), Applied::Stale);
        assert_eq!(state.last(), Some(channel(1, "https://example.com/a")));
    }
}
