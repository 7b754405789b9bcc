//! Sync iterator for consuming channel changes from a [`TvWatcher`].
//!
//! [`TvWatcher`]: crate::TvWatcher

use std::sync::{mpsc, Arc, Mutex};
use std::time::Duration;

use channel_poller::ChannelChange;

/// Blocking iterator over channel changes.
///
/// Blocks on `next()` until a change arrives or the watcher shuts down.
/// Use [`try_recv`](Self::try_recv) for non-blocking access and
/// [`recv_timeout`](Self::recv_timeout) to bound the wait.
pub struct ChannelChangeIterator {
    rx: Arc<Mutex<mpsc::Receiver<ChannelChange>>>,
}

impl ChannelChangeIterator {
    pub(crate) fn new(rx: Arc<Mutex<mpsc::Receiver<ChannelChange>>>) -> Self {
        Self { rx }
    }

    /// Block until a change is available.
    ///
    /// Returns `None` once the watcher has shut down.
    pub fn recv(&self) -> Option<ChannelChange> {
        self.rx.lock().ok()?.recv().ok()
    }

    /// Receive a change without blocking.
    ///
    /// Returns `None` if no change is currently queued.
    pub fn try_recv(&self) -> Option<ChannelChange> {
        self.rx.lock().ok()?.try_recv().ok()
    }

    /// Block until a change is available or the timeout expires.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<ChannelChange> {
        self.rx.lock().ok()?.recv_timeout(timeout).ok()
    }

    /// Non-blocking iterator over the changes queued right now.
    pub fn try_iter(&self) -> TryIter<'_> {
        TryIter { inner: self }
    }

    /// Iterator that waits up to `timeout` for each change.
    pub fn timeout_iter(&self, timeout: Duration) -> TimeoutIter<'_> {
        TimeoutIter {
            inner: self,
            timeout,
        }
    }
}

impl Iterator for ChannelChangeIterator {
    type Item = ChannelChange;

    fn next(&mut self) -> Option<Self::Item> {
        self.recv()
    }
}

impl Clone for ChannelChangeIterator {
    fn clone(&self) -> Self {
        Self {
            rx: Arc::clone(&self.rx),
        }
    }
}

/// Non-blocking iterator over currently queued changes.
pub struct TryIter<'a> {
    inner: &'a ChannelChangeIterator,
}

impl<'a> Iterator for TryIter<'a> {
    type Item = ChannelChange;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.try_recv()
    }
}

/// Blocking iterator that gives up after `timeout` without a change.
pub struct TimeoutIter<'a> {
    inner: &'a ChannelChangeIterator,
    timeout: Duration,
}

impl<'a> Iterator for TimeoutIter<'a> {
    type Item = ChannelChange;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.recv_timeout(self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use channel_api::CurrentChannel;

    fn change(id: u64) -> ChannelChange {
        ChannelChange::new(CurrentChannel::new(id, format!("https://example.com/{id}")))
    }

    #[test]
    fn try_recv_is_none_when_empty() {
        let (tx, rx) = mpsc::channel();
        let iter = ChannelChangeIterator::new(Arc::new(Mutex::new(rx)));

        assert!(iter.try_recv().is_none());
        drop(tx);
    }

    #[test]
    fn delivers_changes_in_order() {
        let (tx, rx) = mpsc::channel();
        let iter = ChannelChangeIterator::new(Arc::new(Mutex::new(rx)));

        tx.send(change(1)).unwrap();
        tx.send(change(2)).unwrap();

        let collected: Vec<_> = iter.try_iter().collect();
        assert_eq!(collected, vec![change(1), change(2)]);
    }

    #[test]
    fn recv_timeout_expires_when_empty() {
        let (tx, rx) = mpsc::channel::<ChannelChange>();
        let iter = ChannelChangeIterator::new(Arc::new(Mutex::new(rx)));

        let start = std::time::Instant::now();
        assert!(iter.recv_timeout(Duration::from_millis(50)).is_none());
        assert!(start.elapsed() >= Duration::from_millis(45));

        drop(tx);
    }

    #[test]
    fn recv_returns_none_after_shutdown() {
        let (tx, rx) = mpsc::channel::<ChannelChange>();
        let iter = ChannelChangeIterator::new(Arc::new(Mutex::new(rx)));

        drop(tx);
        assert!(iter.recv().is_none());
    }

    #[test]
    fn clones_share_the_stream() {
        let (tx, rx) = mpsc::channel();
        let a = ChannelChangeIterator::new(Arc::new(Mutex::new(rx)));
        let b = a.clone();

        tx.send(change(1)).unwrap();
        assert!(a.try_recv().is_some());
        assert!(b.try_recv().is_none());
    }
}
