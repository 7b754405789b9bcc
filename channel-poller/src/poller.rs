//! The polling task: issue, compare, publish.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use channel_api::CurrentChannel;
use parking_lot::RwLock;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::PollerConfig;
use crate::error::{PollerError, Result};
use crate::event::ChannelChange;
use crate::source::ChannelSource;
use crate::state::{Applied, ChannelState};
use crate::target::DisplayTarget;

type SharedTarget = Arc<RwLock<Option<Arc<dyn DisplayTarget>>>>;

/// Interval-driven watcher for the current channel.
///
/// On [`start`](ChannelPoller::start), one poll is issued immediately and
/// then one per configured interval, until [`stop`](ChannelPoller::stop).
/// Each poll runs as its own task so a slow response never delays the
/// cadence; the shared [`ChannelState`] discards responses that arrive
/// after a newer one has already been applied.
///
/// A failed poll (network error, bad status, malformed payload) logs a
/// warning and leaves both the state and the display target untouched.
/// The next tick fires on schedule regardless, so transient failures heal
/// themselves without any retry machinery.
pub struct ChannelPoller {
    config: PollerConfig,
    source: Arc<dyn ChannelSource>,
    state: Arc<ChannelState>,
    target: SharedTarget,
    event_tx: mpsc::UnboundedSender<ChannelChange>,
    next_seq: Arc<AtomicU64>,
    shutdown_tx: Option<mpsc::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl ChannelPoller {
    /// Create a poller over `source`, publishing changes to `event_tx`.
    pub fn new(
        config: PollerConfig,
        source: Arc<dyn ChannelSource>,
        event_tx: mpsc::UnboundedSender<ChannelChange>,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            source,
            state: Arc::new(ChannelState::new()),
            target: Arc::new(RwLock::new(None)),
            event_tx,
            next_seq: Arc::new(AtomicU64::new(0)),
            shutdown_tx: None,
            task: None,
        })
    }

    /// Attach the display target that receives changed channel URLs.
    ///
    /// May be called before or while polling; it takes effect from the
    /// next applied change.
    pub fn attach_target(&self, target: Arc<dyn DisplayTarget>) {
        *self.target.write() = Some(target);
    }

    /// Detach the display target; changes still update state and events.
    pub fn detach_target(&self) {
        *self.target.write() = None;
    }

    /// The last channel observed by this poller, if any poll succeeded.
    pub fn last_channel(&self) -> Option<CurrentChannel> {
        self.state.last()
    }

    /// Whether the polling task is currently running.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().map(|t| !t.is_finished()).unwrap_or(false)
    }

    /// Start polling. The first poll is issued immediately.
    pub fn start(&mut self) -> Result<()> {
        if self.is_running() {
            return Err(PollerError::AlreadyRunning);
        }

        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);
        let task = tokio::spawn(Self::poll_loop(
            self.config.poll_interval,
            Arc::clone(&self.source),
            Arc::clone(&self.state),
            Arc::clone(&self.target),
            self.event_tx.clone(),
            Arc::clone(&self.next_seq),
            shutdown_rx,
        ));

        self.shutdown_tx = Some(shutdown_tx);
        self.task = Some(task);
        Ok(())
    }

    /// Stop polling and wait for the polling task to finish.
    ///
    /// Requests already in flight may still complete and apply through
    /// the ordering guard; no new polls are issued after this returns.
    pub async fn stop(&mut self) -> Result<()> {
        let task = self.task.take().ok_or(PollerError::NotRunning)?;

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(()).await;
        }

        task.await
            .map_err(|e| PollerError::Shutdown(format!("failed to join polling task: {e}")))
    }

    async fn poll_loop(
        poll_interval: Duration,
        source: Arc<dyn ChannelSource>,
        state: Arc<ChannelState>,
        target: SharedTarget,
        event_tx: mpsc::UnboundedSender<ChannelChange>,
        next_seq: Arc<AtomicU64>,
        mut shutdown_rx: mpsc::Receiver<()>,
    ) {
        tracing::debug!(interval = ?poll_interval, "channel polling started");

        // The first tick fires immediately, then once per interval.
        let mut ticker = tokio::time::interval(poll_interval);

        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    tracing::debug!("channel polling stopped");
                    break;
                }
                _ = ticker.tick() => {
                    let seq = next_seq.fetch_add(1, Ordering::Relaxed) + 1;
                    let source = Arc::clone(&source);
                    let state = Arc::clone(&state);
                    let target = Arc::clone(&target);
                    let event_tx = event_tx.clone();

                    // Fire-and-forget: the next tick never waits on a
                    // slow response.
                    tokio::spawn(async move {
                        Self::poll_once(seq, source, state, target, event_tx).await;
                    });
                }
            }
        }
    }

    async fn poll_once(
        seq: u64,
        source: Arc<dyn ChannelSource>,
        state: Arc<ChannelState>,
        target: SharedTarget,
        event_tx: mpsc::UnboundedSender<ChannelChange>,
    ) {
        let channel = match source.current_channel().await {
            Ok(channel) => channel,
            Err(e) => {
                // Keep the last known channel; the next tick retries on
                // schedule.
                tracing::warn!(seq, error = %e, "channel poll failed");
                return;
            }
        };

        match state.apply(seq, channel) {
            Applied::Changed(channel) => {
                tracing::info!(id = %channel.id, url = %channel.channel, "channel changed");

                let attached = target.read().clone();
                if let Some(target) = attached {
                    if let Err(e) = target.set_source(&channel.channel) {
                        tracing::warn!(error = %e, "failed to update display target");
                    }
                }

                // A dropped receiver means nobody is listening for events;
                // polling continues so an attached target still tracks the
                // channel.
                let _ = event_tx.send(ChannelChange::new(channel));
            }
            Applied::Unchanged => {
                tracing::trace!(seq, "channel unchanged");
            }
            Applied::Stale => {
                tracing::debug!(seq, newest = state.applied_seq(), "discarding stale poll response");
            }
        }
    }
}

impl Drop for ChannelPoller {
    fn drop(&mut self) {
        // Best effort; the polling task also winds down once its shutdown
        // sender is gone.
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.try_send(());
        }
    }
}
