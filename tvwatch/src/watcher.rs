//! Sync-first facade over the async channel poller.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread::JoinHandle;

use channel_api::ChannelClient;
use channel_poller::{ChannelChange, DisplayTarget, PollerConfig};

use crate::error::{Result, WatchError};
use crate::iter::ChannelChangeIterator;
use crate::worker::{spawn_watch_worker, Command};

/// Watches the server's current channel and applies changes to a
/// display target.
///
/// The API is fully synchronous; polling runs on a background thread
/// with its own tokio runtime. Commands (`attach_target`, `start`,
/// `stop`) are applied by the worker within a few milliseconds of being
/// sent, so state queries like [`is_polling`](Self::is_polling) are
/// eventually consistent with them.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use std::time::Duration;
/// use tvwatch::{TvFrame, TvWatcher};
///
/// let watcher = TvWatcher::new("http://tv.example.com")?;
/// let frame = Arc::new(TvFrame::new());
/// watcher.attach_target(frame.clone())?;
/// watcher.start()?;
///
/// while let Some(change) = watcher.iter().recv_timeout(Duration::from_secs(30)) {
///     println!("now showing {}", change.channel.channel);
/// }
/// ```
pub struct TvWatcher {
    /// Send commands to the background worker
    command_tx: mpsc::Sender<Command>,

    /// Receive change events from the background worker
    event_rx: Arc<Mutex<mpsc::Receiver<ChannelChange>>>,

    /// Mirror of the poller's running state
    polling: Arc<AtomicBool>,

    /// Background worker handle (kept alive)
    _worker: JoinHandle<()>,
}

impl TvWatcher {
    /// Create a watcher for the channel endpoint under `base_url`, with
    /// the default 5-second poll interval.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, PollerConfig::default())
    }

    /// Create a watcher with a custom poller configuration.
    pub fn with_config(base_url: &str, config: PollerConfig) -> Result<Self> {
        config.validate()?;
        let client = ChannelClient::with_timeout(base_url, config.request_timeout)?;

        let (command_tx, command_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let polling = Arc::new(AtomicBool::new(false));

        let worker = spawn_watch_worker(
            config,
            Arc::new(client),
            command_rx,
            event_tx,
            Arc::clone(&polling),
        );

        Ok(Self {
            command_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
            polling,
            _worker: worker,
        })
    }

    /// Attach the display target updated on channel changes.
    ///
    /// May be called before or after [`start`](Self::start); it takes
    /// effect from the next detected change.
    pub fn attach_target(&self, target: Arc<dyn DisplayTarget>) -> Result<()> {
        self.send(Command::Attach(target))
    }

    /// Begin polling. The first request goes out immediately.
    pub fn start(&self) -> Result<()> {
        self.send(Command::Start)
    }

    /// Stop polling. Requests already in flight may still complete.
    pub fn stop(&self) -> Result<()> {
        self.send(Command::Stop)
    }

    /// Whether the polling task is currently running.
    pub fn is_polling(&self) -> bool {
        self.polling.load(Ordering::SeqCst)
    }

    /// Blocking iterator over channel changes.
    ///
    /// Iterators can be cloned and created repeatedly; they all consume
    /// from the same stream.
    pub fn iter(&self) -> ChannelChangeIterator {
        ChannelChangeIterator::new(Arc::clone(&self.event_rx))
    }

    /// Shut down the background worker.
    ///
    /// Called automatically on drop; exposed for deterministic teardown.
    pub fn shutdown(&self) {
        let _ = self.command_tx.send(Command::Shutdown);
    }

    fn send(&self, command: Command) -> Result<()> {
        self.command_tx
            .send(command)
            .map_err(|_| WatchError::WorkerDisconnected)
    }
}

impl Drop for TvWatcher {
    fn drop(&mut self) {
        let _ = self.command_tx.send(Command::Shutdown);
    }
}
