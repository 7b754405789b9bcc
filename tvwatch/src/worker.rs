//! Background worker bridging the sync facade to the async poller.
//!
//! The worker thread owns a current-thread tokio runtime. It runs the
//! [`ChannelPoller`], forwards its change events into a sync channel for
//! the blocking iterator, and applies commands sent from [`TvWatcher`].
//!
//! [`TvWatcher`]: crate::TvWatcher

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use channel_poller::{ChannelChange, ChannelPoller, ChannelSource, DisplayTarget, PollerConfig};
use tokio::sync::mpsc as tokio_mpsc;

/// Commands sent from the sync TvWatcher to the background worker.
pub(crate) enum Command {
    /// Attach the display target updated on channel changes
    Attach(Arc<dyn DisplayTarget>),
    /// Begin polling
    Start,
    /// Stop polling
    Stop,
    /// Shut the worker down
    Shutdown,
}

/// Spawn the background watch worker thread.
///
/// `polling` mirrors the poller's running state for sync callers.
pub(crate) fn spawn_watch_worker(
    config: PollerConfig,
    source: Arc<dyn ChannelSource>,
    command_rx: mpsc::Receiver<Command>,
    event_tx: mpsc::Sender<ChannelChange>,
    polling: Arc<AtomicBool>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                tracing::error!(error = %e, "failed to create tokio runtime for watch worker");
                return;
            }
        };

        rt.block_on(run_watch_loop(config, source, command_rx, event_tx, polling));
    })
}

/// Main loop running inside the worker's tokio runtime.
async fn run_watch_loop(
    config: PollerConfig,
    source: Arc<dyn ChannelSource>,
    command_rx: mpsc::Receiver<Command>,
    event_tx: mpsc::Sender<ChannelChange>,
    polling: Arc<AtomicBool>,
) {
    let (change_tx, mut change_rx) = tokio_mpsc::unbounded_channel();

    // Config was validated by the facade before the worker was spawned.
    let mut poller = match ChannelPoller::new(config, source, change_tx) {
        Ok(poller) => poller,
        Err(e) => {
            tracing::error!(error = %e, "failed to create channel poller");
            return;
        }
    };

    tracing::info!("watch worker started");

    loop {
        tokio::select! {
            // Forward change events to the sync iterator channel.
            change = change_rx.recv() => {
                match change {
                    Some(change) => {
                        if event_tx.send(change).is_err() {
                            tracing::debug!("change receiver dropped, shutting down watch worker");
                            break;
                        }
                    }
                    None => break,
                }
            }

            // Apply pending commands.
            _ = tokio::time::sleep(Duration::from_millis(10)) => {
                loop {
                    let command = match command_rx.try_recv() {
                        Ok(command) => command,
                        Err(mpsc::TryRecvError::Empty) => break,
                        // The watcher is gone; treat it like a shutdown.
                        Err(mpsc::TryRecvError::Disconnected) => Command::Shutdown,
                    };

                    match command {
                        Command::Attach(target) => {
                            poller.attach_target(target);
                        }
                        Command::Start => match poller.start() {
                            Ok(()) => polling.store(true, Ordering::SeqCst),
                            Err(e) => tracing::warn!(error = %e, "ignoring start command"),
                        },
                        Command::Stop => {
                            if let Err(e) = poller.stop().await {
                                tracing::warn!(error = %e, "ignoring stop command");
                            }
                            polling.store(false, Ordering::SeqCst);
                        }
                        Command::Shutdown => {
                            if poller.is_running() {
                                if let Err(e) = poller.stop().await {
                                    tracing::warn!(error = %e, "polling task did not stop cleanly");
                                }
                            }
                            polling.store(false, Ordering::SeqCst);
                            tracing::info!("watch worker shut down");
                            return;
                        }
                    }
                }
            }
        }
    }

    if poller.is_running() {
        let _ = poller.stop().await;
    }
    polling.store(false, Ordering::SeqCst);
    tracing::info!("watch worker shut down");
}
