//! # tvwatch
//!
//! Sync-first watcher for a server-driven TV channel.
//!
//! A server decides which channel an embedded frame should show and
//! publishes it at `GET /tv/channel`. [`TvWatcher`] polls that resource
//! on a fixed interval, detects changes against the last observed value,
//! and only on an actual change updates the attached display target and
//! emits a [`ChannelChange`]. The API is fully synchronous: all async
//! work is hidden in a background worker thread with its own tokio
//! runtime.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tvwatch::{TvFrame, TvWatcher};
//!
//! let watcher = TvWatcher::new("http://tv.example.com")?;
//!
//! let frame = Arc::new(TvFrame::new());
//! watcher.attach_target(frame.clone())?;
//! watcher.start()?;
//!
//! // Block on changes (no .await!)
//! for change in watcher.iter() {
//!     println!("now showing {}", change.channel.channel);
//! }
//! ```

pub mod logging;

mod error;
mod iter;
mod watcher;
mod worker;

pub use error::{Result, WatchError};
pub use iter::ChannelChangeIterator;
pub use watcher::TvWatcher;

// Re-export the vocabulary types callers interact with.
pub use channel_api::{ApiError, ChannelClient, ChannelId, CurrentChannel};
pub use channel_poller::{
    ChannelChange, ChannelSource, DisplayTarget, PollerConfig, PollerError, TargetError, TvFrame,
};
