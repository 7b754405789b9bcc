//! # channel-poller
//!
//! Interval-driven polling of a current-channel source with change
//! detection.
//!
//! A [`ChannelPoller`] asks a [`ChannelSource`] for the current channel:
//! once immediately on start, then once per configured interval. Each
//! response is applied to a [`ChannelState`] that keeps the last observed
//! value: only a genuinely new value updates the attached
//! [`DisplayTarget`] and produces a [`ChannelChange`] event. Re-applying
//! an identical value is a no-op, so embedded content is never reloaded
//! for nothing.
//!
//! Polls are fire-and-forget: a slow response never delays the next tick,
//! and responses that arrive after a newer one has been applied are
//! discarded via per-request sequence numbers.

mod config;
mod error;
mod event;
mod poller;
mod source;
mod state;
mod target;

pub use config::PollerConfig;
pub use error::{PollerError, Result, TargetError};
pub use event::ChannelChange;
pub use poller::ChannelPoller;
pub use source::ChannelSource;
pub use state::{Applied, ChannelState};
pub use target::{DisplayTarget, TvFrame};
