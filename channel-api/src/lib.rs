//! # channel-api
//!
//! Typed client for the server's current-channel resource.
//!
//! The server publishes which channel an embedded TV frame should show.
//! This crate owns the wire contract for that resource and the HTTP
//! client that reads it; change detection and scheduling live in
//! `channel-poller`.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use channel_api::ChannelClient;
//!
//! let client = ChannelClient::new("http://tv.example.com")?;
//! let current = client.current_channel().await?;
//! println!("showing {} ({})", current.channel, current.id);
//! ```

mod channel;
mod client;
mod error;

pub use channel::{ChannelId, CurrentChannel};
pub use client::{ChannelClient, CHANNEL_PATH};
pub use error::{ApiError, Result};
