//! Display-target seam: where a changed channel URL gets written.

use parking_lot::RwLock;

use crate::error::TargetError;

/// Receives the channel URL when a change is detected.
///
/// This is the only externally observable output of the poller. The
/// write happens at most once per change; an unchanged poll never
/// rewrites the source, so embedded content is not reloaded needlessly.
pub trait DisplayTarget: Send + Sync {
    /// Current source URL, if one has been set.
    fn source(&self) -> Option<String>;

    /// Point the target at a new source URL.
    fn set_source(&self, url: &str) -> Result<(), TargetError>;
}

/// In-memory display target standing in for the embedded TV frame.
///
/// Embedders read [`source`](DisplayTarget::source) to drive whatever
/// actually renders the content (a webview, an iframe bridge, a cast
/// receiver). Custom targets implement [`DisplayTarget`] directly.
#[derive(Debug, Default)]
pub struct TvFrame {
    src: RwLock<Option<String>>,
}

impl TvFrame {
    /// Create a frame with no source set.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplayTarget for TvFrame {
    fn source(&self) -> Option<String> {
        self.src.read().clone()
    }

    fn set_source(&self, url: &str) -> Result<(), TargetError> {
        *self.src.write() = Some(url.to_string());
        Ok(())
    }
}
