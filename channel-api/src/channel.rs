//! Wire types for the current-channel resource.

use serde::{Deserialize, Serialize};

/// Opaque identifier assigned by the server to a channel selection.
///
/// The identifier carries no meaning on the client beyond equality: a new
/// id means the channel changed. It increments whenever someone switches
/// the channel server-side, even back to a previously shown URL.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(u64);

impl ChannelId {
    /// Create a channel id from its raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ChannelId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The current channel as reported by the server.
///
/// Wire shape is a structured JSON object:
///
/// ```json
/// {"id": 3, "channel": "https://player.example.com/?channel=news"}
/// ```
///
/// A bare URL string body is not part of the contract and is rejected by
/// the client. Whole-value equality is the change-detection comparison:
/// two responses describe the same selection only if both fields match.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CurrentChannel {
    /// Identifier of the selection, compared to detect changes
    pub id: ChannelId,
    /// URL to load into the display target
    pub channel: String,
}

impl CurrentChannel {
    /// Create a channel value.
    pub fn new(id: impl Into<ChannelId>, channel: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            channel: channel.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_structured_payload() {
        let parsed: CurrentChannel =
            serde_json::from_str(r#"{"id": 7, "channel": "https://example.com/stream"}"#).unwrap();

        assert_eq!(parsed, CurrentChannel::new(7, "https://example.com/stream"));
    }

    #[test]
    fn rejects_bare_url_string() {
        // The legacy contract shipped the URL as a plain string body. Only
        // the structured object is supported.
        let result = serde_json::from_str::<CurrentChannel>(r#""https://example.com/stream""#);
        assert!(result.is_err());
    }

    #[test]
    fn equality_covers_both_fields() {
        let a = CurrentChannel::new(1, "https://a.example.com");
        let same = CurrentChannel::new(1, "https://a.example.com");
        let new_id = CurrentChannel::new(2, "https://a.example.com");
        let new_url = CurrentChannel::new(1, "https://b.example.com");

        assert_eq!(a, same);
        assert_ne!(a, new_id);
        assert_ne!(a, new_url);
    }

    #[test]
    fn channel_id_display() {
        assert_eq!(ChannelId::new(42).to_string(), "42");
        assert_eq!(ChannelId::from(42).value(), 42);
    }
}
