//! End-to-end watcher test against a mock channel endpoint.

use std::sync::Arc;
use std::time::Duration;

use tvwatch::{ChannelId, DisplayTarget, PollerConfig, TvFrame, TvWatcher};

fn fast_config() -> PollerConfig {
    PollerConfig::default()
        .with_poll_interval(Duration::from_millis(50))
        .with_request_timeout(Duration::from_secs(2))
}

#[test]
fn watches_channel_changes_end_to_end() {
    let mut server = mockito::Server::new();
    let _initial = server
        .mock("GET", "/tv/channel")
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 1, "channel": "https://example.com/a"}"#)
        .expect_at_least(1)
        .create();

    let watcher = TvWatcher::with_config(&server.url(), fast_config()).unwrap();
    let frame = Arc::new(TvFrame::new());
    watcher.attach_target(frame.clone()).unwrap();
    watcher.start().unwrap();

    let iter = watcher.iter();
    let change = iter
        .recv_timeout(Duration::from_secs(3))
        .expect("first change");
    assert_eq!(change.channel.id, ChannelId::new(1));
    assert_eq!(frame.source().as_deref(), Some("https://example.com/a"));

    // The same payload keeps coming back: no further events, no rewrite.
    assert!(iter.recv_timeout(Duration::from_millis(300)).is_none());
    assert_eq!(frame.source().as_deref(), Some("https://example.com/a"));

    let _switched = server
        .mock("GET", "/tv/channel")
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 2, "channel": "https://example.com/b"}"#)
        .expect_at_least(1)
        .create();

    let change = iter
        .recv_timeout(Duration::from_secs(3))
        .expect("second change");
    assert_eq!(change.channel.id, ChannelId::new(2));
    assert_eq!(frame.source().as_deref(), Some("https://example.com/b"));

    watcher.stop().unwrap();
    watcher.shutdown();
}

#[test]
fn failed_polls_surface_nothing_and_recover() {
    let mut server = mockito::Server::new();
    let _broken = server
        .mock("GET", "/tv/channel")
        .with_status(503)
        .expect_at_least(1)
        .create();

    let watcher = TvWatcher::with_config(&server.url(), fast_config()).unwrap();
    let frame = Arc::new(TvFrame::new());
    watcher.attach_target(frame.clone()).unwrap();
    watcher.start().unwrap();

    let iter = watcher.iter();
    assert!(iter.recv_timeout(Duration::from_millis(400)).is_none());
    assert_eq!(frame.source(), None);

    let _recovered = server
        .mock("GET", "/tv/channel")
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 3, "channel": "https://example.com/c"}"#)
        .expect_at_least(1)
        .create();

    let change = iter
        .recv_timeout(Duration::from_secs(3))
        .expect("change after recovery");
    assert_eq!(change.channel.id, ChannelId::new(3));
    assert_eq!(frame.source().as_deref(), Some("https://example.com/c"));

    watcher.shutdown();
}
