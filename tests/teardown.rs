mod common;

use common::{
    CountingFeed, RecordingSurface, analysis_frame, harness, kline_frame, minute_bars,
    recording_sink,
};
use llm_kline_chart::application::ChartSession;
use llm_kline_chart::domain::chart::ChartTheme;
use llm_kline_chart::domain::errors::{ChartError, HistoryLoadError};
use llm_kline_chart::domain::feed::{FeedListener, FeedState};

#[test]
fn stop_before_history_resolves_releases_everything_once() {
    let h = harness();

    h.session.stop();
    h.session.apply_history(Ok(minute_bars(50)));

    let surface = h.surface.borrow();
    assert_eq!(surface.set_data_calls, 0);
    assert_eq!(surface.destroyed, 1);
    assert_eq!(h.closes.get(), 1);
    assert!(!h.session.is_live());
}

#[test]
fn repeated_stop_is_a_no_op() {
    let h = harness();
    h.session.stop();
    h.session.stop();
    h.session.clone().stop();

    assert_eq!(h.surface.borrow().destroyed, 1);
    assert_eq!(h.closes.get(), 1);
}

#[test]
fn frames_after_stop_do_not_touch_the_surface() {
    let h = harness();
    h.session.apply_history(Ok(minute_bars(2)));
    h.session.stop();

    h.session.handle_text(&kline_frame("2025-06-30 10:05:00", 1.0, 2.0, 0.5, 1.5));
    h.session.handle_text(&analysis_frame("2025-06-30 10:05:00", "bullish", 1.0));
    h.session.handle_text("garbage");

    let surface = h.surface.borrow();
    assert_eq!(surface.bars.len(), 2);
    assert!(surface.marker_applications.is_empty());
    assert_eq!(h.session.marker_count(), 0);
    assert!(h.reported.borrow().is_empty());
}

#[test]
fn late_history_failure_is_not_reported() {
    let h = harness();
    h.session.stop();
    h.session.apply_history(Err(HistoryLoadError::Network("aborted".to_string())));
    assert!(h.reported.borrow().is_empty());
}

#[test]
fn feed_attached_after_stop_is_closed_immediately() {
    let (surface, log) = RecordingSurface::new();
    let (sink, _) = recording_sink();
    let session = ChartSession::new(surface, ChartTheme::default(), sink);
    session.stop();

    let (feed, closes) = CountingFeed::new();
    session.attach_feed(feed);

    assert_eq!(closes.get(), 1);
    assert_eq!(log.borrow().destroyed, 1);
    assert_eq!(session.feed_state(), FeedState::Disconnected);
}

#[test]
fn session_without_feed_still_releases_the_surface() {
    let (surface, log) = RecordingSurface::new();
    let (sink, _) = recording_sink();
    let session = ChartSession::new(surface, ChartTheme::default(), sink);

    session.stop();

    assert_eq!(log.borrow().destroyed, 1);
}

#[test]
fn transport_loss_marks_the_feed_disconnected() {
    let h = harness();
    assert_eq!(h.session.feed_state(), FeedState::Connected);

    h.session.on_error(ChartError::Transport("connection reset".to_string()));
    h.session.on_disconnected();

    assert_eq!(h.session.feed_state(), FeedState::Disconnected);
    assert_eq!(
        h.reported.borrow().as_slice(),
        [ChartError::Transport("connection reset".to_string())]
    );
    assert!(h.session.is_live());

    h.session.stop();
    assert_eq!(h.closes.get(), 1);
}
