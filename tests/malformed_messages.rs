mod common;

use common::{harness, minute_bars};
use llm_kline_chart::domain::errors::{ChartError, MalformedMessageError};

#[test]
fn unparseable_frame_is_reported_as_malformed() {
    let h = harness();

    h.session.handle_text("{\"type\": \"kline\", ");

    let reported = h.reported.borrow();
    assert_eq!(reported.len(), 1);
    assert!(matches!(reported[0], ChartError::Malformed(MalformedMessageError::Envelope(_))));
}

#[test]
fn missing_fields_are_reported_with_the_message_kind() {
    let h = harness();

    h.session.handle_text(r#"{"type":"llm_analysis","data":{"signal":"bullish"}}"#);

    let reported = h.reported.borrow();
    match &reported[..] {
        [ChartError::Malformed(MalformedMessageError::Payload { kind, .. })] => {
            assert_eq!(kind, "llm_analysis")
        }
        other => panic!("unexpected errors: {other:?}"),
    }
}

#[test]
fn unknown_signal_word_is_malformed() {
    let h = harness();
    h.session.handle_text(
        r#"{"type":"llm_analysis","data":{"timestamp":"2025-06-30 10:00:00","signal":"sideways","target_price":1}}"#,
    );
    assert_eq!(h.reported.borrow().len(), 1);
    assert_eq!(h.session.marker_count(), 0);
}

#[test]
fn unrecognized_type_is_silently_ignored() {
    let h = harness();
    h.session.apply_history(Ok(minute_bars(2)));

    h.session.handle_text(r#"{"type":"ticker","data":{"price":1}}"#);

    assert!(h.reported.borrow().is_empty());
    assert_eq!(h.surface.borrow().bars.len(), 2);
    assert!(h.surface.borrow().marker_applications.is_empty());
}

#[test]
fn a_bad_frame_does_not_stop_later_frames() {
    let h = harness();
    h.session.handle_text("nope");
    h.session.handle_text(&common::kline_frame("2025-06-30 10:00:00", 1.0, 2.0, 0.5, 1.5));
    assert_eq!(h.surface.borrow().bars.len(), 1);
    assert_eq!(h.reported.borrow().len(), 1);
}
