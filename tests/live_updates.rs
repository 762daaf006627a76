mod common;

use common::{T0, bar_at, harness, kline_frame, minute_bars};
use llm_kline_chart::domain::errors::{ChartError, SeriesError};
use llm_kline_chart::domain::feed::FeedMessage;
use quickcheck_macros::quickcheck;

#[test]
fn kline_with_latest_time_replaces_the_bar() {
    let h = harness();
    h.session.apply_history(Ok(minute_bars(3)));

    h.session.handle_text(&kline_frame("2025-06-30 10:02:00", 102.0, 110.0, 101.0, 109.5));

    let surface = h.surface.borrow();
    assert_eq!(surface.bars.len(), 3);
    let latest = surface.bars.latest().unwrap();
    assert_eq!(latest.high.value(), 110.0);
    assert_eq!(latest.close.value(), 109.5);
}

#[test]
fn kline_with_later_time_appends_one_bar() {
    let h = harness();
    h.session.apply_history(Ok(minute_bars(3)));

    h.session.handle_text(&kline_frame("2025-06-30 10:03:00", 103.0, 104.0, 102.0, 103.5));

    let surface = h.surface.borrow();
    assert_eq!(surface.bars.len(), 4);
    assert_eq!(surface.bars.latest().unwrap().time.value(), T0 + 180);
}

#[test]
fn kline_before_any_history_starts_the_series() {
    let h = harness();
    h.session.handle_text(&kline_frame("2025-06-30 10:00:00", 1.0, 2.0, 0.5, 1.5));
    assert_eq!(h.surface.borrow().bars.len(), 1);
}

#[test]
fn stale_kline_is_rejected_and_reported() {
    let h = harness();
    h.session.apply_history(Ok(minute_bars(3)));

    h.session.handle_text(&kline_frame("2025-06-30 10:00:00", 1.0, 2.0, 0.5, 1.5));

    assert_eq!(h.surface.borrow().bars.bars(), minute_bars(3).as_slice());
    assert_eq!(
        h.reported.borrow().as_slice(),
        [ChartError::Series(SeriesError::OutOfOrder { latest: T0 + 120, incoming: T0 })]
    );
}

#[quickcheck]
fn bar_count_grows_by_at_most_one_per_message(steps: Vec<u8>) -> bool {
    let h = harness();
    let mut time = T0;
    let mut previous = 0;
    for step in steps {
        // 0 re-sends the current bar, anything else moves forward
        time += i64::from(step % 3) * 60;
        h.session.dispatch(FeedMessage::Bar(bar_at(time, f64::from(step))));
        let count = h.surface.borrow().bars.len();
        if count > previous + 1 || count < previous {
            return false;
        }
        previous = count;
    }
    h.reported.borrow().is_empty()
}
