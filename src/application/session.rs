use std::cell::RefCell;
use std::rc::Rc;

use super::error_sink::ErrorSink;
use crate::domain::{
    analysis::{Marker, MarkerLog, Signal},
    chart::{ChartSurface, ChartTheme, PriceSeries},
    errors::{ChartError, HistoryLoadError},
    feed::{FeedConnection, FeedListener, FeedMessage, FeedState},
    logging::{LogComponent, LogLevel, get_logger},
    market_data::PriceBar,
};
use crate::infrastructure::dto::decode_feed_message;

type MarkerObserver = Rc<dyn Fn(&[Marker])>;

/// State of one mounted chart: its surface, its feed, and its markers.
///
/// Clones share the same state. Every entry point checks liveness first, so
/// a history response or feed frame arriving after [`ChartSession::stop`]
/// never touches the released surface.
pub struct ChartSession<S: ChartSurface> {
    inner: Rc<RefCell<SessionState<S>>>,
    errors: Rc<dyn ErrorSink>,
}

struct SessionState<S> {
    live: bool,
    surface: Option<S>,
    feed: Option<Box<dyn FeedConnection>>,
    feed_state: FeedState,
    markers: MarkerLog,
    theme: ChartTheme,
    observer: Option<MarkerObserver>,
}

impl<S: ChartSurface> Clone for ChartSession<S> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner), errors: Rc::clone(&self.errors) }
    }
}

impl<S: ChartSurface> ChartSession<S> {
    pub fn new(surface: S, theme: ChartTheme, errors: Rc<dyn ErrorSink>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SessionState {
                live: true,
                surface: Some(surface),
                feed: None,
                feed_state: FeedState::Disconnected,
                markers: MarkerLog::new(),
                theme,
                observer: None,
            })),
            errors,
        }
    }

    pub fn is_live(&self) -> bool {
        self.inner.borrow().live
    }

    pub fn feed_state(&self) -> FeedState {
        self.inner.borrow().feed_state
    }

    pub fn markers(&self) -> Vec<Marker> {
        self.inner.borrow().markers.as_slice().to_vec()
    }

    pub fn marker_count(&self) -> usize {
        self.inner.borrow().markers.len()
    }

    /// Label of the newest marker
    pub fn latest_marker_text(&self) -> Option<String> {
        self.inner.borrow().markers.latest().map(|marker| marker.text.clone())
    }

    /// Called with the full list after every marker change
    pub fn on_markers_changed(&self, observer: impl Fn(&[Marker]) + 'static) {
        self.inner.borrow_mut().observer = Some(Rc::new(observer));
    }

    /// Result of the one-shot history load: replaces the whole series
    pub fn apply_history(&self, result: Result<Vec<PriceBar>, HistoryLoadError>) {
        let bars = match result {
            Ok(bars) => bars,
            Err(e) => return self.report(e.into()),
        };

        let mut state = self.inner.borrow_mut();
        let live = state.live;
        let Some(surface) = state.surface.as_mut().filter(|_| live) else {
            get_logger().debug(
                LogComponent::Application("Session"),
                "history arrived after teardown; dropped",
            );
            return;
        };

        let count = bars.len();
        surface.series_mut().set_data(bars);
        get_logger().info(
            LogComponent::Application("Session"),
            &format!("📊 Series loaded with {count} bars"),
        );
    }

    /// Decode and apply one raw feed frame
    pub fn handle_text(&self, text: &str) {
        match decode_feed_message(text) {
            Ok(message) => self.dispatch(message),
            Err(e) => {
                get_logger().log_with_metadata(
                    LogLevel::Debug,
                    LogComponent::Application("Session"),
                    "undecodable frame",
                    text,
                );
                self.report(e.into());
            }
        }
    }

    /// Apply one decoded feed message
    pub fn dispatch(&self, message: FeedMessage) {
        if !self.is_live() {
            return;
        }
        crate::log_trace!(LogComponent::Application("Session"), "feed message {}", message.kind());
        match message {
            FeedMessage::Bar(bar) => self.apply_bar(bar),
            FeedMessage::Analysis(signal) => self.apply_signal(&signal),
            FeedMessage::Unrecognized(kind) => {
                crate::log_debug!(
                    LogComponent::Application("Session"),
                    "ignoring feed message of type {kind:?}"
                );
            }
        }
    }

    fn apply_bar(&self, bar: PriceBar) {
        let outcome = {
            let mut state = self.inner.borrow_mut();
            match state.surface.as_mut() {
                Some(surface) => surface.series_mut().update(bar),
                None => return,
            }
        };
        if let Err(e) = outcome {
            self.report(e.into());
        }
    }

    fn apply_signal(&self, signal: &Signal) {
        let notify = {
            let mut state = self.inner.borrow_mut();
            let marker = Marker::from_signal(signal, &state.theme);

            let confidence =
                signal.confidence.map(|c| format!(" ({:.0}%)", c * 100.0)).unwrap_or_default();
            get_logger().info(
                LogComponent::Application("Session"),
                &format!(
                    "🧠 {}{} {}",
                    marker.text,
                    confidence,
                    signal.message.as_deref().unwrap_or("")
                ),
            );

            let SessionState { surface, markers, observer, .. } = &mut *state;
            markers.push(marker);
            if let Some(surface) = surface.as_mut() {
                apply_markers(surface.series_mut(), markers.as_slice());
            }
            observer.clone().map(|observer| (observer, markers.as_slice().to_vec()))
        };

        if let Some((observer, markers)) = notify {
            observer(&markers);
        }
    }

    /// Take ownership of the open feed. A feed attached after `stop` is
    /// closed right away.
    pub fn attach_feed(&self, mut feed: Box<dyn FeedConnection>) {
        let mut state = self.inner.borrow_mut();
        if !state.live {
            drop(state);
            feed.close();
            return;
        }
        state.feed = Some(feed);
        state.feed_state = FeedState::Connected;
    }

    /// Forward an error to the sink while the session is live
    pub fn report(&self, error: ChartError) {
        if self.is_live() {
            self.errors.report(error);
        } else {
            crate::log_debug!(
                LogComponent::Application("Session"),
                "suppressed error after teardown: {error}"
            );
        }
    }

    /// Close the feed and release the surface. Only the first call does work.
    pub fn stop(&self) {
        let (feed, surface) = {
            let mut state = self.inner.borrow_mut();
            if !state.live {
                return;
            }
            state.live = false;
            state.feed_state = FeedState::Disconnected;
            (state.feed.take(), state.surface.take())
        };

        if let Some(mut feed) = feed {
            feed.close();
        }
        if let Some(surface) = surface {
            surface.destroy();
        }

        get_logger().info(LogComponent::Application("Session"), "🛑 Chart session stopped");
    }
}

/// Push the full marker list to the series
fn apply_markers<P: PriceSeries>(series: &mut P, markers: &[Marker]) {
    series.set_markers(markers);
}

impl<S: ChartSurface> FeedListener for ChartSession<S> {
    fn on_text(&self, text: &str) {
        self.handle_text(text);
    }

    fn on_error(&self, error: ChartError) {
        self.report(error);
    }

    fn on_disconnected(&self) {
        let mut state = self.inner.borrow_mut();
        state.feed_state = FeedState::Disconnected;
    }
}
