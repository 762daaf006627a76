use crate::domain::analysis::Signal;
use crate::domain::market_data::PriceBar;

/// A decoded live feed frame
#[derive(Debug, Clone, PartialEq)]
pub enum FeedMessage {
    /// `kline`: incremental bar update
    Bar(PriceBar),
    /// `llm_analysis`: directional signal
    Analysis(Signal),
    /// Any other `type`, kept only for logging
    Unrecognized(String),
}

impl FeedMessage {
    pub fn kind(&self) -> &str {
        match self {
            FeedMessage::Bar(_) => "kline",
            FeedMessage::Analysis(_) => "llm_analysis",
            FeedMessage::Unrecognized(kind) => kind,
        }
    }
}

/// Connected / not connected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedState {
    Connected,
    #[default]
    Disconnected,
}

/// An open feed connection the session can shut down
pub trait FeedConnection {
    /// Terminate the connection. Calling it again is a no-op.
    fn close(&mut self);
}

/// Receiver of live feed events, called on the event loop in delivery order
pub trait FeedListener {
    /// One raw text frame
    fn on_text(&self, text: &str);

    fn on_error(&self, error: crate::domain::errors::ChartError);

    /// Transport ended without a local close
    fn on_disconnected(&self);
}
