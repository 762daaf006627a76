use crate::domain::{
    errors::ChartError,
    feed::{FeedConnection, FeedListener},
    logging::{LogComponent, get_logger},
};
use futures::channel::oneshot;
use futures::future::{Either, select};
use futures::{Stream, StreamExt};
use gloo_net::websocket::{Message, WebSocketError, futures::WebSocket};

const NORMAL_CLOSURE: u16 = 1000;

/// Inbound-only websocket listener for the `{type, data}` feed
pub struct LiveFeedClient {
    url: String,
}

impl LiveFeedClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Open the socket and spawn the read loop. Frames go to `listener` in
    /// delivery order until the server closes, the transport fails, or the
    /// returned handle is closed. There is no reconnect.
    pub fn open<L>(&self, listener: L) -> Result<LiveFeedHandle, ChartError>
    where
        L: FeedListener + 'static,
    {
        crate::log_info!(
            LogComponent::Infrastructure("LiveFeed"),
            "🔌 Connecting to {}",
            self.url
        );

        let ws = WebSocket::open(&self.url)
            .map_err(|e| ChartError::Transport(format!("failed to open {}: {e}", self.url)))?;

        let (stop_tx, stop_rx) = oneshot::channel();
        wasm_bindgen_futures::spawn_local(run_feed(ws, stop_rx, listener));

        Ok(LiveFeedHandle { stop: Some(stop_tx) })
    }
}

/// Why [`read_frames`] returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedEnd {
    /// The close handle fired or was dropped; the socket is still open
    Stopped,
    /// The server closed the connection cleanly
    Closed,
    /// The transport failed and the error went to the listener
    Failed,
}

async fn run_feed<L: FeedListener>(mut ws: WebSocket, stop: oneshot::Receiver<()>, listener: L) {
    if read_frames(&mut ws, stop, &listener).await != FeedEnd::Stopped {
        return;
    }
    if let Err(e) = ws.close(Some(NORMAL_CLOSURE), Some("chart teardown")) {
        crate::log_warn!(LogComponent::Infrastructure("LiveFeed"), "close handshake failed: {e}");
    }
    get_logger().info(LogComponent::Infrastructure("LiveFeed"), "🔌 Feed closed");
}

/// Pump `frames` into `listener` until `stop` fires or the stream ends.
///
/// Text frames are handed over raw. Binary frames are skipped. A clean
/// server close only marks the listener disconnected; any other close or
/// connection error is reported first.
pub async fn read_frames<S, L>(
    frames: &mut S,
    mut stop: oneshot::Receiver<()>,
    listener: &L,
) -> FeedEnd
where
    S: Stream<Item = Result<Message, WebSocketError>> + Unpin,
    L: FeedListener + ?Sized,
{
    loop {
        // Dropping the sender also counts as a stop request.
        let frame = match select(frames.next(), &mut stop).await {
            Either::Left((frame, _)) => frame,
            Either::Right(_) => return FeedEnd::Stopped,
        };

        match frame {
            Some(Ok(Message::Text(text))) => listener.on_text(&text),
            Some(Ok(Message::Bytes(bytes))) => {
                crate::log_debug!(
                    LogComponent::Infrastructure("LiveFeed"),
                    "ignoring {} byte binary frame",
                    bytes.len()
                );
            }
            Some(Err(WebSocketError::ConnectionClose(event))) if event.was_clean => {
                crate::log_warn!(
                    LogComponent::Infrastructure("LiveFeed"),
                    "server closed the feed (code {}); not reconnecting",
                    event.code
                );
                listener.on_disconnected();
                return FeedEnd::Closed;
            }
            Some(Err(e)) => {
                listener.on_error(ChartError::Transport(e.to_string()));
                listener.on_disconnected();
                return FeedEnd::Failed;
            }
            None => {
                crate::log_warn!(
                    LogComponent::Infrastructure("LiveFeed"),
                    "feed stream ended; not reconnecting"
                );
                listener.on_disconnected();
                return FeedEnd::Closed;
            }
        }
    }
}

/// Close handle for a running feed
pub struct LiveFeedHandle {
    stop: Option<oneshot::Sender<()>>,
}

impl FeedConnection for LiveFeedHandle {
    fn close(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }
}
