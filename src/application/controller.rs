use std::rc::Rc;

use super::{error_sink::ErrorSink, session::ChartSession};
use crate::config::ChartConfig;
use crate::domain::{
    chart::ChartSurface,
    logging::{LogComponent, get_logger},
};
use crate::infrastructure::{http::HistoryClient, websocket::LiveFeedClient};

/// A started chart. Drop does not stop it; call [`stop`].
pub struct ChartHandle<S: ChartSurface + 'static> {
    session: ChartSession<S>,
}

impl<S: ChartSurface + 'static> ChartHandle<S> {
    pub fn session(&self) -> &ChartSession<S> {
        &self.session
    }

    pub fn stop(&self) {
        self.session.stop();
    }
}

/// Wire `surface` to the history endpoint and the live feed.
///
/// The history load runs in the background; its result is applied only if
/// the chart is still running. A feed that fails to open is reported to
/// `errors` and the chart keeps whatever history it gets.
pub fn start<S>(config: &ChartConfig, surface: S, errors: Rc<dyn ErrorSink>) -> ChartHandle<S>
where
    S: ChartSurface + 'static,
{
    get_logger().info(LogComponent::Application("Controller"), "🚀 Starting chart");

    let session = ChartSession::new(surface, config.theme.clone(), errors);

    let history = HistoryClient::new(config.history_url.clone());
    let loader = session.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let result = history.fetch().await;
        loader.apply_history(result);
    });

    match LiveFeedClient::new(config.feed_url.clone()).open(session.clone()) {
        Ok(feed) => session.attach_feed(Box::new(feed)),
        Err(e) => session.report(e),
    }

    ChartHandle { session }
}

/// Close the feed and release the surface. Safe to call more than once.
pub fn stop<S: ChartSurface + 'static>(handle: &ChartHandle<S>) {
    handle.stop();
}
