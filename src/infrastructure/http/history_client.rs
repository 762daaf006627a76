use crate::domain::{
    errors::HistoryLoadError,
    logging::LogComponent,
    market_data::PriceBar,
};
use crate::infrastructure::dto::decode_history;
use gloo_net::http::Request;

/// One-shot loader for the `/api/history` bar array
#[derive(Debug, Clone)]
pub struct HistoryClient {
    url: String,
}

impl HistoryClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Fetch every bar the endpoint has, in the order it sends them
    pub async fn fetch(&self) -> Result<Vec<PriceBar>, HistoryLoadError> {
        crate::log_info!(
            LogComponent::Infrastructure("History"),
            "📈 Fetching history from {}",
            self.url
        );

        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| HistoryLoadError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(HistoryLoadError::Status(response.status()));
        }

        let body = response.text().await.map_err(|e| HistoryLoadError::Network(e.to_string()))?;
        let bars = decode_history(&body)?;

        crate::log_info!(
            LogComponent::Infrastructure("History"),
            "✅ Loaded {} historical bars",
            bars.len()
        );

        Ok(bars)
    }
}
