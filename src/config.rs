//! Runtime configuration for a chart instance.

use serde::{Deserialize, Serialize};

use crate::domain::{
    chart::ChartTheme,
    errors::{ChartError, ChartResult},
    logging::LogLevel,
};

pub const DEFAULT_HISTORY_URL: &str = "http://localhost:8000/api/history";
pub const DEFAULT_FEED_URL: &str = "ws://localhost:8000/ws";
pub const DEFAULT_HEIGHT: u32 = 600;

/// Endpoints, surface size, theme and log level. Every field is optional
/// in JSON; missing fields take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub history_url: String,
    pub feed_url: String,
    /// `None` uses the container's width at start
    pub width: Option<u32>,
    pub height: u32,
    pub theme: ChartTheme,
    pub log_level: LogLevel,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            history_url: DEFAULT_HISTORY_URL.to_string(),
            feed_url: DEFAULT_FEED_URL.to_string(),
            width: None,
            height: DEFAULT_HEIGHT,
            theme: ChartTheme::default(),
            log_level: LogLevel::Info,
        }
    }
}

impl ChartConfig {
    pub fn from_json(json: &str) -> ChartResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ChartError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.height == 0 || self.width == Some(0) {
            return Err(ChartError::Config("surface size must be non-zero".to_string()));
        }
        if !(self.history_url.starts_with("http://") || self.history_url.starts_with("https://")) {
            return Err(ChartError::Config(format!(
                "history_url is not http(s): {}",
                self.history_url
            )));
        }
        if !(self.feed_url.starts_with("ws://") || self.feed_url.starts_with("wss://")) {
            return Err(ChartError::Config(format!("feed_url is not ws(s): {}", self.feed_url)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = ChartConfig::default();
        assert_eq!(config.history_url, "http://localhost:8000/api/history");
        assert_eq!(config.feed_url, "ws://localhost:8000/ws");
        assert_eq!(config.height, 600);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn json_overrides_single_fields() {
        let config =
            ChartConfig::from_json(r#"{"feed_url":"wss://example.test/ws","log_level":"debug"}"#)
                .unwrap();
        assert_eq!(config.feed_url, "wss://example.test/ws");
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.history_url, DEFAULT_HISTORY_URL);
    }

    #[test]
    fn rejects_bad_json_and_bad_urls() {
        assert!(matches!(ChartConfig::from_json("{"), Err(ChartError::Config(_))));
        assert!(matches!(
            ChartConfig::from_json(r#"{"feed_url":"http://localhost:8000/ws"}"#),
            Err(ChartError::Config(_))
        ));
        assert!(matches!(ChartConfig::from_json(r#"{"height":0}"#), Err(ChartError::Config(_))));
    }
}
