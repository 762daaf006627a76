use crate::domain::market_data::{Price, Timestamp};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Direction of an analysis call
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr, Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SignalDirection {
    Bullish,
    Bearish,
    Neutral,
}

impl SignalDirection {
    /// Upper-cased word used in marker labels
    pub fn label(&self) -> String {
        self.as_ref().to_uppercase()
    }
}

/// A directional assessment from the analysis feed
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub time: Timestamp,
    pub direction: SignalDirection,
    pub target_price: Price,
    pub confidence: Option<f64>,
    pub message: Option<String>,
}

impl Signal {
    pub fn new(time: Timestamp, direction: SignalDirection, target_price: f64) -> Self {
        Self {
            time,
            direction,
            target_price: Price::new(target_price),
            confidence: None,
            message: None,
        }
    }

    pub fn with_commentary(mut self, confidence: Option<f64>, message: Option<String>) -> Self {
        self.confidence = confidence;
        self.message = message;
        self
    }
}
