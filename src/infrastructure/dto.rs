//! Wire shapes shared by the history endpoint and the live feed.

use crate::domain::{
    analysis::{Signal, SignalDirection},
    errors::{HistoryLoadError, MalformedMessageError, TimestampError},
    feed::FeedMessage,
    market_data::{PriceBar, WireTime},
};
use serde::Deserialize;

pub const KLINE: &str = "kline";
pub const LLM_ANALYSIS: &str = "llm_analysis";

/// `{time, open, high, low, close}`; extra fields such as `volume` are ignored
#[derive(Debug, Clone, Deserialize)]
pub struct BarDto {
    pub time: WireTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl BarDto {
    pub fn to_domain(&self) -> Result<PriceBar, TimestampError> {
        let time = self.time.to_timestamp()?;
        Ok(PriceBar::new(time, self.open, self.high, self.low, self.close))
    }
}

/// `llm_analysis` payload
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisDto {
    pub timestamp: WireTime,
    pub signal: SignalDirection,
    pub target_price: f64,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AnalysisDto {
    pub fn to_domain(&self) -> Result<Signal, TimestampError> {
        let time = self.timestamp.to_timestamp()?;
        Ok(Signal::new(time, self.signal, self.target_price)
            .with_commentary(self.confidence, self.message.clone()))
    }
}

#[derive(Debug, Deserialize)]
struct EnvelopeDto {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: serde_json::Value,
}

/// Decode one `{type, data}` feed frame
pub fn decode_feed_message(text: &str) -> Result<FeedMessage, MalformedMessageError> {
    let envelope: EnvelopeDto = serde_json::from_str(text)
        .map_err(|e| MalformedMessageError::Envelope(e.to_string()))?;

    match envelope.kind.as_str() {
        KLINE => {
            let dto: BarDto = decode_payload(KLINE, envelope.data)?;
            let bar = dto.to_domain().map_err(|source| MalformedMessageError::Timestamp {
                kind: KLINE.to_string(),
                source,
            })?;
            Ok(FeedMessage::Bar(bar))
        }
        LLM_ANALYSIS => {
            let dto: AnalysisDto = decode_payload(LLM_ANALYSIS, envelope.data)?;
            let signal = dto.to_domain().map_err(|source| MalformedMessageError::Timestamp {
                kind: LLM_ANALYSIS.to_string(),
                source,
            })?;
            Ok(FeedMessage::Analysis(signal))
        }
        _ => Ok(FeedMessage::Unrecognized(envelope.kind)),
    }
}

fn decode_payload<T: serde::de::DeserializeOwned>(
    kind: &str,
    data: serde_json::Value,
) -> Result<T, MalformedMessageError> {
    serde_json::from_value(data).map_err(|e| MalformedMessageError::Payload {
        kind: kind.to_string(),
        reason: e.to_string(),
    })
}

/// Decode the history endpoint body, keeping the received order
pub fn decode_history(text: &str) -> Result<Vec<PriceBar>, HistoryLoadError> {
    let rows: Vec<BarDto> =
        serde_json::from_str(text).map_err(|e| HistoryLoadError::Decode(e.to_string()))?;

    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            row.to_domain().map_err(|source| HistoryLoadError::Timestamp { index, source })
        })
        .collect()
}
