use super::signal::{Signal, SignalDirection};
use crate::domain::chart::ChartTheme;
use crate::domain::market_data::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerPosition {
    AboveBar,
    BelowBar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerShape {
    ArrowUp,
    ArrowDown,
    Circle,
}

/// Annotation pinned to a bar time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub time: Timestamp,
    pub position: MarkerPosition,
    pub color: String,
    pub shape: MarkerShape,
    pub text: String,
}

impl Marker {
    /// Bullish sits above the bar as an up arrow, bearish below as a down
    /// arrow. Neutral is a circle above the bar in the neutral color.
    pub fn from_signal(signal: &Signal, theme: &ChartTheme) -> Self {
        let (position, color, shape) = match signal.direction {
            SignalDirection::Bullish => {
                (MarkerPosition::AboveBar, &theme.up_color, MarkerShape::ArrowUp)
            }
            SignalDirection::Bearish => {
                (MarkerPosition::BelowBar, &theme.down_color, MarkerShape::ArrowDown)
            }
            SignalDirection::Neutral => {
                (MarkerPosition::AboveBar, &theme.neutral_color, MarkerShape::Circle)
            }
        };

        Self {
            time: signal.time,
            position,
            color: color.clone(),
            shape,
            text: format!("{} @ {:.2}", signal.direction.label(), signal.target_price.value()),
        }
    }
}

/// Append-only marker list owned by one chart session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerLog {
    markers: Vec<Marker>,
}

impl MarkerLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append and return the full list to re-apply
    pub fn push(&mut self, marker: Marker) -> &[Marker] {
        self.markers.push(marker);
        &self.markers
    }

    pub fn as_slice(&self) -> &[Marker] {
        &self.markers
    }

    pub fn latest(&self) -> Option<&Marker> {
        self.markers.last()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
