use serde::{Deserialize, Serialize};

/// Time axis behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeScaleOptions {
    pub time_visible: bool,
    pub seconds_visible: bool,
}

impl Default for TimeScaleOptions {
    fn default() -> Self {
        Self { time_visible: true, seconds_visible: false }
    }
}

/// Colors for the surface and the candlestick series.
/// Any CSS color string the canvas accepts is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    pub background_color: String,
    pub text_color: String,
    pub grid_color: String,
    pub up_color: String,
    pub down_color: String,
    pub border_up_color: String,
    pub border_down_color: String,
    pub wick_up_color: String,
    pub wick_down_color: String,
    pub neutral_color: String,
    pub font: String,
    pub time_scale: TimeScaleOptions,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background_color: "#0e1726".to_string(),
            text_color: "#d1d4dc".to_string(),
            grid_color: "rgba(42, 46, 57, 0.5)".to_string(),
            up_color: "#26a69a".to_string(),
            down_color: "#ef5350".to_string(),
            border_up_color: "#26a69a".to_string(),
            border_down_color: "#ef5350".to_string(),
            wick_up_color: "#26a69a".to_string(),
            wick_down_color: "#ef5350".to_string(),
            neutral_color: "#d1d4dc".to_string(),
            font: "11px sans-serif".to_string(),
            time_scale: TimeScaleOptions::default(),
        }
    }
}

impl ChartTheme {
    pub fn body_color(&self, bullish: bool) -> &str {
        if bullish { &self.up_color } else { &self.down_color }
    }

    pub fn border_color(&self, bullish: bool) -> &str {
        if bullish { &self.border_up_color } else { &self.border_down_color }
    }

    pub fn wick_color(&self, bullish: bool) -> &str {
        if bullish { &self.wick_up_color } else { &self.wick_down_color }
    }
}
