use super::value_objects::{Price, Timestamp};
use crate::domain::errors::SeriesError;
use serde::{Deserialize, Serialize};

/// One OHLC bar. Serializes to the `{time, open, high, low, close}` shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub time: Timestamp,
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
}

impl PriceBar {
    pub fn new(time: Timestamp, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            time,
            open: Price::new(open),
            high: Price::new(high),
            low: Price::new(low),
            close: Price::new(close),
        }
    }

    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }

    pub fn body_top(&self) -> Price {
        Price::new(self.open.value().max(self.close.value()))
    }

    pub fn body_bottom(&self) -> Price {
        Price::new(self.open.value().min(self.close.value()))
    }
}

/// What an incremental update did to the series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesUpdate {
    Replaced,
    Appended,
}

/// Ordered bars of a single candlestick series
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarSeries {
    bars: Vec<PriceBar>,
}

impl BarSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all content. Ascending order is assumed, not checked.
    pub fn set_data(&mut self, bars: Vec<PriceBar>) {
        self.bars = bars;
    }

    /// Same time as the latest bar replaces it, a later time appends.
    pub fn update(&mut self, bar: PriceBar) -> Result<SeriesUpdate, SeriesError> {
        match self.bars.last_mut() {
            Some(last) if last.time == bar.time => {
                *last = bar;
                Ok(SeriesUpdate::Replaced)
            }
            Some(last) if bar.time < last.time => Err(SeriesError::OutOfOrder {
                latest: last.time.value(),
                incoming: bar.time.value(),
            }),
            _ => {
                self.bars.push(bar);
                Ok(SeriesUpdate::Appended)
            }
        }
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn latest(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Lowest low and highest high over `bars`
    pub fn price_range(bars: &[PriceBar]) -> Option<(f64, f64)> {
        let first = bars.first()?;
        Some(bars.iter().fold((first.low.value(), first.high.value()), |(lo, hi), bar| {
            (lo.min(bar.low.value()), hi.max(bar.high.value()))
        }))
    }
}
