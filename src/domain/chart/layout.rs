use crate::domain::analysis::MarkerPosition;
use crate::domain::market_data::{BarSeries, PriceBar, Timestamp};
use std::ops::Range;

/// Horizontal room per bar, in CSS pixels
pub const BAR_SPACING: f64 = 6.0;
pub const PRICE_SCALE_WIDTH: f64 = 70.0;
pub const TIME_SCALE_HEIGHT: f64 = 28.0;
pub const PADDING: f64 = 16.0;
/// Minimum gap between two time labels
const LABEL_MIN_GAP: f64 = 80.0;
/// Headroom above/below the price range so markers stay on the surface
const PRICE_MARGIN: f64 = 0.08;
/// Gap between a bar's wick tip and the marker glyph center
pub const MARKER_OFFSET: f64 = 10.0;
pub const MARKER_SIZE: f64 = 5.0;

/// Geometry for one paint of the surface: which bars are visible and how
/// prices and bar indices map to pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub plot_width: f64,
    pub plot_height: f64,
    pub min_price: f64,
    pub max_price: f64,
    first_index: usize,
    visible: usize,
}

impl ChartLayout {
    /// Layout for the most recent bars that fit. `None` when there is nothing
    /// to draw or the surface is too small.
    pub fn new(width: u32, height: u32, bars: &[PriceBar]) -> Option<Self> {
        let width = width as f64;
        let height = height as f64;
        let plot_width = width - PRICE_SCALE_WIDTH;
        let plot_height = height - TIME_SCALE_HEIGHT - PADDING * 2.0;
        if bars.is_empty() || plot_width < BAR_SPACING || plot_height <= 0.0 {
            return None;
        }

        let capacity = (plot_width / BAR_SPACING).floor() as usize;
        let visible = bars.len().min(capacity);
        let first_index = bars.len() - visible;

        let (low, high) = BarSeries::price_range(&bars[first_index..])?;
        let span = high - low;
        let (min_price, max_price) = if span.abs() < f64::EPSILON {
            let pad = if low.abs() < f64::EPSILON { 1.0 } else { low.abs() * 0.01 };
            (low - pad, high + pad)
        } else {
            (low - span * PRICE_MARGIN, high + span * PRICE_MARGIN)
        };

        Some(Self {
            width,
            height,
            plot_width,
            plot_height,
            min_price,
            max_price,
            first_index,
            visible,
        })
    }

    /// Absolute indices of the bars on screen
    pub fn visible_range(&self) -> Range<usize> {
        self.first_index..self.first_index + self.visible
    }

    /// Center x of the bar at absolute `index`, if it is on screen
    pub fn x_for_index(&self, index: usize) -> Option<f64> {
        if !self.visible_range().contains(&index) {
            return None;
        }
        Some((index - self.first_index) as f64 * BAR_SPACING + BAR_SPACING / 2.0)
    }

    pub fn y_for_price(&self, price: f64) -> f64 {
        PADDING + (self.max_price - price) / (self.max_price - self.min_price) * self.plot_height
    }

    pub fn body_width(&self) -> f64 {
        (BAR_SPACING * 0.7).max(1.0)
    }

    /// `count` evenly spaced prices from bottom to top of the plot
    pub fn price_ticks(&self, count: usize) -> Vec<f64> {
        if count < 2 {
            return vec![(self.min_price + self.max_price) / 2.0];
        }
        let step = (self.max_price - self.min_price) / (count - 1) as f64;
        (0..count).map(|i| self.min_price + step * i as f64).collect()
    }

    /// Every n-th visible bar gets a time label
    pub fn label_stride(&self) -> usize {
        (LABEL_MIN_GAP / BAR_SPACING).ceil() as usize
    }

    /// Bar a marker at `time` attaches to: the exact bar, else the last bar
    /// before it. Markers older than the visible window have no anchor.
    pub fn anchor_index(&self, bars: &[PriceBar], time: Timestamp) -> Option<usize> {
        let after = bars.partition_point(|bar| bar.time <= time);
        let index = after.checked_sub(1)?;
        self.visible_range().contains(&index).then_some(index)
    }

    /// `(glyph_center_y, label_baseline_y)` for a marker on `bar`
    pub fn marker_offsets(&self, bar: &PriceBar, position: MarkerPosition) -> (f64, f64) {
        match position {
            MarkerPosition::AboveBar => {
                let center = self.y_for_price(bar.high.value()) - MARKER_OFFSET;
                (center, center - MARKER_SIZE - 4.0)
            }
            MarkerPosition::BelowBar => {
                let center = self.y_for_price(bar.low.value()) + MARKER_OFFSET;
                (center, center + MARKER_SIZE + 12.0)
            }
        }
    }
}
