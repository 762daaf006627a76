use crate::domain::analysis::Marker;
use crate::domain::errors::SeriesError;
use crate::domain::market_data::{PriceBar, SeriesUpdate};

/// A candlestick series drawn on a surface
pub trait PriceSeries {
    /// Replace all bars
    fn set_data(&mut self, bars: Vec<PriceBar>);

    /// Replace the latest bar when times match, else append
    fn update(&mut self, bar: PriceBar) -> Result<SeriesUpdate, SeriesError>;

    /// Replace the full marker set
    fn set_markers(&mut self, markers: &[Marker]);
}

/// Drawing surface owning exactly one price series.
///
/// `destroy` consumes the surface, so a surface is released at most once.
pub trait ChartSurface {
    type Series: PriceSeries;

    fn series_mut(&mut self) -> &mut Self::Series;

    fn destroy(self);
}
