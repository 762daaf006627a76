//! Chart surface contract, theme, and pure paint geometry.

pub mod layout;
pub mod surface;
pub mod theme;
pub mod time_axis;

pub use layout::ChartLayout;
pub use surface::{ChartSurface, PriceSeries};
pub use theme::{ChartTheme, TimeScaleOptions};
pub use time_axis::format_time_label;
