pub mod analysis;
pub mod chart;
pub mod errors;
pub mod feed;
pub mod logging;
pub mod market_data;
