//! JavaScript-facing entry points.

pub mod wasm_api;

pub use wasm_api::{ChartWidget, start_chart};
