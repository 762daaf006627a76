//! Analysis signals and the chart markers derived from them.

pub mod marker;
pub mod signal;

pub use marker::*;
pub use signal::*;
