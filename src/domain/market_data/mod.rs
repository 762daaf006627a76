//! Price bars, the candlestick series they live in, and wire time conversion.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
