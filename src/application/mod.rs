//! Chart lifecycle: session state, start/stop wiring, error delivery.

pub mod controller;
pub mod error_sink;
pub mod session;

pub use controller::{ChartHandle, start, stop};
pub use error_sink::{ErrorSink, IgnoreErrors, LogErrors};
pub use session::ChartSession;
