use crate::domain::{
    errors::ChartError,
    logging::{LogComponent, get_logger},
};

/// Where typed chart failures go. Callers may drop them.
pub trait ErrorSink {
    fn report(&self, error: ChartError);
}

impl<F: Fn(ChartError)> ErrorSink for F {
    fn report(&self, error: ChartError) {
        self(error)
    }
}

/// Drops every error: the chart just stops updating
pub struct IgnoreErrors;

impl ErrorSink for IgnoreErrors {
    fn report(&self, _error: ChartError) {}
}

/// Sends errors to the global logger
pub struct LogErrors;

impl ErrorSink for LogErrors {
    fn report(&self, error: ChartError) {
        let component = LogComponent::Application("ErrorSink");
        match &error {
            ChartError::Malformed(_) | ChartError::Series(_) => {
                get_logger().warn(component, &format!("⚠️ {error}"))
            }
            _ => get_logger().error(component, &format!("❌ {error}")),
        }
    }
}
