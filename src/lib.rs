use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, LogLevel, get_logger};

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

/// Module start hook: panic messages and the browser clock
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();
    domain::logging::init_time_provider(Box::new(
        infrastructure::services::BrowserTimeProvider::new(),
    ));
}

/// Mount the full page into `<body>`
#[wasm_bindgen]
pub fn mount_app() {
    leptos::mount_to_body(app::App);
}

/// Install the console logger. The first level wins.
pub fn install_logging(level: LogLevel) {
    domain::logging::init_logger(Box::new(infrastructure::services::ConsoleLogger::new(level)));
    get_logger().debug(LogComponent::Presentation("Initialize"), "🚀 Console logging ready");
}
