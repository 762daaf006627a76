use std::rc::Rc;
use wasm_bindgen::prelude::*;

use crate::{
    application::{ChartHandle, LogErrors, start},
    config::ChartConfig,
    domain::errors::ChartError,
    infrastructure::rendering::CanvasChartSurface,
};

/// A running chart, owned by JavaScript
#[wasm_bindgen]
pub struct ChartWidget {
    handle: ChartHandle<CanvasChartSurface>,
}

#[wasm_bindgen]
impl ChartWidget {
    /// Close the feed and remove the canvas. Repeated calls do nothing.
    pub fn stop(&self) {
        self.handle.stop();
    }

    pub fn is_live(&self) -> bool {
        self.handle.session().is_live()
    }

    pub fn marker_count(&self) -> usize {
        self.handle.session().marker_count()
    }

    /// Label of the newest marker, if any
    pub fn latest_signal(&self) -> Option<String> {
        self.handle.session().latest_marker_text()
    }
}

/// Mount a chart into the element with id `container_id`.
///
/// `config_json` is an optional JSON object with any of the
/// [`ChartConfig`] fields.
#[wasm_bindgen]
pub fn start_chart(
    container_id: &str,
    config_json: Option<String>,
) -> Result<ChartWidget, JsValue> {
    let config = match config_json {
        Some(json) => ChartConfig::from_json(&json)?,
        None => ChartConfig::default(),
    };
    crate::install_logging(config.log_level);

    let container = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(container_id))
        .ok_or_else(|| ChartError::Surface(format!("no element with id {container_id:?}")))?;

    let surface = CanvasChartSurface::initialize(
        &container,
        config.width,
        config.height,
        config.theme.clone(),
    )?;
    let handle = start(&config, surface, Rc::new(LogErrors));

    Ok(ChartWidget { handle })
}
