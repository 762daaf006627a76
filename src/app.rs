use leptos::html::Div;
use leptos::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::{
    application::{ChartHandle, LogErrors, start},
    config::ChartConfig,
    domain::logging::{LogComponent, get_logger},
    infrastructure::rendering::CanvasChartSurface,
};

pub const WAITING_FOR_ANALYSIS: &str = "Waiting for analysis...";

/// Page: title, the chart, and the latest signal panel
#[component]
pub fn App() -> impl IntoView {
    view! {
        <style>
            {r#"
            .llm-chart-app {
                display: flex;
                flex-direction: column;
                align-items: center;
                background-color: #0e1726;
                color: white;
                min-height: 100vh;
                font-family: -apple-system, BlinkMacSystemFont, sans-serif;
            }

            .chart-container {
                width: 90%;
                position: relative;
            }

            .signal-panel {
                margin-top: 20px;
                padding: 10px;
                background-color: #1c273a;
                border-radius: 5px;
                width: 90%;
            }
            "#}
        </style>
        <div class="llm-chart-app">
            <h1>"LLM K-Line Analysis"</h1>
            <SignalChart />
        </div>
    }
}

/// Candlestick chart with analysis markers.
///
/// Starts one frame after its container is mounted and stops on unmount.
#[component]
pub fn SignalChart(#[prop(optional)] config: Option<ChartConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let container_ref = create_node_ref::<Div>();
    let latest_signal = create_rw_signal::<Option<String>>(None);
    let handle: Rc<RefCell<Option<ChartHandle<CanvasChartSurface>>>> = Rc::new(RefCell::new(None));

    let unmounted = Rc::new(Cell::new(false));

    // `on_load` fires before the element is attached, when its width is
    // still 0. Measure on the next frame instead.
    {
        let handle = Rc::clone(&handle);
        let unmounted = Rc::clone(&unmounted);
        create_effect(move |_| {
            let Some(container) = container_ref.get() else { return };
            if handle.borrow().is_some() {
                return;
            }
            let handle = Rc::clone(&handle);
            let unmounted = Rc::clone(&unmounted);
            let config = config.clone();
            request_animation_frame(move || {
                if unmounted.get() || handle.borrow().is_some() {
                    return;
                }
                crate::install_logging(config.log_level);
                let element: &web_sys::Element = &container;
                match CanvasChartSurface::initialize(
                    element,
                    config.width,
                    config.height,
                    config.theme.clone(),
                ) {
                    Ok(surface) => {
                        let chart = start(&config, surface, Rc::new(LogErrors));
                        chart.session().on_markers_changed(move |markers| {
                            latest_signal.set(markers.last().map(|marker| marker.text.clone()));
                        });
                        *handle.borrow_mut() = Some(chart);
                    }
                    Err(e) => get_logger().error(
                        LogComponent::Presentation("SignalChart"),
                        &format!("❌ Chart surface failed: {e}"),
                    ),
                }
            });
        });
    }

    on_cleanup(move || {
        unmounted.set(true);
        if let Some(chart) = handle.borrow_mut().take() {
            chart.stop();
        }
    });

    view! {
        <div class="chart-container" node_ref=container_ref></div>
        <div class="signal-panel">
            <h2>"Latest LLM Signal:"</h2>
            <p>{move || latest_signal.get().unwrap_or_else(|| WAITING_FOR_ANALYSIS.to_string())}</p>
        </div>
    }
}
