#![cfg(target_arch = "wasm32")]

use llm_kline_chart::domain::{
    analysis::{Marker, Signal, SignalDirection},
    chart::{ChartSurface, ChartTheme, PriceSeries},
    market_data::{PriceBar, SeriesUpdate, Timestamp},
};
use llm_kline_chart::infrastructure::rendering::CanvasChartSurface;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

fn bar(i: i64) -> PriceBar {
    PriceBar::new(Timestamp::from_secs(1_751_277_600 + i * 60), 100.0, 102.0, 99.0, 101.0)
}

#[wasm_bindgen_test]
fn canvas_is_attached_with_requested_size_and_removed_on_destroy() {
    let host = container();
    let surface =
        CanvasChartSurface::initialize(&host, Some(640), 600, ChartTheme::default()).unwrap();

    let canvas = host
        .first_element_child()
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    assert_eq!(canvas.width(), 640);
    assert_eq!(canvas.height(), 600);

    surface.destroy();
    assert_eq!(host.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn series_paints_bars_and_markers() {
    let host = container();
    let mut surface =
        CanvasChartSurface::initialize(&host, Some(400), 300, ChartTheme::default()).unwrap();
    let series = surface.series_mut();

    series.set_data((0..20).map(bar).collect());
    assert_eq!(series.update(bar(19)), Ok(SeriesUpdate::Replaced));
    assert_eq!(series.update(bar(20)), Ok(SeriesUpdate::Appended));

    let signal =
        Signal::new(Timestamp::from_secs(1_751_277_600 + 600), SignalDirection::Bearish, 99.5);
    series.set_markers(&[Marker::from_signal(&signal, &ChartTheme::default())]);

    assert_eq!(series.bars().len(), 21);
    assert_eq!(series.markers().len(), 1);
    surface.destroy();
}
