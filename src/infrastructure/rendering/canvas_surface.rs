use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use crate::domain::{
    analysis::{Marker, MarkerShape},
    chart::{
        ChartLayout, ChartSurface, ChartTheme, PriceSeries, format_time_label,
        layout::MARKER_SIZE,
    },
    errors::{ChartError, SeriesError},
    logging::{LogComponent, get_logger},
    market_data::{BarSeries, PriceBar, SeriesUpdate},
};

const PRICE_TICKS: usize = 6;
/// Used when the container has no layout width yet
const FALLBACK_WIDTH: u32 = 800;

/// Canvas 2D surface: one `<canvas>` appended to a container element
pub struct CanvasChartSurface {
    canvas: HtmlCanvasElement,
    series: CanvasCandleSeries,
}

impl CanvasChartSurface {
    /// Create the canvas inside `container`. Width defaults to the container's
    /// client width at this moment; it is not tracked afterwards.
    pub fn initialize(
        container: &Element,
        width: Option<u32>,
        height: u32,
        theme: ChartTheme,
    ) -> Result<Self, ChartError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ChartError::Surface("document not available".to_string()))?;

        let canvas = document
            .create_element("canvas")
            .map_err(|e| surface_error("create canvas", e))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| ChartError::Surface("element is not a canvas".to_string()))?;

        let width = width.unwrap_or_else(|| match container.client_width() {
            w if w > 0 => w as u32,
            _ => FALLBACK_WIDTH,
        });
        canvas.set_width(width);
        canvas.set_height(height);
        canvas
            .set_attribute("style", "display: block;")
            .map_err(|e| surface_error("style canvas", e))?;

        let context = canvas
            .get_context("2d")
            .map_err(|e| surface_error("get 2D context", e))?
            .ok_or_else(|| ChartError::Surface("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ChartError::Surface("failed to cast to 2D context".to_string()))?;

        container.append_child(&canvas).map_err(|e| surface_error("attach canvas", e))?;

        get_logger().info(
            LogComponent::Infrastructure("CanvasSurface"),
            &format!("🎨 Surface ready: {}x{}", width, height),
        );

        let series = CanvasCandleSeries {
            painter: CanvasPainter { context, width, height, theme },
            bars: BarSeries::new(),
            markers: Vec::new(),
        };
        series.repaint();

        Ok(Self { canvas, series })
    }
}

impl ChartSurface for CanvasChartSurface {
    type Series = CanvasCandleSeries;

    fn series_mut(&mut self) -> &mut CanvasCandleSeries {
        &mut self.series
    }

    fn destroy(self) {
        self.canvas.remove();
        get_logger().info(LogComponent::Infrastructure("CanvasSurface"), "🧹 Surface released");
    }
}

fn surface_error(step: &str, e: JsValue) -> ChartError {
    ChartError::Surface(format!("{step}: {e:?}"))
}

/// Candlestick series painted onto the owning canvas after every change
pub struct CanvasCandleSeries {
    painter: CanvasPainter,
    bars: BarSeries,
    markers: Vec<Marker>,
}

impl CanvasCandleSeries {
    pub fn bars(&self) -> &[PriceBar] {
        self.bars.bars()
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    fn repaint(&self) {
        if let Err(e) = self.painter.paint(self.bars.bars(), &self.markers) {
            crate::log_error!(
                LogComponent::Infrastructure("CanvasSurface"),
                "❌ Paint failed: {e:?}"
            );
        }
    }
}

impl PriceSeries for CanvasCandleSeries {
    fn set_data(&mut self, bars: Vec<PriceBar>) {
        self.bars.set_data(bars);
        self.repaint();
    }

    fn update(&mut self, bar: PriceBar) -> Result<SeriesUpdate, SeriesError> {
        let outcome = self.bars.update(bar)?;
        self.repaint();
        Ok(outcome)
    }

    fn set_markers(&mut self, markers: &[Marker]) {
        self.markers = markers.to_vec();
        self.repaint();
    }
}

struct CanvasPainter {
    context: CanvasRenderingContext2d,
    width: u32,
    height: u32,
    theme: ChartTheme,
}

impl CanvasPainter {
    fn paint(&self, bars: &[PriceBar], markers: &[Marker]) -> Result<(), JsValue> {
        let ctx = &self.context;
        ctx.set_fill_style_str(&self.theme.background_color);
        ctx.fill_rect(0.0, 0.0, self.width as f64, self.height as f64);

        let Some(layout) = ChartLayout::new(self.width, self.height, bars) else {
            return Ok(());
        };

        ctx.set_font(&self.theme.font);
        self.paint_price_scale(&layout)?;
        self.paint_time_scale(&layout, bars)?;
        for index in layout.visible_range() {
            self.paint_candle(&layout, index, &bars[index]);
        }
        for marker in markers {
            self.paint_marker(&layout, bars, marker)?;
        }
        Ok(())
    }

    fn paint_price_scale(&self, layout: &ChartLayout) -> Result<(), JsValue> {
        let ctx = &self.context;
        ctx.set_line_width(1.0);
        ctx.set_text_align("left");
        for price in layout.price_ticks(PRICE_TICKS) {
            let y = layout.y_for_price(price).round() + 0.5;
            ctx.set_stroke_style_str(&self.theme.grid_color);
            ctx.begin_path();
            ctx.move_to(0.0, y);
            ctx.line_to(layout.plot_width, y);
            ctx.stroke();

            ctx.set_fill_style_str(&self.theme.text_color);
            ctx.fill_text(&format!("{:.2}", price), layout.plot_width + 6.0, y + 4.0)?;
        }
        Ok(())
    }

    fn paint_time_scale(&self, layout: &ChartLayout, bars: &[PriceBar]) -> Result<(), JsValue> {
        let ctx = &self.context;
        let plot_bottom = layout.height - crate::domain::chart::layout::TIME_SCALE_HEIGHT;
        ctx.set_text_align("center");
        for index in layout.visible_range().step_by(layout.label_stride()) {
            let Some(x) = layout.x_for_index(index) else { continue };
            let x = x.round() + 0.5;
            ctx.set_stroke_style_str(&self.theme.grid_color);
            ctx.begin_path();
            ctx.move_to(x, 0.0);
            ctx.line_to(x, plot_bottom);
            ctx.stroke();

            let label = format_time_label(bars[index].time, &self.theme.time_scale);
            ctx.set_fill_style_str(&self.theme.text_color);
            ctx.fill_text(&label, x, plot_bottom + 18.0)?;
        }
        Ok(())
    }

    fn paint_candle(&self, layout: &ChartLayout, index: usize, bar: &PriceBar) {
        let Some(x) = layout.x_for_index(index) else { return };
        let ctx = &self.context;
        let bullish = bar.is_bullish();

        ctx.set_stroke_style_str(self.theme.wick_color(bullish));
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(x, layout.y_for_price(bar.high.value()));
        ctx.line_to(x, layout.y_for_price(bar.low.value()));
        ctx.stroke();

        let top = layout.y_for_price(bar.body_top().value());
        let body_height = (layout.y_for_price(bar.body_bottom().value()) - top).max(1.0);
        let body_width = layout.body_width();
        let left = x - body_width / 2.0;

        ctx.set_fill_style_str(self.theme.body_color(bullish));
        ctx.fill_rect(left, top, body_width, body_height);
        ctx.set_stroke_style_str(self.theme.border_color(bullish));
        ctx.stroke_rect(left, top, body_width, body_height);
    }

    fn paint_marker(
        &self,
        layout: &ChartLayout,
        bars: &[PriceBar],
        marker: &Marker,
    ) -> Result<(), JsValue> {
        let Some(index) = layout.anchor_index(bars, marker.time) else {
            return Ok(());
        };
        let Some(x) = layout.x_for_index(index) else {
            return Ok(());
        };
        let (center, label_y) = layout.marker_offsets(&bars[index], marker.position);
        let ctx = &self.context;

        ctx.set_fill_style_str(&marker.color);
        ctx.begin_path();
        match marker.shape {
            MarkerShape::ArrowUp => {
                ctx.move_to(x, center - MARKER_SIZE);
                ctx.line_to(x + MARKER_SIZE, center + MARKER_SIZE);
                ctx.line_to(x - MARKER_SIZE, center + MARKER_SIZE);
                ctx.close_path();
            }
            MarkerShape::ArrowDown => {
                ctx.move_to(x, center + MARKER_SIZE);
                ctx.line_to(x + MARKER_SIZE, center - MARKER_SIZE);
                ctx.line_to(x - MARKER_SIZE, center - MARKER_SIZE);
                ctx.close_path();
            }
            MarkerShape::Circle => {
                ctx.arc(x, center, MARKER_SIZE * 0.8, 0.0, std::f64::consts::TAU)?;
            }
        }
        ctx.fill();

        ctx.set_text_align("center");
        ctx.fill_text(&marker.text, x, label_y)
    }
}
