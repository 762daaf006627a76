#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use llm_kline_chart::application::{ChartSession, ErrorSink};
use llm_kline_chart::domain::{
    analysis::Marker,
    chart::{ChartSurface, ChartTheme, PriceSeries},
    errors::{ChartError, SeriesError},
    feed::FeedConnection,
    market_data::{BarSeries, PriceBar, SeriesUpdate, Timestamp},
};

/// 2025-06-30 10:00:00 UTC
pub const T0: i64 = 1_751_277_600;

#[derive(Debug, Default)]
pub struct SurfaceLog {
    pub bars: BarSeries,
    pub set_data_calls: usize,
    pub marker_applications: Vec<Vec<Marker>>,
    pub destroyed: usize,
}

pub struct RecordingSeries {
    log: Rc<RefCell<SurfaceLog>>,
}

impl PriceSeries for RecordingSeries {
    fn set_data(&mut self, bars: Vec<PriceBar>) {
        let mut log = self.log.borrow_mut();
        log.set_data_calls += 1;
        log.bars.set_data(bars);
    }

    fn update(&mut self, bar: PriceBar) -> Result<SeriesUpdate, SeriesError> {
        self.log.borrow_mut().bars.update(bar)
    }

    fn set_markers(&mut self, markers: &[Marker]) {
        self.log.borrow_mut().marker_applications.push(markers.to_vec());
    }
}

pub struct RecordingSurface {
    series: RecordingSeries,
}

impl RecordingSurface {
    pub fn new() -> (Self, Rc<RefCell<SurfaceLog>>) {
        let log = Rc::new(RefCell::new(SurfaceLog::default()));
        (Self { series: RecordingSeries { log: Rc::clone(&log) } }, log)
    }
}

impl ChartSurface for RecordingSurface {
    type Series = RecordingSeries;

    fn series_mut(&mut self) -> &mut RecordingSeries {
        &mut self.series
    }

    fn destroy(self) {
        self.series.log.borrow_mut().destroyed += 1;
    }
}

/// Counts every `close` call, including repeats
pub struct CountingFeed {
    pub closes: Rc<Cell<usize>>,
}

impl CountingFeed {
    pub fn new() -> (Box<dyn FeedConnection>, Rc<Cell<usize>>) {
        let closes = Rc::new(Cell::new(0));
        (Box::new(Self { closes: Rc::clone(&closes) }), closes)
    }
}

impl FeedConnection for CountingFeed {
    fn close(&mut self) {
        self.closes.set(self.closes.get() + 1);
    }
}

pub type Reported = Rc<RefCell<Vec<ChartError>>>;

pub fn recording_sink() -> (Rc<dyn ErrorSink>, Reported) {
    let reported: Reported = Rc::new(RefCell::new(Vec::new()));
    let sink = {
        let reported = Rc::clone(&reported);
        Rc::new(move |error: ChartError| reported.borrow_mut().push(error)) as Rc<dyn ErrorSink>
    };
    (sink, reported)
}

pub struct Harness {
    pub session: ChartSession<RecordingSurface>,
    pub surface: Rc<RefCell<SurfaceLog>>,
    pub reported: Reported,
    pub closes: Rc<Cell<usize>>,
}

/// Session with a recording surface, a recording sink and an attached feed
pub fn harness() -> Harness {
    let (surface, log) = RecordingSurface::new();
    let (sink, reported) = recording_sink();
    let session = ChartSession::new(surface, ChartTheme::default(), sink);
    let (feed, closes) = CountingFeed::new();
    session.attach_feed(feed);
    Harness { session, surface: log, reported, closes }
}

pub fn bar_at(secs: i64, close: f64) -> PriceBar {
    PriceBar::new(Timestamp::from_secs(secs), close - 0.5, close + 1.0, close - 1.0, close)
}

/// `n` one-minute bars starting at [`T0`]
pub fn minute_bars(n: usize) -> Vec<PriceBar> {
    (0..n).map(|i| bar_at(T0 + i as i64 * 60, 100.0 + i as f64)).collect()
}

pub fn kline_frame(time: &str, open: f64, high: f64, low: f64, close: f64) -> String {
    serde_json::json!({
        "type": "kline",
        "data": {
            "time": time,
            "open": open,
            "high": high,
            "low": low,
            "close": close,
            "volume": 1500.0
        }
    })
    .to_string()
}

pub fn analysis_frame(timestamp: &str, signal: &str, target_price: f64) -> String {
    serde_json::json!({
        "type": "llm_analysis",
        "data": {
            "signal": signal,
            "target_price": target_price,
            "confidence": 0.72,
            "message": "Market seems to be consolidating.",
            "timestamp": timestamp
        }
    })
    .to_string()
}
