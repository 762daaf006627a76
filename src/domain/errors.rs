use derive_more::Display;

/// Wire time could not be turned into epoch seconds
#[derive(Debug, Clone, PartialEq, Display)]
pub enum TimestampError {
    #[display(fmt = "unrecognised time format: {:?}", _0)]
    Unparseable(String),
    #[display(fmt = "time out of range: {}", _0)]
    OutOfRange(f64),
}

impl std::error::Error for TimestampError {}

/// One-shot history fetch failed
#[derive(Debug, Clone, PartialEq, Display)]
pub enum HistoryLoadError {
    #[display(fmt = "history request failed: {}", _0)]
    Network(String),
    #[display(fmt = "history request returned HTTP {}", _0)]
    Status(u16),
    #[display(fmt = "history body is not a bar array: {}", _0)]
    Decode(String),
    #[display(fmt = "history bar #{} has a bad time: {}", index, source)]
    Timestamp { index: usize, source: TimestampError },
}

impl std::error::Error for HistoryLoadError {}

/// Inbound feed frame could not be decoded
#[derive(Debug, Clone, PartialEq, Display)]
pub enum MalformedMessageError {
    #[display(fmt = "feed frame is not a JSON envelope: {}", _0)]
    Envelope(String),
    #[display(fmt = "bad `{}` payload: {}", kind, reason)]
    Payload { kind: String, reason: String },
    #[display(fmt = "bad `{}` time: {}", kind, source)]
    Timestamp { kind: String, source: TimestampError },
}

impl std::error::Error for MalformedMessageError {}

/// Series rejected an incremental update
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SeriesError {
    #[display(fmt = "bar at {} is older than latest bar at {}", incoming, latest)]
    OutOfOrder { latest: i64, incoming: i64 },
}

impl std::error::Error for SeriesError {}

/// Everything the chart can hand to an error sink
#[derive(Debug, Clone, PartialEq, Display)]
pub enum ChartError {
    #[display(fmt = "{}", _0)]
    History(HistoryLoadError),
    #[display(fmt = "{}", _0)]
    Malformed(MalformedMessageError),
    #[display(fmt = "{}", _0)]
    Series(SeriesError),
    #[display(fmt = "feed transport: {}", _0)]
    Transport(String),
    #[display(fmt = "surface: {}", _0)]
    Surface(String),
    #[display(fmt = "config: {}", _0)]
    Config(String),
}

impl std::error::Error for ChartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChartError::History(e) => Some(e),
            ChartError::Malformed(e) => Some(e),
            ChartError::Series(e) => Some(e),
            _ => None,
        }
    }
}

impl From<HistoryLoadError> for ChartError {
    fn from(e: HistoryLoadError) -> Self {
        ChartError::History(e)
    }
}

impl From<MalformedMessageError> for ChartError {
    fn from(e: MalformedMessageError) -> Self {
        ChartError::Malformed(e)
    }
}

impl From<SeriesError> for ChartError {
    fn from(e: SeriesError) -> Self {
        ChartError::Series(e)
    }
}

impl From<ChartError> for wasm_bindgen::JsValue {
    fn from(e: ChartError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

pub type ChartResult<T> = Result<T, ChartError>;
