use std::sync::Mutex;

use llm_kline_chart::application::{ErrorSink, IgnoreErrors, LogErrors};
use llm_kline_chart::domain::errors::{ChartError, HistoryLoadError, MalformedMessageError};
use llm_kline_chart::domain::logging::{LogEntry, LogLevel, Logger, init_logger};

static LINES: Mutex<Vec<(LogLevel, String)>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl Logger for CaptureLogger {
    fn log(&self, entry: LogEntry) {
        LINES.lock().unwrap().push((entry.level, entry.message));
    }
}

#[test]
fn log_errors_picks_level_by_kind_and_ignore_drops() {
    init_logger(Box::new(CaptureLogger));

    LogErrors.report(ChartError::History(HistoryLoadError::Status(500)));
    LogErrors.report(ChartError::Malformed(MalformedMessageError::Envelope("eof".to_string())));
    IgnoreErrors.report(ChartError::Transport("dropped".to_string()));

    let lines = LINES.lock().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].0, LogLevel::Error);
    assert!(lines[0].1.contains("HTTP 500"));
    assert_eq!(lines[1].0, LogLevel::Warn);
    assert!(lines[1].1.contains("not a JSON envelope"));
}
