use crate::domain::errors::TimestampError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use derive_more::{Constructor, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Value Object - price level
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Constructor, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - bar time in epoch seconds
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Constructor, Display,
    Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn value(&self) -> i64 {
        self.0
    }

    pub const fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    /// Millisecond epoch value, floored to whole seconds
    pub fn from_millis(millis: f64) -> Result<Self, TimestampError> {
        if !millis.is_finite() {
            return Err(TimestampError::OutOfRange(millis));
        }
        let secs = (millis / 1000.0).floor();
        if secs < i64::MIN as f64 || secs > i64::MAX as f64 {
            return Err(TimestampError::OutOfRange(millis));
        }
        Ok(Self(secs as i64))
    }
}

/// Time as it appears on the wire: epoch milliseconds or a date-time string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireTime {
    Millis(f64),
    Text(String),
}

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

impl WireTime {
    /// Naive wall-clock strings are read as UTC.
    pub fn to_timestamp(&self) -> Result<Timestamp, TimestampError> {
        match self {
            WireTime::Millis(millis) => Timestamp::from_millis(*millis),
            WireTime::Text(text) => parse_time_text(text.trim()),
        }
    }
}

fn parse_time_text(text: &str) -> Result<Timestamp, TimestampError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(Timestamp(dt.timestamp()));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(Timestamp(naive.and_utc().timestamp()));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(Timestamp(midnight.and_utc().timestamp()));
        }
    }
    Err(TimestampError::Unparseable(text.to_string()))
}
