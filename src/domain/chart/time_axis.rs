use super::theme::TimeScaleOptions;
use crate::domain::market_data::Timestamp;
use chrono::DateTime;

/// Label for a bar time on the time axis, in UTC.
///
/// - time visible, no seconds -> `HH:MM`
/// - time visible with seconds -> `HH:MM:SS`
/// - time hidden -> `DD.MM`
pub fn format_time_label(time: Timestamp, options: &TimeScaleOptions) -> String {
    let Some(date) = DateTime::from_timestamp(time.value(), 0) else {
        return time.value().to_string();
    };
    let pattern = match (options.time_visible, options.seconds_visible) {
        (true, false) => "%H:%M",
        (true, true) => "%H:%M:%S",
        (false, _) => "%d.%m",
    };
    date.format(pattern).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: Timestamp = Timestamp::from_secs(1_751_277_645); // 2025-06-30 10:00:45

    #[test]
    fn default_axis_hides_seconds() {
        assert_eq!(format_time_label(T, &TimeScaleOptions::default()), "10:00");
    }

    #[test]
    fn seconds_and_date_variants() {
        let with_seconds = TimeScaleOptions { time_visible: true, seconds_visible: true };
        let date_only = TimeScaleOptions { time_visible: false, seconds_visible: false };
        assert_eq!(format_time_label(T, &with_seconds), "10:00:45");
        assert_eq!(format_time_label(T, &date_only), "30.06");
    }
}
