//! Date and duration formatting for feed values.
//!
//! Feeds carry dates in the compact iCalendar basic format. Values
//! without a zone designator are read as UTC, the same as values with
//! one.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

const DATE_TIME_DISPLAY: &str = "%-d.%-m.%Y %H:%M";
const DATE_DISPLAY: &str = "%-d.%-m.%Y";
const NEWS_DISPLAY: &str = "%-d.%-m.";

/// Parses a raw feed date into a timestamp and a display string.
///
/// Layouts are tried in order: `YYYYMMDDThhmmssZ`, `YYYYMMDDThhmmss`
/// and `YYYYMMDD`. When nothing matches the timestamp is `None` and
/// the raw value is handed back unchanged.
pub fn parse_feed_timestamp(raw: &str) -> (Option<DateTime<Utc>>, String) {
    if raw.is_empty() {
        return (None, String::new());
    }

    let date_time = NaiveDateTime::parse_from_str(raw, "%Y%m%dT%H%M%SZ")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y%m%dT%H%M%S"));
    if let Ok(naive) = date_time {
        let ts = naive.and_utc();
        return (Some(ts), ts.format(DATE_TIME_DISPLAY).to_string());
    }

    // `parse_from_str` on a date rejects trailing input, so a
    // date-time value never lands here by accident
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y%m%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            let ts = naive.and_utc();
            return (Some(ts), ts.format(DATE_DISPLAY).to_string());
        }
    }

    tracing::debug!(value = raw, "Unable to parse feed timestamp");
    (None, raw.to_string())
}

/// Abbreviated `D.M.` form used by the news listing.
pub fn format_news_date(ts: &DateTime<Utc>) -> String {
    ts.format(NEWS_DISPLAY).to_string()
}

/// Compact duration like `1d 2h`, `1h 30m` or `0m`. The sign is
/// ignored.
pub fn format_duration(d: Duration) -> String {
    let d = d.abs();
    let days = d.num_days();
    let hours = d.num_hours() % 24;
    let minutes = d.num_minutes() % 60;

    match (days > 0, hours > 0, minutes > 0) {
        (true, true, true) => format!("{days}d {hours}h {minutes}m"),
        (true, true, false) => format!("{days}d {hours}h"),
        (true, false, true) => format!("{days}d {minutes}m"),
        (true, false, false) => format!("{days}d"),
        (false, true, true) => format!("{hours}h {minutes}m"),
        (false, true, false) => format!("{hours}h"),
        (false, false, true) => format!("{minutes}m"),
        (false, false, false) => String::from("0m"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn it_parses_all_supported_layouts() {
        let cases = [
            ("20240102T150405Z", "2.1.2024 15:04"),
            ("20240102T150405", "2.1.2024 15:04"),
            ("20240102", "2.1.2024"),
        ];
        for (raw, expected) in cases {
            let (ts, display) = parse_feed_timestamp(raw);
            assert!(ts.is_some(), "expected {raw} to parse");
            assert_eq!(display, expected);
            assert_ne!(display, raw);
        }
    }

    #[test]
    fn it_reads_local_times_as_utc() {
        let (ts, _) = parse_feed_timestamp("20240609T090000");
        assert_eq!(ts, Some(Utc.with_ymd_and_hms(2024, 6, 9, 9, 0, 0).unwrap()));

        let (ts, _) = parse_feed_timestamp("20240609");
        assert_eq!(ts, Some(Utc.with_ymd_and_hms(2024, 6, 9, 0, 0, 0).unwrap()));
    }

    #[test]
    fn it_echoes_unparseable_input() {
        for raw in ["", "invalid", "2024-01-02", "20241302T000000Z"] {
            let (ts, display) = parse_feed_timestamp(raw);
            assert!(ts.is_none());
            assert_eq!(display, raw);
        }
    }

    #[test]
    fn it_formats_news_dates() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 7, 10, 0, 0).unwrap();
        assert_eq!(format_news_date(&ts), "7.3.");
    }

    #[test]
    fn it_formats_durations() {
        let cases = [
            (Duration::minutes(90), "1h 30m"),
            (Duration::hours(25), "1d 1h"),
            (Duration::hours(48), "2d"),
            (Duration::minutes(5), "5m"),
            (Duration::zero(), "0m"),
            (Duration::hours(24) + Duration::minutes(5), "1d 5m"),
            (Duration::hours(26) + Duration::minutes(3), "1d 2h 3m"),
            (Duration::hours(3), "3h"),
            (Duration::seconds(59), "0m"),
        ];
        for (d, expected) in cases {
            assert_eq!(format_duration(d), expected, "duration {d:?}");
        }
    }

    #[test]
    fn it_ignores_duration_sign() {
        for d in [
            Duration::minutes(1),
            Duration::minutes(90),
            Duration::hours(25),
            Duration::hours(24) + Duration::minutes(5),
            Duration::days(3) + Duration::hours(4) + Duration::minutes(5),
        ] {
            assert_eq!(format_duration(-d), format_duration(d));
        }
    }
}
