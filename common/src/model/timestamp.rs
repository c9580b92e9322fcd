//! Timestamp parsing and calendar-date formatting.
//!
//! The remote service emits ISO-8601 strings, usually RFC 3339 with a `Z`
//! suffix. Bare date-times are read as UTC; bare dates as UTC midnight.
//! Formatting always goes through an explicit [`FixedOffset`] supplied by the
//! caller (the browser's current offset in the dashboard) so the same input
//! never lands on different days depending on where the code runs.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

/// Text shown in place of a date that could not be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Calendar date of `at` in the given offset.
pub fn local_date(at: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    at.with_timezone(&offset).date_naive()
}

/// `M/D/YYYY`, the short numeric form used across the dashboard tables.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Display form of a record timestamp.
///
/// A bare calendar date is shown as-is, without shifting it through the
/// offset; anything else is converted to the offset first.
pub fn display_date(raw: &str, offset: FixedOffset) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return short_date(date);
    }
    match parse_timestamp(trimmed) {
        Some(at) => short_date(local_date(at, offset)),
        None => INVALID_DATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ist() -> FixedOffset {
        FixedOffset::east_opt(5 * 3600 + 1800).unwrap()
    }

    #[test]
    fn parses_common_shapes() {
        let zulu = parse_timestamp("2024-03-09T20:15:00.000Z").unwrap();
        let naive = parse_timestamp("2024-03-09T20:15:00").unwrap();
        assert_eq!(zulu, naive);
        assert!(parse_timestamp("2024-03-09").is_some());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("  ").is_none());
    }

    #[test]
    fn local_date_follows_offset() {
        let at = parse_timestamp("2024-03-09T20:15:00Z").unwrap();
        assert_eq!(local_date(at, ist()).to_string(), "2024-03-10");
        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(local_date(at, utc).to_string(), "2024-03-09");
    }

    #[test]
    fn display_date_keeps_bare_dates() {
        let west = FixedOffset::west_opt(8 * 3600).unwrap();
        assert_eq!(display_date("2024-01-01", west), "1/1/2024");
        assert_eq!(display_date("2024-03-09T20:15:00Z", ist()), "3/10/2024");
        assert_eq!(display_date("not a date", ist()), INVALID_DATE);
        assert_eq!(display_date("", ist()), "");
    }
}
