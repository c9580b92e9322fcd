use chrono::FixedOffset;

use crate::model::certificate::{Certificate, UNKNOWN};
use crate::model::timestamp::local_date;

/// Number of date buckets kept by [`timeline`].
pub const TIMELINE_WINDOW: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelinePoint {
    /// `YYYY-MM-DD` in the caller's offset, or [`UNKNOWN`].
    pub date: String,
    /// Short axis label such as `Mar 9`.
    pub label: String,
    pub legitimate: usize,
    pub suspicious: usize,
    pub total: usize,
}

/// Per-day verification counts.
///
/// Days appear in the order their first record appears in `records`; only
/// the last [`TIMELINE_WINDOW`] days by that order are kept.
pub fn timeline(records: &[Certificate], offset: FixedOffset) -> Vec<TimelinePoint> {
    let mut points: Vec<TimelinePoint> = Vec::new();
    for record in records {
        let (date, label) = match record.recorded_at() {
            Some(at) => {
                let day = local_date(at, offset);
                (day.format("%Y-%m-%d").to_string(), day.format("%b %-d").to_string())
            }
            None => (UNKNOWN.to_string(), UNKNOWN.to_string()),
        };
        let legitimate = record.is_legitimate();

        let idx = match points.iter().position(|p| p.date == date) {
            Some(idx) => idx,
            None => {
                points.push(TimelinePoint {
                    date,
                    label,
                    legitimate: 0,
                    suspicious: 0,
                    total: 0,
                });
                points.len() - 1
            }
        };
        let point = &mut points[idx];
        if legitimate {
            point.legitimate += 1;
        } else {
            point.suspicious += 1;
        }
        point.total += 1;
    }

    if points.len() > TIMELINE_WINDOW {
        let excess = points.len() - TIMELINE_WINDOW;
        points.drain(..excess);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use serde_json::json;

    fn at(timestamp: &str, legit: bool) -> Certificate {
        serde_json::from_value(json!({"_id": timestamp, "timestamp": timestamp, "is_legitimate": legit}))
            .unwrap()
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn counts_are_split_per_day() {
        let records = vec![
            at("2024-03-09T08:00:00Z", true),
            at("2024-03-08T08:00:00Z", false),
            at("2024-03-09T21:00:00Z", false),
            at("bogus", true),
        ];
        let points = timeline(&records, utc());
        let dates: Vec<_> = points.iter().map(|p| p.date.as_str()).collect();
        // first-seen order, not chronological
        assert_eq!(dates, ["2024-03-09", "2024-03-08", UNKNOWN]);

        let first = &points[0];
        assert_eq!((first.legitimate, first.suspicious, first.total), (1, 1, 2));
        assert_eq!(first.label, "Mar 9");
        for p in &points {
            assert_eq!(p.legitimate + p.suspicious, p.total);
        }
    }

    #[test]
    fn offset_moves_late_records_to_next_day() {
        let records = vec![at("2024-03-09T08:00:00Z", true), at("2024-03-09T21:00:00Z", true)];
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let points = timeline(&records, ist);
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].date, "2024-03-10");
    }

    #[test]
    fn keeps_last_thirty_days_by_position() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let records: Vec<_> = (0..40)
            .map(|i| {
                let day = start + Duration::days(i);
                at(&format!("{day}T12:00:00Z"), i % 3 == 0)
            })
            .collect();
        let points = timeline(&records, utc());
        assert_eq!(points.len(), TIMELINE_WINDOW);
        assert_eq!(points[0].date, "2024-01-11");
        assert_eq!(points[TIMELINE_WINDOW - 1].date, "2024-02-09");
    }
}
