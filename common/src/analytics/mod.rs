//! Aggregations behind the analytics charts and the summary cards.

mod grade;
mod timeline;

pub use grade::{GradeTier, percentage};
pub use timeline::{TIMELINE_WINDOW, TimelinePoint, timeline};

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::model::certificate::{Certificate, UNKNOWN};

/// Number of category buckets kept by [`compare_groups`].
pub const TOP_GROUPS: usize = 10;

/// One aggregation slot: a grouping value and how many records carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub name: String,
    pub value: usize,
}

/// Counts records per key, missing keys counting as [`UNKNOWN`].
///
/// Buckets come out by descending count; equal counts keep the order in
/// which their key was first seen.
pub fn group_by<'a, T, I, F>(items: I, key: F) -> Vec<Bucket>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&'a T) -> Option<&'a str>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut buckets: Vec<Bucket> = Vec::new();
    for item in items {
        let name = key(item).unwrap_or(UNKNOWN);
        match index.get(name) {
            Some(&slot) => buckets[slot].value += 1,
            None => {
                index.insert(name, buckets.len());
                buckets.push(Bucket {
                    name: name.to_string(),
                    value: 1,
                });
            }
        }
    }
    buckets.sort_by(|a, b| b.value.cmp(&a.value));
    buckets
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompareBy {
    #[default]
    CompletionYear,
    Course,
    College,
}

impl CompareBy {
    pub const OPTIONS: [CompareBy; 3] = [CompareBy::CompletionYear, CompareBy::Course, CompareBy::College];

    pub fn value(self) -> &'static str {
        match self {
            CompareBy::CompletionYear => "completion_year",
            CompareBy::Course => "course",
            CompareBy::College => "college",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CompareBy::CompletionYear => "Completion Year",
            CompareBy::Course => "Course",
            CompareBy::College => "College",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "course" => CompareBy::Course,
            "college" => CompareBy::College,
            _ => CompareBy::CompletionYear,
        }
    }

    fn key(self, record: &Certificate) -> Option<&str> {
        match self {
            CompareBy::CompletionYear => record.key_details.completion_year.as_deref(),
            CompareBy::Course => record.course_key(),
            CompareBy::College => record.key_details.college.as_deref(),
        }
    }
}

/// Top [`TOP_GROUPS`] buckets for the comparison chart.
pub fn compare_groups(records: &[Certificate], by: CompareBy, legitimate_only: bool) -> Vec<Bucket> {
    let mut buckets = group_by(
        records.iter().filter(|r| !legitimate_only || r.is_legitimate()),
        |r| by.key(r),
    );
    buckets.truncate(TOP_GROUPS);
    buckets
}

/// Figures shown on the summary cards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub legitimate: usize,
    pub suspicious: usize,
    /// Records stamped within the seven days before `now`.
    pub recent_week: usize,
    /// Rounded share of legitimate records, `0` for an empty collection.
    pub legitimacy_rate: i64,
    pub avg_signature_score: f64,
}

pub fn summarize(records: &[Certificate], now: DateTime<Utc>) -> Summary {
    let total = records.len();
    let legitimate = records.iter().filter(|r| r.is_legitimate()).count();
    let week_ago = now - Duration::days(7);
    let recent_week = records
        .iter()
        .filter(|r| r.recorded_at().is_some_and(|at| at > week_ago))
        .count();
    let score_sum: f64 = records
        .iter()
        .map(|r| r.signature_similarity_score.unwrap_or(0.0))
        .sum();
    let legitimacy_rate = if total > 0 {
        grade::round_half_up(legitimate as f64 / total as f64 * 100.0)
    } else {
        0
    };

    Summary {
        total,
        legitimate,
        suspicious: total - legitimate,
        recent_week,
        legitimacy_rate,
        avg_signature_score: score_sum / total.max(1) as f64,
    }
}

/// Two-slice split for the overview pie chart.
pub fn legitimacy_split(summary: &Summary) -> [Bucket; 2] {
    [
        Bucket {
            name: "Legitimate".to_string(),
            value: summary.legitimate,
        },
        Bucket {
            name: "Suspicious".to_string(),
            value: summary.suspicious,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn certificate(value: serde_json::Value) -> Certificate {
        serde_json::from_value(value).unwrap()
    }

    fn sample() -> Vec<Certificate> {
        vec![
            certificate(json!({"_id": "1", "timestamp": "2024-06-10T09:00:00Z", "is_legitimate": true,
                "signature_similarity_score": 0.9, "course": "MBA",
                "key_details": {"completion_year": "2022", "college": "North"}})),
            certificate(json!({"_id": "2", "timestamp": "2024-06-01T09:00:00Z", "is_legitimate": false,
                "signature_similarity_score": 0.3,
                "key_details": {"completion_year": "2021", "course": "BSc", "college": "North"}})),
            certificate(json!({"_id": "3", "timestamp": "2024-06-12T09:00:00Z", "is_legitimate": true,
                "key_details": {"completion_year": "2022", "course": "BSc"}})),
            certificate(json!({"_id": "4", "timestamp": "garbage",
                "key_details": {}})),
        ]
    }

    #[test]
    fn group_by_orders_by_count_then_first_seen() {
        let records = sample();
        let buckets = compare_groups(&records, CompareBy::College, false);
        assert_eq!(
            buckets,
            [
                Bucket { name: "North".into(), value: 2 },
                Bucket { name: UNKNOWN.into(), value: 2 },
            ]
        );

        let courses = compare_groups(&records, CompareBy::Course, false);
        assert_eq!(courses[0], Bucket { name: "BSc".into(), value: 2 });
        assert_eq!(courses[1].name, "MBA");
    }

    #[test]
    fn bucket_counts_sum_to_collection_size() {
        let records = sample();
        for by in CompareBy::OPTIONS {
            let sum: usize = compare_groups(&records, by, false).iter().map(|b| b.value).sum();
            assert_eq!(sum, records.len());
        }
        let legit_sum: usize = compare_groups(&records, CompareBy::CompletionYear, true)
            .iter()
            .map(|b| b.value)
            .sum();
        assert_eq!(legit_sum, 2);
    }

    #[test]
    fn groups_are_capped() {
        let records: Vec<Certificate> = (0..15)
            .map(|i| certificate(json!({"_id": i.to_string(), "key_details": {"college": format!("C{i}")}})))
            .collect();
        assert_eq!(compare_groups(&records, CompareBy::College, false).len(), TOP_GROUPS);
    }

    #[test]
    fn summary_figures() {
        let now = DateTime::parse_from_rfc3339("2024-06-13T00:00:00Z").unwrap().with_timezone(&Utc);
        let s = summarize(&sample(), now);
        assert_eq!(s.total, 4);
        assert_eq!(s.legitimate, 2);
        assert_eq!(s.suspicious, 2);
        assert_eq!(s.recent_week, 2);
        assert_eq!(s.legitimacy_rate, 50);
        assert!((s.avg_signature_score - 0.3).abs() < 1e-9);

        let split = legitimacy_split(&s);
        assert_eq!(split[0].value + split[1].value, s.total);
    }

    #[test]
    fn empty_summary_has_zero_rate() {
        let s = summarize(&[], DateTime::<Utc>::default());
        assert_eq!(s.legitimacy_rate, 0);
        assert_eq!(s.avg_signature_score, 0.0);
    }

    #[test]
    fn compare_by_values_round_trip() {
        for by in CompareBy::OPTIONS {
            assert_eq!(CompareBy::from_value(by.value()), by);
        }
    }
}
