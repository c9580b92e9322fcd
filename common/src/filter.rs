//! Pure filters deriving the displayed subset from a fetched collection.
//!
//! A filter never reorders or copies records: [`apply`] returns references to
//! the matching records in input order, so applying the same filter twice
//! yields the same subset and the subset is never larger than the input.

use std::collections::BTreeSet;

use crate::model::certificate::{Certificate, UNKNOWN};
use crate::model::student::Student;

pub trait RecordFilter<T> {
    fn matches(&self, record: &T) -> bool;
}

pub fn apply<'a, T, F>(records: &'a [T], filter: &F) -> Vec<&'a T>
where
    F: RecordFilter<T> + ?Sized,
{
    records.iter().filter(|r| filter.matches(r)).collect()
}

/// Free-text predicate over a fixed set of searchable fields.
///
/// The query is trimmed and lower-cased once; a record matches when the query
/// is a substring of its lower-cased, space-joined non-empty fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery(String);

impl TextQuery {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches<'a, I>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        if self.0.is_empty() {
            return true;
        }
        let haystack = fields
            .into_iter()
            .flatten()
            .filter(|f| !f.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        haystack.contains(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFilter {
    pub query: TextQuery,
}

impl StudentFilter {
    pub fn new(query: &str) -> Self {
        Self {
            query: TextQuery::new(query),
        }
    }
}

impl RecordFilter<Student> for StudentFilter {
    fn matches(&self, record: &Student) -> bool {
        let f = &record.fields;
        self.query.matches([
            Some(f.candidate_name.as_str()),
            Some(f.course.as_str()),
            Some(f.institute.as_str()),
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum YearFilter {
    #[default]
    All,
    Year(String),
}

impl YearFilter {
    pub const ALL_VALUE: &'static str = "all";

    /// Parses the value of the year `<select>`.
    pub fn from_value(value: &str) -> Self {
        if value == Self::ALL_VALUE {
            YearFilter::All
        } else {
            YearFilter::Year(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            YearFilter::All => Self::ALL_VALUE,
            YearFilter::Year(y) => y,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LegitimacyFilter {
    #[default]
    All,
    Legitimate,
    Suspicious,
}

impl LegitimacyFilter {
    pub const OPTIONS: [LegitimacyFilter; 3] = [
        LegitimacyFilter::All,
        LegitimacyFilter::Legitimate,
        LegitimacyFilter::Suspicious,
    ];

    pub fn value(self) -> &'static str {
        match self {
            LegitimacyFilter::All => "all",
            LegitimacyFilter::Legitimate => "legit",
            LegitimacyFilter::Suspicious => "not",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LegitimacyFilter::All => "All Status",
            LegitimacyFilter::Legitimate => "Legitimate Only",
            LegitimacyFilter::Suspicious => "Suspicious Only",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "legit" => LegitimacyFilter::Legitimate,
            "not" => LegitimacyFilter::Suspicious,
            _ => LegitimacyFilter::All,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificateFilter {
    pub query: TextQuery,
    pub year: YearFilter,
    pub legitimacy: LegitimacyFilter,
}

impl RecordFilter<Certificate> for CertificateFilter {
    fn matches(&self, record: &Certificate) -> bool {
        if let YearFilter::Year(year) = &self.year {
            if record.completion_year() != year {
                return false;
            }
        }
        match self.legitimacy {
            LegitimacyFilter::Legitimate if !record.is_legitimate() => return false,
            LegitimacyFilter::Suspicious if record.is_legitimate() => return false,
            _ => {}
        }
        let kd = &record.key_details;
        self.query.matches([
            kd.name.as_deref(),
            kd.college.as_deref(),
            kd.course.as_deref(),
            kd.registration_no.as_deref(),
            kd.cs_no.as_deref(),
            record.candidate_name.as_deref(),
        ])
    }
}

/// Distinct known completion years, newest first.
pub fn year_options(records: &[Certificate]) -> Vec<String> {
    let years: BTreeSet<&str> = records
        .iter()
        .map(Certificate::completion_year)
        .filter(|y| *y != UNKNOWN)
        .collect();
    years.into_iter().rev().map(str::to_string).collect()
}
