use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::timestamp::parse_timestamp;
use super::{lenient_text, non_empty, null_as_default};

/// Bucket name for records whose grouping value is missing.
pub const UNKNOWN: &str = "Unknown";

/// One verified (or rejected) certificate as returned by `GET /calls`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institute: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    /// Similarity of the detected signature to the reference, in `0.0..=1.0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_similarity_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_match: Option<bool>,
    /// Legitimacy flag; a missing flag reads as "suspicious".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_legitimate: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_details: KeyDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticity_check: Option<String>,
}

/// Fields extracted from the scanned certificate.
///
/// Every known field is optional. Extraction sometimes yields numbers where text
/// is expected (years, marks), so scalars are accepted and kept as text. Keys
/// this struct does not know about are preserved in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyDetails {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub certificate_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub father_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub marks_obtained: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub total_marks: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub completion_month: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub completion_year: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub registration_no: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub cs_no: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub date_of_issue: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub place_of_issue: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub issuing_authority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exists_in_db: Option<bool>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Certificate {
    pub fn is_legitimate(&self) -> bool {
        self.is_legitimate.unwrap_or(false)
    }

    /// Extracted name, then the submitted candidate name.
    pub fn display_name(&self) -> Option<&str> {
        non_empty(self.key_details.name.as_deref())
            .or_else(|| non_empty(self.candidate_name.as_deref()))
    }

    /// Extracted course, then the submitted course.
    pub fn display_course(&self) -> Option<&str> {
        non_empty(self.key_details.course.as_deref()).or_else(|| non_empty(self.course.as_deref()))
    }

    /// Course used as a grouping key: the extracted one when present at all.
    pub fn course_key(&self) -> Option<&str> {
        self.key_details.course.as_deref().or(self.course.as_deref())
    }

    pub fn completion_year(&self) -> &str {
        self.key_details.completion_year.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.timestamp)
    }
}

/// Body of `GET /calls`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificateList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<Certificate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}
