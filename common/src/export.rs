//! CSV export of the filtered certificate list.

use chrono::FixedOffset;
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::ExportError;
use crate::model::certificate::Certificate;
use crate::model::non_empty;
use crate::model::timestamp::display_date;

pub const EXPORT_FILE_NAME: &str = "certificate_data.csv";

pub const EXPORT_MIME: &str = "text/csv;charset=utf-8;";

pub const EXPORT_HEADERS: [&str; 10] = [
    "Name",
    "Course",
    "College",
    "Completion Year",
    "Registration No",
    "CS No",
    "Is Legitimate",
    "Timestamp",
    "Signature Score",
    "Division",
];

fn text(value: Option<&str>) -> String {
    non_empty(value).unwrap_or_default().to_string()
}

pub fn export_row(record: &Certificate, offset: FixedOffset) -> [String; 10] {
    let kd = &record.key_details;
    let score = match record.signature_similarity_score {
        Some(score) if score != 0.0 => score.to_string(),
        _ => String::new(),
    };
    [
        record.display_name().unwrap_or_default().to_string(),
        record.display_course().unwrap_or_default().to_string(),
        text(kd.college.as_deref()),
        text(kd.completion_year.as_deref()),
        text(kd.registration_no.as_deref()),
        text(kd.cs_no.as_deref()),
        if record.is_legitimate() { "Yes" } else { "No" }.to_string(),
        display_date(&record.timestamp, offset),
        score,
        text(kd.division.as_deref()),
    ]
}

/// Renders the header and one row per record, every field quoted, rows
/// separated by `\n` with no trailing newline.
pub fn export_csv<'a, I>(records: I, offset: FixedOffset) -> Result<String, ExportError>
where
    I: IntoIterator<Item = &'a Certificate>,
{
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(EXPORT_HEADERS)?;
    for record in records {
        writer.write_record(export_row(record, offset))?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    let mut out = String::from_utf8(bytes)?;
    if out.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn header_only_for_empty_list() {
        let out = export_csv(std::iter::empty(), utc()).unwrap();
        assert_eq!(
            out,
            "\"Name\",\"Course\",\"College\",\"Completion Year\",\"Registration No\",\
             \"CS No\",\"Is Legitimate\",\"Timestamp\",\"Signature Score\",\"Division\""
        );
    }

    #[test]
    fn rows_use_fallbacks_and_quote_everything() {
        let records: Vec<Certificate> = vec![
            serde_json::from_value(json!({
                "_id": "1", "timestamp": "2024-03-09T08:00:00Z", "is_legitimate": true,
                "candidate_name": "Asha", "course": "BSc", "signature_similarity_score": 0.87,
                "key_details": {"college": "North, East", "completion_year": "2023", "division": "First"}
            }))
            .unwrap(),
            serde_json::from_value(json!({
                "_id": "2", "timestamp": "2024-03-10T08:00:00Z", "signature_similarity_score": 0,
                "key_details": {"name": "Said \"Ali\""}
            }))
            .unwrap(),
        ];
        let out = export_csv(&records, utc()).unwrap();
        let lines: Vec<_> = out.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "\"Asha\",\"BSc\",\"North, East\",\"2023\",\"\",\"\",\"Yes\",\"3/9/2024\",\"0.87\",\"First\""
        );
        assert_eq!(
            lines[2],
            "\"Said \"\"Ali\"\"\",\"\",\"\",\"\",\"\",\"\",\"No\",\"3/10/2024\",\"\",\"\""
        );
    }
}
