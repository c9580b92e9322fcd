//! Bulk import: delimited text to candidate student records.
//!
//! Each accepted line carries at least [`FIELD_COUNT`] comma-separated fields
//! mapped positionally onto [`StudentField::ALL`]; extra fields are ignored
//! and shorter lines are dropped without being reported. Only the aggregate
//! "nothing usable" case becomes an error.

mod submit;

pub use submit::{BulkOutcome, submit_sequentially};

use crate::error::ImportError;
use crate::model::student::{StudentDraft, StudentField};

pub const FIELD_COUNT: usize = StudentField::ALL.len();

pub const CSV_MIME: &str = "text/csv";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImportMode {
    /// One record per non-blank line, no header.
    #[default]
    Delimited,
    /// The first line is a header and is always skipped; fields may be quoted.
    Csv,
}

impl ImportMode {
    pub fn label(self) -> &'static str {
        match self {
            ImportMode::Delimited => "Text",
            ImportMode::Csv => "CSV",
        }
    }
}

/// Checks an uploaded file before reading it.
///
/// Accepts a declared `text/csv` type or a `.csv` name (any case).
pub fn check_upload(file_name: &str, mime_type: &str) -> Result<(), ImportError> {
    let declared_csv = mime_type
        .split(';')
        .next()
        .is_some_and(|m| m.trim().eq_ignore_ascii_case(CSV_MIME));
    let named_csv = file_name.to_ascii_lowercase().ends_with(".csv");
    if declared_csv || named_csv {
        Ok(())
    } else {
        Err(ImportError::UnsupportedFile(file_name.to_string()))
    }
}

/// Parses every usable line of `text`.
pub fn parse(text: &str, mode: ImportMode) -> Vec<StudentDraft> {
    let skip = match mode {
        ImportMode::Delimited => 0,
        ImportMode::Csv => 1,
    };
    text.lines()
        .skip(skip)
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| parse_line(line, mode))
        .collect()
}

/// Parses `text`, failing when no line produced a candidate.
pub fn parse_candidates(text: &str, mode: ImportMode) -> Result<Vec<StudentDraft>, ImportError> {
    let candidates = parse(text, mode);
    if candidates.is_empty() {
        return Err(ImportError::NoValidRecords);
    }
    Ok(candidates)
}

fn parse_line(line: &str, mode: ImportMode) -> Option<StudentDraft> {
    let cells: Vec<&str> = line.split(',').collect();
    if cells.len() < FIELD_COUNT {
        return None;
    }
    let mut draft = StudentDraft::default();
    for (field, cell) in StudentField::ALL.iter().zip(cells) {
        field.set(&mut draft, normalize_cell(cell, mode));
    }
    Some(draft)
}

fn normalize_cell(cell: &str, mode: ImportMode) -> String {
    let s = cell.trim();
    match mode {
        ImportMode::Delimited => s.to_string(),
        ImportMode::Csv => s
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(s)
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "A,R,P,I,C,D,50,100,2024-01-01,Place";

    #[test]
    fn single_line_maps_positionally() {
        let parsed = parse(LINE, ImportMode::Delimited);
        assert_eq!(parsed.len(), 1);
        let d = &parsed[0];
        assert_eq!(d.candidate_name, "A");
        assert_eq!(d.relation, "R");
        assert_eq!(d.parent_name, "P");
        assert_eq!(d.institute, "I");
        assert_eq!(d.course, "C");
        assert_eq!(d.division, "D");
        assert_eq!(d.marks_obtained, "50");
        assert_eq!(d.marks_total, "100");
        assert_eq!(d.date, "2024-01-01");
        assert_eq!(d.place, "Place");
    }

    #[test]
    fn short_lines_are_dropped() {
        let text = "a,b,c\n\n   \nA,R,P,I,C,D,1,2,3\n";
        assert!(parse(text, ImportMode::Delimited).is_empty());
        assert_eq!(
            parse_candidates(text, ImportMode::Delimited),
            Err(ImportError::NoValidRecords)
        );
    }

    #[test]
    fn fields_are_trimmed_and_extras_ignored() {
        let text = "  Asha , Daughter,Ravi ,X,Y,First, 72 ,80,2024-02-02, Pune ,extra,more";
        let d = &parse(text, ImportMode::Delimited)[0];
        assert_eq!(d.candidate_name, "Asha");
        assert_eq!(d.marks_obtained, "72");
        assert_eq!(d.place, "Pune");
    }

    #[test]
    fn csv_mode_always_drops_first_line() {
        // the first line is a valid record, but in CSV mode it is the header
        let text = format!("{LINE}\n{LINE}");
        assert_eq!(parse(&text, ImportMode::Csv).len(), 1);
        assert_eq!(parse(&text, ImportMode::Delimited).len(), 2);
        assert!(parse(LINE, ImportMode::Csv).is_empty());
    }

    #[test]
    fn csv_mode_strips_surrounding_quotes() {
        let text = "name,relation,parent,institute,course,division,obtained,total,date,place\r\n\
                    \"Asha\",\"D/o\",\"Ravi\",\"MIT\",\"BSc\",\"I\",\"50\",\"100\",\"2024-01-01\",\"Pune\"\r\n";
        let parsed = parse(text, ImportMode::Csv);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].candidate_name, "Asha");
        assert_eq!(parsed[0].place, "Pune");

        // delimited mode keeps the quotes
        let line = text.lines().nth(1).unwrap();
        assert_eq!(parse(line, ImportMode::Delimited)[0].candidate_name, "\"Asha\"");
    }

    #[test]
    fn upload_check_accepts_type_or_name() {
        assert!(check_upload("students.csv", "").is_ok());
        assert!(check_upload("STUDENTS.CSV", "application/octet-stream").is_ok());
        assert!(check_upload("export", "text/csv; charset=utf-8").is_ok());
        assert_eq!(
            check_upload("photo.png", "image/png"),
            Err(ImportError::UnsupportedFile("photo.png".into()))
        );
    }
}
