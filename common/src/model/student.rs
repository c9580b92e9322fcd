use serde::{Deserialize, Serialize};

use super::lenient_string;
use crate::analytics::percentage;

/// A student record as stored by the remote `/users` service.
///
/// The identifier and timestamps are assigned remotely; a record built on the
/// client has none of them until the create call returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub fields: StudentDraft,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Student {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Marks obtained as a rounded percentage of the total, `0` when not computable.
    pub fn percentage(&self) -> i64 {
        percentage(&self.fields.marks_obtained, &self.fields.marks_total)
    }
}

/// The editable part of a [`Student`]: body of create and update requests,
/// state of the edit form and output of the bulk import parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentDraft {
    #[serde(deserialize_with = "lenient_string")]
    pub candidate_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub relation: String,
    #[serde(deserialize_with = "lenient_string")]
    pub parent_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub institute: String,
    #[serde(deserialize_with = "lenient_string")]
    pub course: String,
    #[serde(deserialize_with = "lenient_string")]
    pub division: String,
    #[serde(deserialize_with = "lenient_string")]
    pub marks_obtained: String,
    #[serde(deserialize_with = "lenient_string")]
    pub marks_total: String,
    #[serde(deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(deserialize_with = "lenient_string")]
    pub place: String,
}

impl From<&Student> for StudentDraft {
    fn from(student: &Student) -> Self {
        student.fields.clone()
    }
}

/// The ten editable student fields, in the positional order used by bulk import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StudentField {
    CandidateName,
    Relation,
    ParentName,
    Institute,
    Course,
    Division,
    MarksObtained,
    MarksTotal,
    Date,
    Place,
}

impl StudentField {
    pub const ALL: [StudentField; 10] = [
        StudentField::CandidateName,
        StudentField::Relation,
        StudentField::ParentName,
        StudentField::Institute,
        StudentField::Course,
        StudentField::Division,
        StudentField::MarksObtained,
        StudentField::MarksTotal,
        StudentField::Date,
        StudentField::Place,
    ];

    /// Wire name of the field, also used as the form input `name`.
    pub fn key(self) -> &'static str {
        match self {
            StudentField::CandidateName => "candidate_name",
            StudentField::Relation => "relation",
            StudentField::ParentName => "parent_name",
            StudentField::Institute => "institute",
            StudentField::Course => "course",
            StudentField::Division => "division",
            StudentField::MarksObtained => "marks_obtained",
            StudentField::MarksTotal => "marks_total",
            StudentField::Date => "date",
            StudentField::Place => "place",
        }
    }

    pub fn get(self, draft: &StudentDraft) -> &str {
        match self {
            StudentField::CandidateName => &draft.candidate_name,
            StudentField::Relation => &draft.relation,
            StudentField::ParentName => &draft.parent_name,
            StudentField::Institute => &draft.institute,
            StudentField::Course => &draft.course,
            StudentField::Division => &draft.division,
            StudentField::MarksObtained => &draft.marks_obtained,
            StudentField::MarksTotal => &draft.marks_total,
            StudentField::Date => &draft.date,
            StudentField::Place => &draft.place,
        }
    }

    pub fn set(self, draft: &mut StudentDraft, value: String) {
        let slot = match self {
            StudentField::CandidateName => &mut draft.candidate_name,
            StudentField::Relation => &mut draft.relation,
            StudentField::ParentName => &mut draft.parent_name,
            StudentField::Institute => &mut draft.institute,
            StudentField::Course => &mut draft.course,
            StudentField::Division => &mut draft.division,
            StudentField::MarksObtained => &mut draft.marks_obtained,
            StudentField::MarksTotal => &mut draft.marks_total,
            StudentField::Date => &mut draft.date,
            StudentField::Place => &mut draft.place,
        };
        *slot = value;
    }
}

/// Replaces the record identified by `id`, keeping it in place.
///
/// The stored record keeps `id` even when `updated` carries no identifier or
/// a different one. Returns `false` when no record matched.
pub fn replace_by_id(students: &mut [Student], id: &str, mut updated: Student) -> bool {
    match students.iter_mut().find(|s| s.id.as_deref() == Some(id)) {
        Some(slot) => {
            updated.id = Some(id.to_string());
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Applies the reply of a save to the local list.
///
/// `edited` is the identifier the edit form was opened with, captured when
/// the request was sent. An edit only ever replaces; a create appends.
pub fn apply_saved(students: &mut Vec<Student>, edited: Option<&str>, saved: Student) {
    match edited {
        Some(id) => {
            replace_by_id(students, id, saved);
        }
        None => students.push(saved),
    }
}

/// Removes every record with the given identifier.
pub fn remove_by_id(students: &mut Vec<Student>, id: &str) {
    students.retain(|s| s.id.as_deref() != Some(id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn student(id: &str, name: &str) -> Student {
        Student {
            id: Some(id.to_string()),
            fields: StudentDraft {
                candidate_name: name.to_string(),
                ..StudentDraft::default()
            },
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn decodes_remote_document_with_extra_keys() {
        let raw = json!({
            "_id": "66a1",
            "candidate_name": "Asha",
            "course": "B.Sc",
            "marks_obtained": "50",
            "marks_total": "100",
            "createdAt": "2024-01-01T10:00:00.000Z",
            "__v": 0
        });
        let s: Student = serde_json::from_value(raw).unwrap();
        assert_eq!(s.id(), Some("66a1"));
        assert_eq!(s.fields.candidate_name, "Asha");
        assert_eq!(s.fields.place, "");
        assert_eq!(s.created_at.as_deref(), Some("2024-01-01T10:00:00.000Z"));
        assert_eq!(s.percentage(), 50);
    }

    #[test]
    fn draft_body_carries_no_identifier() {
        let draft = StudentDraft {
            candidate_name: "Ravi".into(),
            ..StudentDraft::default()
        };
        let body = serde_json::to_value(&draft).unwrap();
        assert!(body.get("_id").is_none());
        assert_eq!(body["candidate_name"], "Ravi");
        assert_eq!(body.as_object().unwrap().len(), 10);
    }

    #[test]
    fn field_accessors_cover_every_key() {
        let mut draft = StudentDraft::default();
        for (i, field) in StudentField::ALL.iter().enumerate() {
            field.set(&mut draft, format!("v{i}"));
        }
        let body = serde_json::to_value(&draft).unwrap();
        for (i, field) in StudentField::ALL.iter().enumerate() {
            assert_eq!(field.get(&draft), format!("v{i}"));
            assert_eq!(body[field.key()], format!("v{i}"));
        }
    }

    #[test]
    fn replace_and_remove_by_id() {
        let mut list = vec![student("1", "A"), student("2", "B")];
        assert!(replace_by_id(&mut list, "2", student("2", "B2")));
        assert_eq!(list[1].fields.candidate_name, "B2");
        assert!(!replace_by_id(&mut list, "9", student("9", "Z")));

        remove_by_id(&mut list, "1");
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id(), Some("2"));
    }

    #[test]
    fn saved_edit_replaces_the_row_it_was_opened_for() {
        let mut list = vec![student("1", "A"), student("2", "B")];

        apply_saved(&mut list, Some("1"), student("1", "A2"));
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].fields.candidate_name, "A2");

        // reply without an id, or with another one, still lands on row "1"
        let mut anonymous = student("x", "A3");
        anonymous.id = None;
        apply_saved(&mut list, Some("1"), anonymous);
        apply_saved(&mut list, Some("1"), student("other", "A4"));
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id(), Some("1"));
        assert_eq!(list[0].fields.candidate_name, "A4");
        assert_eq!(list.iter().filter(|s| s.id() == Some("1")).count(), 1);
    }

    #[test]
    fn saved_edit_of_a_removed_row_is_dropped() {
        let mut list = vec![student("2", "B")];
        apply_saved(&mut list, Some("1"), student("1", "A2"));
        assert_eq!(list, vec![student("2", "B")]);
    }

    #[test]
    fn saved_create_appends() {
        let mut list = vec![student("1", "A")];
        apply_saved(&mut list, None, student("3", "C"));
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].id(), Some("3"));
    }

    #[test]
    fn list_with_null_and_numeric_fields_decodes() {
        let raw = r#"[
            {"_id": "1", "candidate_name": "A", "division": null, "marks_obtained": 450, "marks_total": "500"},
            {"_id": "2", "candidate_name": "B", "place": null}
        ]"#;
        let list: Vec<Student> = serde_json::from_str(raw).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].fields.division, "");
        assert_eq!(list[0].fields.marks_obtained, "450");
        assert_eq!(list[0].percentage(), 90);
        assert_eq!(list[1].fields.place, "");
        assert_eq!(list[1].fields.candidate_name, "B");
    }
}
