//! Static description of the student edit form.
//!
//! The frontend renders the form by walking [`STUDENT_FORM`]; adding a field
//! means adding a descriptor here, nothing in the view changes.

use super::student::{StudentDraft, StudentField};
use crate::error::FormError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
    Date,
}

impl InputKind {
    /// Value of the HTML `type` attribute.
    pub fn html_type(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Number => "number",
            InputKind::Date => "date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub field: StudentField,
    pub label: &'static str,
    pub kind: InputKind,
    pub required: bool,
}

impl FieldDescriptor {
    const fn new(field: StudentField, label: &'static str, kind: InputKind) -> Self {
        Self {
            field,
            label,
            kind,
            required: false,
        }
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(&self) -> String {
        format!("Enter {}", self.label.to_lowercase())
    }

    /// The name field spans both grid columns.
    pub fn full_width(&self) -> bool {
        self.field == StudentField::CandidateName
    }
}

pub const STUDENT_FORM: [FieldDescriptor; 10] = [
    FieldDescriptor::new(StudentField::CandidateName, "Candidate Name", InputKind::Text).required(),
    FieldDescriptor::new(StudentField::Relation, "Relation", InputKind::Text),
    FieldDescriptor::new(StudentField::ParentName, "Parent Name", InputKind::Text),
    FieldDescriptor::new(StudentField::Institute, "Institute", InputKind::Text),
    FieldDescriptor::new(StudentField::Course, "Course", InputKind::Text),
    FieldDescriptor::new(StudentField::Division, "Division", InputKind::Text),
    FieldDescriptor::new(StudentField::MarksObtained, "Marks Obtained", InputKind::Number),
    FieldDescriptor::new(StudentField::MarksTotal, "Total Marks", InputKind::Number),
    FieldDescriptor::new(StudentField::Date, "Date", InputKind::Date),
    FieldDescriptor::new(StudentField::Place, "Place", InputKind::Text),
];

/// Checks every required descriptor, reporting the first blank one.
pub fn validate(draft: &StudentDraft) -> Result<(), FormError> {
    for descriptor in STUDENT_FORM.iter().filter(|d| d.required) {
        if descriptor.field.get(draft).trim().is_empty() {
            return Err(FormError::RequiredField(descriptor.label));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_follow_field_order() {
        let fields: Vec<_> = STUDENT_FORM.iter().map(|d| d.field).collect();
        assert_eq!(fields, StudentField::ALL.to_vec());
        assert_eq!(STUDENT_FORM.iter().filter(|d| d.required).count(), 1);
        assert_eq!(STUDENT_FORM[6].kind.html_type(), "number");
        assert_eq!(STUDENT_FORM[0].placeholder(), "Enter candidate name");
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut draft = StudentDraft {
            candidate_name: "   ".into(),
            ..StudentDraft::default()
        };
        let err = validate(&draft).unwrap_err();
        assert_eq!(err.to_string(), "Candidate Name is required");

        draft.candidate_name = "Devi".into();
        assert_eq!(validate(&draft), Ok(()));
    }
}
