//! State of the students page.
//!
//! `generation` numbers fetches so that only the newest response is applied;
//! `alive` is cleared when the page is torn down so late responses are dropped.

use std::cell::Cell;
use std::rc::Rc;

use common::filter::{apply, StudentFilter};
use common::import::ImportMode;
use common::model::student::{Student, StudentDraft};

/// Record currently open in the add/edit modal.
pub struct Editor {
    /// `None` while adding a new record.
    pub id: Option<String>,
    pub draft: StudentDraft,
}

impl Editor {
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }
}

#[derive(Default)]
pub struct BulkImport {
    pub open: bool,
    pub text: String,
    pub mode: ImportMode,
    pub submitting: bool,
}

pub struct StudentsPage {
    pub students: Vec<Student>,
    pub loading: bool,
    pub refreshing: bool,
    pub search: String,
    pub editor: Option<Editor>,
    pub saving: bool,
    pub bulk: BulkImport,
    pub generation: u64,
    pub alive: Rc<Cell<bool>>,
}

impl StudentsPage {
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
            loading: true,
            refreshing: false,
            search: String::new(),
            editor: None,
            saving: false,
            bulk: BulkImport::default(),
            generation: 0,
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn visible(&self) -> Vec<&Student> {
        apply(&self.students, &StudentFilter::new(&self.search))
    }
}
