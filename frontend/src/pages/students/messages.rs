use common::import::ImportMode;
use common::model::student::{Student, StudentField};

pub enum Msg {
    /// Starts a fetch; `true` for a manual refresh.
    Fetch { refresh: bool },
    Fetched {
        generation: u64,
        students: Option<Vec<Student>>,
    },
    SetSearch(String),

    OpenAdd,
    OpenEdit(String),
    CloseEditor,
    EditField(StudentField, String),
    Save,
    /// Reply of a save; `id` is the record the editor was opened for.
    Saved {
        id: Option<String>,
        saved: Option<Student>,
    },

    Delete(String),
    Deleted(String),

    OpenBulk,
    CloseBulk,
    SetBulkText(String),
    SetBulkMode(ImportMode),
    FileChosen(web_sys::File),
    FileRead(String),
    SubmitBulk,
    BulkFinished { created: Vec<Student>, summary: String },
}
