//! Update function for the students page.
//!
//! Remote calls are spawned with `spawn_local` and answer with a follow-up
//! message. A failed call is logged and leaves the table as it was; validation
//! problems stop an action with an alert before anything is sent.

use common::import::{check_upload, parse_candidates, submit_sequentially, ImportMode};
use common::model::form::validate;
use common::model::student::{apply_saved, remove_by_id, StudentDraft};
use gloo_console::error;
use gloo_file::futures::read_as_text;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{BulkImport, Editor, StudentsPage};
use crate::helpers::{alert, confirm, show_toast};

pub fn update(component: &mut StudentsPage, ctx: &Context<StudentsPage>, msg: Msg) -> bool {
    match msg {
        Msg::Fetch { refresh } => {
            component.generation += 1;
            if refresh {
                component.refreshing = true;
            }
            let generation = component.generation;
            let alive = component.alive.clone();
            let api = ctx.props().api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let students = match api.list_students().await {
                    Ok(students) => Some(students),
                    Err(e) => {
                        error!(format!("Error fetching students: {}", e));
                        None
                    }
                };
                if alive.get() {
                    link.send_message(Msg::Fetched { generation, students });
                }
            });
            refresh
        }
        Msg::Fetched { generation, students } => {
            if generation != component.generation {
                return false;
            }
            component.loading = false;
            component.refreshing = false;
            if let Some(students) = students {
                component.students = students;
            }
            true
        }
        Msg::SetSearch(search) => {
            component.search = search;
            true
        }

        Msg::OpenAdd => {
            component.editor = Some(Editor {
                id: None,
                draft: StudentDraft::default(),
            });
            true
        }
        Msg::OpenEdit(id) => {
            let found = component
                .students
                .iter()
                .find(|s| s.id() == Some(id.as_str()))
                .map(|s| s.fields.clone());
            match found {
                Some(draft) => {
                    component.editor = Some(Editor { id: Some(id), draft });
                    true
                }
                None => false,
            }
        }
        Msg::CloseEditor => {
            if component.saving {
                return false;
            }
            component.editor = None;
            true
        }
        Msg::EditField(field, value) => {
            if let Some(editor) = component.editor.as_mut() {
                field.set(&mut editor.draft, value);
            }
            true
        }
        Msg::Save => {
            let Some(editor) = component.editor.as_ref() else {
                return false;
            };
            if component.saving {
                return false;
            }
            if let Err(e) = validate(&editor.draft) {
                alert(&e.to_string());
                return false;
            }
            component.saving = true;
            let api = ctx.props().api.clone();
            let link = ctx.link().clone();
            let alive = component.alive.clone();
            let id = editor.id.clone();
            let draft = editor.draft.clone();
            spawn_local(async move {
                let result = match &id {
                    Some(id) => api.update_student(id, &draft).await,
                    None => api.create_student(&draft).await,
                };
                let saved = match result {
                    Ok(student) => Some(student),
                    Err(e) => {
                        error!(format!("Error saving student: {}", e));
                        None
                    }
                };
                if alive.get() {
                    link.send_message(Msg::Saved { id, saved });
                }
            });
            true
        }
        Msg::Saved { id, saved } => {
            component.saving = false;
            let Some(student) = saved else {
                show_toast("Could not save the record");
                return true;
            };
            let editing = id.is_some();
            apply_saved(&mut component.students, id.as_deref(), student);
            component.editor = None;
            show_toast(if editing { "Record updated" } else { "Record added" });
            true
        }

        Msg::Delete(id) => {
            if !confirm("Are you sure you want to delete this record?") {
                return false;
            }
            let api = ctx.props().api.clone();
            let link = ctx.link().clone();
            let alive = component.alive.clone();
            spawn_local(async move {
                match api.delete_student(&id).await {
                    Ok(()) if alive.get() => link.send_message(Msg::Deleted(id)),
                    Ok(()) => {}
                    Err(e) => error!(format!("Error deleting student: {}", e)),
                }
            });
            false
        }
        Msg::Deleted(id) => {
            remove_by_id(&mut component.students, &id);
            true
        }

        Msg::OpenBulk => {
            component.bulk.open = true;
            true
        }
        Msg::CloseBulk => {
            if component.bulk.submitting {
                return false;
            }
            component.bulk = BulkImport::default();
            true
        }
        Msg::SetBulkText(text) => {
            component.bulk.text = text;
            true
        }
        Msg::SetBulkMode(mode) => {
            component.bulk.mode = mode;
            true
        }
        Msg::FileChosen(file) => {
            if let Err(e) = check_upload(&file.name(), &file.type_()) {
                alert(&e.to_string());
                return false;
            }
            let link = ctx.link().clone();
            let alive = component.alive.clone();
            spawn_local(async move {
                let blob = gloo_file::File::from(file);
                match read_as_text(&blob).await {
                    Ok(text) if alive.get() => link.send_message(Msg::FileRead(text)),
                    Ok(_) => {}
                    Err(e) => error!(format!("Error reading file: {}", e)),
                }
            });
            false
        }
        Msg::FileRead(text) => {
            component.bulk.text = text;
            component.bulk.mode = ImportMode::Csv;
            true
        }
        Msg::SubmitBulk => {
            if component.bulk.submitting {
                return false;
            }
            let candidates = match parse_candidates(&component.bulk.text, component.bulk.mode) {
                Ok(candidates) => candidates,
                Err(e) => {
                    alert(&e.to_string());
                    return false;
                }
            };
            component.bulk.submitting = true;
            let api = ctx.props().api.clone();
            let link = ctx.link().clone();
            let alive = component.alive.clone();
            spawn_local(async move {
                let outcome = submit_sequentially(candidates.clone(), |draft| {
                    let api = api.clone();
                    async move { api.create_student(&draft).await }
                })
                .await;
                for (index, e) in &outcome.failures {
                    let name = &candidates[*index].candidate_name;
                    error!(format!("Error adding record {} ({}): {}", index + 1, name, e));
                }
                let summary = outcome.summary();
                if alive.get() {
                    link.send_message(Msg::BulkFinished {
                        created: outcome.created,
                        summary,
                    });
                }
            });
            true
        }
        Msg::BulkFinished { created, summary } => {
            component.students.extend(created);
            component.bulk = BulkImport::default();
            alert(&summary);
            true
        }
    }
}
