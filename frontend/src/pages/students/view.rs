use common::analytics::GradeTier;
use common::model::form::STUDENT_FORM;
use common::model::student::{Student, StudentField};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::bulk::bulk_modal;
use super::messages::Msg;
use super::state::StudentsPage;
use crate::components::form_builder::form_builder;
use crate::components::modal::Modal;
use crate::helpers::format_count;

pub fn view(component: &StudentsPage, ctx: &Context<StudentsPage>) -> Html {
    let link = ctx.link();
    html! {
        <div class="page students-page">
            { build_header(component, link) }
            { build_toolbar(component, link) }
            { build_table(component, link) }
            { build_editor(component, link) }
            { bulk_modal(component, link) }
        </div>
    }
}

fn build_header(component: &StudentsPage, link: &Scope<StudentsPage>) -> Html {
    html! {
        <div class="page-header">
            <div>
                <h1>{ "Student Records" }</h1>
                <p class="page-subtitle">
                    { format!("{} records", format_count(component.students.len())) }
                </p>
            </div>
            <div class="page-actions">
                <button class="btn" disabled={component.refreshing}
                        onclick={link.callback(|_| Msg::Fetch { refresh: true })}>
                    <i class="material-icons">{ "refresh" }</i>
                    { if component.refreshing { "Refreshing..." } else { "Refresh" } }
                </button>
                <button class="btn" onclick={link.callback(|_| Msg::OpenBulk)}>
                    <i class="material-icons">{ "playlist_add" }</i>
                    { "Bulk Add" }
                </button>
                <button class="btn primary" onclick={link.callback(|_| Msg::OpenAdd)}>
                    <i class="material-icons">{ "person_add" }</i>
                    { "Add Student" }
                </button>
            </div>
        </div>
    }
}

fn build_toolbar(component: &StudentsPage, link: &Scope<StudentsPage>) -> Html {
    html! {
        <div class="toolbar">
            <div class="search-box">
                <i class="material-icons">{ "search" }</i>
                <input
                    class="form-input"
                    type="text"
                    placeholder="Search by name, course or institute..."
                    value={component.search.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetSearch(input.value())
                    })}
                />
            </div>
        </div>
    }
}

fn tier_class(tier: GradeTier) -> &'static str {
    match tier {
        GradeTier::Excellent => "grade-excellent",
        GradeTier::Good => "grade-good",
        GradeTier::Fair => "grade-fair",
        GradeTier::Poor => "grade-poor",
    }
}

fn build_table(component: &StudentsPage, link: &Scope<StudentsPage>) -> Html {
    if component.loading {
        return html! { <div class="loading">{ "Loading records..." }</div> };
    }
    let rows = component.visible();
    if rows.is_empty() {
        return html! { <div class="empty-state">{ "No students found" }</div> };
    }

    html! {
        <div class="table-wrapper">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{ "Candidate" }</th>
                        <th>{ "Parent" }</th>
                        <th>{ "Institute" }</th>
                        <th>{ "Course" }</th>
                        <th>{ "Division" }</th>
                        <th>{ "Marks" }</th>
                        <th>{ "Percentage" }</th>
                        <th>{ "Date" }</th>
                        <th>{ "Place" }</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for rows.into_iter().map(|s| build_row(s, link)) }
                </tbody>
            </table>
        </div>
    }
}

fn build_row(student: &Student, link: &Scope<StudentsPage>) -> Html {
    let f = &student.fields;
    let percentage = student.percentage();
    let bar = percentage.clamp(0, 100);
    let actions = match student.id() {
        Some(id) => {
            let (edit_id, delete_id) = (id.to_string(), id.to_string());
            html! {
                <div class="row-actions">
                    <button class="icon-btn" title="Edit"
                            onclick={link.callback(move |_| Msg::OpenEdit(edit_id.clone()))}>
                        <i class="material-icons">{ "edit" }</i>
                    </button>
                    <button class="icon-btn danger" title="Delete"
                            onclick={link.callback(move |_| Msg::Delete(delete_id.clone()))}>
                        <i class="material-icons">{ "delete" }</i>
                    </button>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <tr>
            <td class="strong">{ f.candidate_name.clone() }</td>
            <td>{ format!("{} {}", f.relation, f.parent_name).trim().to_string() }</td>
            <td>{ f.institute.clone() }</td>
            <td>{ f.course.clone() }</td>
            <td>{ f.division.clone() }</td>
            <td>{ format!("{} / {}", f.marks_obtained, f.marks_total) }</td>
            <td>
                <span class={classes!("badge", tier_class(GradeTier::of(percentage)))}>
                    { format!("{}%", percentage) }
                </span>
                <div class="progress">
                    <div class="progress-bar" style={format!("width: {}%", bar)}></div>
                </div>
            </td>
            <td>{ f.date.clone() }</td>
            <td>{ f.place.clone() }</td>
            <td>{ actions }</td>
        </tr>
    }
}

fn build_editor(component: &StudentsPage, link: &Scope<StudentsPage>) -> Html {
    let Some(editor) = &component.editor else {
        return html! {};
    };
    let (title, action) = if editor.is_edit() {
        ("Edit Student", "Update")
    } else {
        ("Add Student", "Save")
    };
    let on_change = link.callback(|(field, value): (StudentField, String)| Msg::EditField(field, value));
    let footer = html! {
        <>
            <button class="btn" disabled={component.saving}
                    onclick={link.callback(|_| Msg::CloseEditor)}>{ "Cancel" }</button>
            <button class="btn primary" disabled={component.saving}
                    onclick={link.callback(|_| Msg::Save)}>
                { if component.saving { "Saving..." } else { action } }
            </button>
        </>
    };

    html! {
        <Modal
            open={true}
            title={title.to_string()}
            subtitle={Some("Fields marked * are required".to_string())}
            on_close={link.callback(|_| Msg::CloseEditor)}
            {footer}
        >
            { form_builder(&STUDENT_FORM, &editor.draft, &on_change) }
        </Modal>
    }
}
