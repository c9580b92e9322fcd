//! Bulk import dialog: paste or upload lines, pick a mode, submit all.

use common::import::{parse, ImportMode, FIELD_COUNT};
use common::model::student::StudentField;
use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::StudentsPage;
use crate::components::data_sources::csv::CsvDataSourceComponent;
use crate::components::modal::Modal;

const MODES: [ImportMode; 2] = [ImportMode::Delimited, ImportMode::Csv];

fn mode_value(mode: ImportMode) -> &'static str {
    match mode {
        ImportMode::Delimited => "text",
        ImportMode::Csv => "csv",
    }
}

fn field_order() -> String {
    StudentField::ALL
        .iter()
        .map(|f| f.key())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn bulk_modal(component: &StudentsPage, link: &Scope<StudentsPage>) -> Html {
    let bulk = &component.bulk;
    if !bulk.open {
        return html! {};
    }
    let ready = parse(&bulk.text, bulk.mode).len();

    let on_mode = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        if select.value() == mode_value(ImportMode::Csv) {
            Msg::SetBulkMode(ImportMode::Csv)
        } else {
            Msg::SetBulkMode(ImportMode::Delimited)
        }
    });
    let on_text = link.callback(|e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::SetBulkText(area.value())
    });

    let footer = html! {
        <>
            <span class="bulk-count">{ format!("{} valid records", ready) }</span>
            <button class="btn" disabled={bulk.submitting}
                    onclick={link.callback(|_| Msg::CloseBulk)}>{ "Cancel" }</button>
            <button class="btn primary" disabled={bulk.submitting}
                    onclick={link.callback(|_| Msg::SubmitBulk)}>
                { if bulk.submitting { "Adding..." } else { "Add All" } }
            </button>
        </>
    };

    html! {
        <Modal
            open={true}
            title={"Bulk Add Students".to_string()}
            subtitle={Some(format!("One record per line, {} comma-separated fields: {}", FIELD_COUNT, field_order()))}
            on_close={link.callback(|_| Msg::CloseBulk)}
            {footer}
        >
            <div class="bulk-controls">
                <select class="form-input" onchange={on_mode}>
                    { for MODES.iter().map(|&mode| html! {
                        <option value={mode_value(mode)} selected={mode == bulk.mode}>{ mode.label() }</option>
                    }) }
                </select>
                <CsvDataSourceComponent
                    on_file={link.callback(Msg::FileChosen)}
                    disabled={bulk.submitting}
                />
            </div>
            if bulk.mode == ImportMode::Csv {
                <p class="hint">{ "The first line is treated as a header and skipped." }</p>
            }
            <textarea
                class="form-input bulk-text"
                rows="12"
                placeholder="John Doe,S/O,Richard Doe,City College,B.Sc,First,450,500,2024-05-01,Lahore"
                value={bulk.text.clone()}
                oninput={on_text}
                disabled={bulk.submitting}
            />
        </Modal>
    }
}
