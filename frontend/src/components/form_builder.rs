//! Generic form rendering over the static field-descriptor table.

use common::model::form::FieldDescriptor;
use common::model::student::{StudentDraft, StudentField};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Renders one labelled input per descriptor, bound to `draft`.
///
/// Every edit is reported as `(field, new value)`; the caller owns the draft.
pub fn form_builder(
    descriptors: &[FieldDescriptor],
    draft: &StudentDraft,
    on_change: &Callback<(StudentField, String)>,
) -> Html {
    html! {
        <div class="form-grid">
            { for descriptors.iter().map(|d| field_input(d, draft, on_change)) }
        </div>
    }
}

fn field_input(
    descriptor: &FieldDescriptor,
    draft: &StudentDraft,
    on_change: &Callback<(StudentField, String)>,
) -> Html {
    let field = descriptor.field;
    let oninput = on_change.reform(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        (field, input.value())
    });

    html! {
        <div class={classes!("form-field", descriptor.full_width().then_some("full-width"))}>
            <label class="form-label">
                { descriptor.label }
                {
                    if descriptor.required {
                        html! { <span class="required">{ " *" }</span> }
                    } else {
                        html! {}
                    }
                }
            </label>
            <input
                class="form-input"
                name={field.key()}
                type={descriptor.kind.html_type()}
                value={field.get(draft).to_string()}
                placeholder={descriptor.placeholder()}
                {oninput}
            />
        </div>
    }
}
