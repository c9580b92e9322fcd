//! "Upload CSV" button backed by a hidden file input.
//!
//! The button forwards clicks to the input; the chosen file is handed to the
//! parent untouched, which validates and reads it.

use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CsvUploadProps {
    pub on_file: Callback<web_sys::File>,
    #[prop_or_default]
    pub disabled: bool,
}

pub enum Msg {
    OpenFileDialog,
    FileSelected(Option<web_sys::File>),
}

pub struct CsvDataSourceComponent {
    file_input_ref: NodeRef,
}

impl Component for CsvDataSourceComponent {
    type Message = Msg;
    type Properties = CsvUploadProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            file_input_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::OpenFileDialog => {
                if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
                    input.click();
                }
            }
            Msg::FileSelected(Some(file)) => {
                ctx.props().on_file.emit(file);
                // allow picking the same file again
                if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
                    input.set_value("");
                }
            }
            Msg::FileSelected(None) => {}
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <>
                <input
                    type="file"
                    accept=".csv,text/csv"
                    style="display: none;"
                    ref={self.file_input_ref.clone()}
                    onchange={link.callback(|e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::FileSelected(input.files().and_then(|files| files.get(0)))
                    })}
                />
                <button
                    class="icon-btn"
                    title="Upload CSV file"
                    disabled={ctx.props().disabled}
                    onclick={link.callback(|_| Msg::OpenFileDialog)}
                >
                    <i class="material-icons">{"upload_file"}</i>
                    <span class="icon-label">{"Upload CSV"}</span>
                </button>
            </>
        }
    }
}
