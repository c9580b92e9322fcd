use yew::{html, Callback, Component, Context, Html, MouseEvent, Properties};

/// Centered dialog over a dimmed backdrop.
///
/// Open/closed is owned by the parent through `open`; clicking the backdrop
/// or the close button emits `on_close`.
pub struct Modal;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub title: String,
    #[prop_or_default]
    pub subtitle: Option<String>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
    #[prop_or_default]
    pub footer: Html,
}

impl Component for Modal {
    type Message = ();
    type Properties = ModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }

        let on_backdrop = {
            let on_close = props.on_close.clone();
            Callback::from(move |_: MouseEvent| on_close.emit(()))
        };
        let on_close_button = on_backdrop.clone();
        // clicks inside the panel must not reach the backdrop
        let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

        html! {
            <div class="modal-backdrop" onclick={on_backdrop}>
                <div class="modal-panel" onclick={stop}>
                    <div class="modal-header">
                        <div>
                            <h2 class="modal-title">{ props.title.clone() }</h2>
                            {
                                match &props.subtitle {
                                    Some(subtitle) => html! { <p class="modal-subtitle">{ subtitle.clone() }</p> },
                                    None => html! {},
                                }
                            }
                        </div>
                        <button class="modal-close" title="Close" onclick={on_close_button}>{ "✕" }</button>
                    </div>
                    <div class="modal-body">
                        { props.children.clone() }
                    </div>
                    <div class="modal-footer">
                        { props.footer.clone() }
                    </div>
                </div>
            </div>
        }
    }
}
