//! Certificate verification dashboard: summary cards, filters, charts, a card
//! or table listing of the filtered records and CSV export.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CertificatesProps;
pub use state::CertificatesPage;

impl Component for CertificatesPage {
    type Message = Msg;
    type Properties = CertificatesProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CertificatesPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().api != old_props.api {
            ctx.link().send_message(Msg::Fetch { refresh: false });
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Fetch { refresh: false });
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.alive.set(false);
    }
}
