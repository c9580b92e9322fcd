//! Students dashboard: searchable table with add, edit, delete and bulk import.
//!
//! The `Component` implementation only wires lifecycle hooks; behaviour lives
//! in `update` and markup in `view`.

use yew::prelude::*;

mod bulk;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::StudentsProps;
pub use state::StudentsPage;

impl Component for StudentsPage {
    type Message = Msg;
    type Properties = StudentsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        StudentsPage::new()
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
