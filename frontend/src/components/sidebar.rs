use common::session::Route;
use yew::prelude::*;

use crate::app::SessionContext;

fn icon(route: Route) -> &'static str {
    match route {
        Route::Dashboard => "dashboard",
        Route::Certificates => "verified",
        Route::Login => "login",
    }
}

/// Collapsible navigation menu with the logout action.
#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let collapsed = use_state(|| false);
    let Some(ctx) = use_context::<SessionContext>() else {
        return html! {};
    };

    let toggle = {
        let collapsed = collapsed.clone();
        Callback::from(move |_: MouseEvent| collapsed.set(!*collapsed))
    };
    let logout = ctx.logout.reform(|_: MouseEvent| ());

    let items = Route::MENU.iter().map(|&route| {
        let navigate = ctx.navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate.emit(route);
        });
        html! {
            <a
                href={route.path()}
                class={classes!("sidebar-link", (ctx.route == route).then_some("active"))}
                title={route.label()}
                {onclick}
            >
                <i class="material-icons">{ icon(route) }</i>
                if !*collapsed {
                    <span class="sidebar-label">{ route.label() }</span>
                }
            </a>
        }
    });

    html! {
        <aside class={classes!("sidebar", collapsed.then_some("collapsed"))}>
            <div class="sidebar-header">
                if !*collapsed {
                    <span class="sidebar-brand">{ "Admin Panel" }</span>
                }
                <button class="icon-btn" title="Toggle menu" onclick={toggle}>
                    <i class="material-icons">{ if *collapsed { "chevron_right" } else { "chevron_left" } }</i>
                </button>
            </div>
            <nav class="sidebar-nav">
                { for items }
            </nav>
            <div class="sidebar-footer">
                if let Some(session) = &ctx.session {
                    if !*collapsed {
                        <span class="sidebar-user">{ session.email.clone() }</span>
                    }
                }
                <button class="sidebar-link logout" title="Logout" onclick={logout}>
                    <i class="material-icons">{ "logout" }</i>
                    if !*collapsed {
                        <span class="sidebar-label">{ "Logout" }</span>
                    }
                </button>
            </div>
        </aside>
    }
}
