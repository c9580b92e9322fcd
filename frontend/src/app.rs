//! Root component: owns the session, the current route and the API client.
//!
//! The session lives here and nowhere else. Pages and the sidebar reach it
//! through [`SessionContext`]; every navigation goes through [`guard`], so a
//! protected route without a session always renders the login page and the
//! address bar is corrected to `/login`.

use common::config::ClientConfig;
use common::session::{guard, Route, Session};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{load_client_config, ApiClient};
use crate::components::sidebar::Sidebar;
use crate::pages::certificates::CertificatesPage;
use crate::pages::login::LoginPage;
use crate::pages::students::StudentsPage;

#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub session: Option<Session>,
    pub route: Route,
    pub login: Callback<Session>,
    pub logout: Callback<()>,
    pub navigate: Callback<Route>,
}

pub enum Msg {
    Navigate(Route),
    LocationChanged,
    LoggedIn(Session),
    LoggedOut,
    ConfigLoaded(ClientConfig),
}

pub struct App {
    session: Option<Session>,
    route: Route,
    api: ApiClient,
    popstate: Option<Closure<dyn Fn()>>,
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

fn set_path(path: &str, replace: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if current_path() == path {
        return;
    }
    let result = if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    };
    result.ok();
}

impl App {
    /// Applies the guard to `requested` and records the result.
    ///
    /// A redirect replaces the history entry instead of adding one, so "back"
    /// does not bounce into the guard again.
    fn go(&mut self, requested: Route, push: bool) {
        let resolved = guard(requested, self.session.as_ref());
        set_path(resolved.path(), !push || resolved != requested);
        self.route = resolved;
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::ConfigLoaded(load_client_config().await));
        });

        let link = ctx.link().clone();
        let popstate = Closure::<dyn Fn()>::new(move || link.send_message(Msg::LocationChanged));
        let registered = web_sys::window()
            .map(|w| {
                w.add_event_listener_with_callback("popstate", popstate.as_ref().unchecked_ref())
                    .is_ok()
            })
            .unwrap_or(false);

        let mut app = Self {
            session: None,
            route: Route::Login,
            api: ApiClient::new(ClientConfig::default()),
            popstate: registered.then_some(popstate),
        };
        app.go(Route::from_path(&current_path()), false);
        app
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(route) => {
                self.go(route, true);
                true
            }
            Msg::LocationChanged => {
                self.go(Route::from_path(&current_path()), false);
                true
            }
            Msg::LoggedIn(session) => {
                self.session = Some(session);
                self.go(Route::Dashboard, true);
                true
            }
            Msg::LoggedOut => {
                self.session = None;
                self.go(Route::Login, true);
                true
            }
            Msg::ConfigLoaded(config) => {
                let api = ApiClient::new(config);
                if api == self.api {
                    return false;
                }
                self.api = api;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let context = SessionContext {
            session: self.session.clone(),
            route: self.route,
            login: link.callback(Msg::LoggedIn),
            logout: link.callback(|_| Msg::LoggedOut),
            navigate: link.callback(Msg::Navigate),
        };

        let page = match self.route {
            Route::Login => html! { <LoginPage /> },
            Route::Dashboard => html! { <StudentsPage api={self.api.clone()} /> },
            Route::Certificates => html! { <CertificatesPage api={self.api.clone()} /> },
        };

        html! {
            <ContextProvider<SessionContext> context={context}>
                <div class="app-layout">
                    {
                        if self.route.is_protected() {
                            html! { <Sidebar /> }
                        } else {
                            html! {}
                        }
                    }
                    <main class="app-content">
                        { page }
                    </main>
                </div>
            </ContextProvider<SessionContext>>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(window), Some(popstate)) = (web_sys::window(), self.popstate.take()) {
            window
                .remove_event_listener_with_callback("popstate", popstate.as_ref().unchecked_ref())
                .ok();
        }
    }
}
