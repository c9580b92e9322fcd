//! Sign-in form.
//!
//! Credentials are checked locally by `common::session::login`; a success
//! hands the new session to the app root, which navigates to the dashboard.

use common::session::login;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::app::SessionContext;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_context::<SessionContext>();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let show_password = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    let submit = {
        let (email, password, error) = (email.clone(), password.clone(), error.clone());
        let on_login = session.as_ref().map(|s| s.login.clone());
        Callback::from(move |_: ()| match login(&email, &password) {
            Ok(session) => {
                error.set(None);
                if let Some(on_login) = &on_login {
                    on_login.emit(session);
                }
            }
            Err(e) => error.set(Some(e.to_string())),
        })
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };
    let on_key = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                submit.emit(());
            }
        })
    };
    let on_click = submit.reform(|_: MouseEvent| ());
    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    html! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-title">{ "Admin Login" }</h1>
                <p class="login-subtitle">{ "Sign in to manage student and certificate records" }</p>

                if let Some(message) = &*error {
                    <div class="login-error">{ message.clone() }</div>
                }

                <label class="form-label" for="email">{ "Email" }</label>
                <input
                    id="email"
                    class="form-input"
                    type="email"
                    placeholder="admin@gmail.com"
                    value={(*email).clone()}
                    oninput={on_email}
                    onkeydown={on_key.clone()}
                />

                <label class="form-label" for="password">{ "Password" }</label>
                <div class="password-field">
                    <input
                        id="password"
                        class="form-input"
                        type={if *show_password { "text" } else { "password" }}
                        placeholder="Password"
                        value={(*password).clone()}
                        oninput={on_password}
                        onkeydown={on_key}
                    />
                    <button class="icon-btn" title="Show password" onclick={toggle_password}>
                        <i class="material-icons">{ if *show_password { "visibility_off" } else { "visibility" } }</i>
                    </button>
                </div>

                <button class="btn primary full-width" onclick={on_click}>{ "Sign In" }</button>
            </div>
        </div>
    }
}
