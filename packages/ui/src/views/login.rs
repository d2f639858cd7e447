//! Login page view with username/password form.

use api::{auth, Credentials};
use dioxus::prelude::*;

use crate::{use_api, use_flash_notice, use_session, Flash, Route};

/// Login page component.
#[component]
pub fn LoginView() -> Element {
    let api = use_api();
    let session = use_session();
    let nav = use_navigator();
    let notice = use_flash_notice();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let api = api.clone();
        let session = session.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let credentials = Credentials::new(username(), password());
            match auth::login(&api, &session, &credentials).await {
                Ok(()) => {
                    nav.push(Route::Notes {});
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.user_message(auth::LOGIN_FAILED)));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-card",

            h2 { class: "auth-title", "Login" }

            if let Some(Flash(message)) = notice.clone() {
                div { class: "banner banner-success", "{message}" }
            }

            if let Some(err) = error() {
                div { class: "banner banner-error", "{err}" }
            }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                input {
                    r#type: "text",
                    placeholder: "Username",
                    required: true,
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    required: true,
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: loading(),
                    if loading() { "Logging in..." } else { "Login" }
                }
            }

            p {
                class: "auth-switch",
                "Don't have an account? "
                Link { to: Route::Register {}, "Register here" }
            }
        }
    }
}
