//! Registration page view with username/password form.

use api::{auth, Credentials};
use dioxus::prelude::*;

use crate::{use_api, use_flash, Flash, Route};

const REGISTERED: &str = "Registration successful! Please login.";

/// Register page component.
#[component]
pub fn RegisterView() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let mut flash = use_flash();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let api = api.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let credentials = Credentials::new(username(), password());
            match auth::register(&api, &credentials).await {
                Ok(()) => {
                    flash.set(Some(Flash(REGISTERED.to_string())));
                    nav.push(Route::Login {});
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.user_message(auth::REGISTRATION_FAILED)));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-card",

            h2 { class: "auth-title", "Register" }

            if let Some(err) = error() {
                div { class: "banner banner-error", "{err}" }
            }

            form {
                class: "auth-form",
                onsubmit: handle_register,

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
                    class: "btn btn-success",
                    disabled: loading(),
                    if loading() { "Registering..." } else { "Register" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Login here" }
            }
        }
    }
}
