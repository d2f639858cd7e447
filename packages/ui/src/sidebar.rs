use api::auth;
use dioxus::prelude::*;

use crate::{use_session, Route};

/// Left-hand panel with the greeting and logout.
#[component]
pub fn Sidebar(username: Option<String>) -> Element {
    let session = use_session();
    let nav = use_navigator();
    let name = username.unwrap_or_default();

    let onclick = move |_| {
        auth::logout(&session);
        nav.replace(Route::Login {});
    };

    rsx! {
        div {
            class: "sidebar",
            div {
                h2 { class: "sidebar-title", "Notes App" }
                p {
                    class: "sidebar-greeting",
                    "Hello, "
                    span { class: "sidebar-user-name", "{name}" }
                    "!"
                }
                ul {
                    class: "sidebar-menu",
                    li {
                        button {
                            class: "sidebar-item",
                            onclick: onclick,
                            "Logout"
                        }
                    }
                }
            }
        }
    }
}
