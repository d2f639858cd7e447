use api::{HttpBackend, Session};
use dioxus::prelude::*;
use store::ClientConfig;

use crate::{AuthProvider, Route, MAIN_CSS};

/// Root component mounted by each platform shell.
///
/// The shell decides where the session token lives and which API to talk to;
/// everything below shares those through context.
#[component]
pub fn NotesApp(session: Session, config: ClientConfig) -> Element {
    let backend = use_hook(|| {
        HttpBackend::new(&config.api.base_url, session.clone()).map_err(|e| {
            tracing::error!("Cannot create API client: {}", e);
            e.to_string()
        })
    });

    let body = match backend {
        Ok(api) => rsx! {
            AuthProvider {
                session: session.clone(),
                api: api,
                Router::<Route> {}
            }
        },
        Err(message) => rsx! {
            div {
                class: "auth-card",
                h2 { class: "auth-title", "Configuration error" }
                div { class: "banner banner-error", "{message}" }
            }
        },
    };

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        {body}
    }
}
