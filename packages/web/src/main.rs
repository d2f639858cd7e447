use dioxus::prelude::*;
use store::{ClientConfig, Session};

/// Base URL baked in at build time, e.g. `NOTES_API_URL=https://notes.example.com dx build`.
const BUILD_API_URL: Option<&str> = option_env!("NOTES_API_URL");

fn main() {
    dioxus::launch(App);
}

fn session_slot(config: &ClientConfig) -> Session {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Session::new(store::LocalStorageSessionStore::new(
            config.session.token_key.clone(),
        ))
    }

    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        tracing::debug!(
            "No browser storage, keeping '{}' in memory",
            config.session.token_key
        );
        Session::new(store::MemorySessionStore::default())
    }
}

fn build_config() -> ClientConfig {
    match BUILD_API_URL {
        Some(url) if !url.trim().is_empty() => ClientConfig::default().with_base_url(url),
        _ => ClientConfig::default(),
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(build_config);
    let session = use_hook(|| session_slot(&config));

    rsx! {
        ui::NotesApp { session: session, config: config }
    }
}
