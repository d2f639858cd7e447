use std::path::PathBuf;

use dioxus::prelude::*;
use store::{ClientConfig, FileSessionStore, Session};

const APP_DIR: &str = "notes-client";

fn main() {
    dioxus::launch(App);
}

fn app_dir(base: Option<PathBuf>) -> PathBuf {
    base.unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}

/// Config file first, then `NOTES_API_URL` on top.
fn load_config() -> ClientConfig {
    let path = app_dir(dirs::config_dir()).join(ClientConfig::filename());
    ClientConfig::load_or_default(&path).with_env_overrides()
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    let session = use_hook(|| {
        let dir = app_dir(dirs::data_dir());
        tracing::info!("Session token stored under {}", dir.display());
        Session::new(FileSessionStore::new(dir, config.session.token_key.clone()))
    });

    rsx! {
        ui::NotesApp { session: session, config: config }
    }
}
