//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod app;
pub use app::NotesApp;

mod auth;
pub use auth::{use_api, use_repo, use_session, AuthProvider};

mod flash;
pub use flash::{use_flash, use_flash_notice, Flash};

pub mod gate;
pub use gate::{GateDecision, Location};

mod routes;
pub use routes::{AuthGate, Route};

mod sidebar;
pub use sidebar::Sidebar;

pub mod views;
