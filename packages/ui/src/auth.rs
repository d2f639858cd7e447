//! Authentication context and hooks for the UI.
//!
//! The session slot and the HTTP client are created once by the platform
//! shell and handed down through context; nothing reaches for a global.

use api::{HttpBackend, NotesRepository, Session};
use dioxus::prelude::*;

use crate::flash::Flash;

/// The current session handle.
pub fn use_session() -> Session {
    use_context::<Session>()
}

/// The API client. Its requests carry the token from [`use_session`].
pub fn use_api() -> HttpBackend {
    use_context::<HttpBackend>()
}

/// Repository over [`use_api`].
pub fn use_repo() -> NotesRepository<HttpBackend> {
    NotesRepository::new(use_api())
}

/// Provider component that makes the session and API client available.
/// Wrap the router with this component.
#[component]
pub fn AuthProvider(session: Session, api: HttpBackend, children: Element) -> Element {
    use_context_provider(|| session.clone());
    use_context_provider(|| api.clone());
    use_context_provider(|| Signal::new(Option::<Flash>::None));

    rsx! {
        {children}
    }
}
