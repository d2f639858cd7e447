//! # Browser `localStorage` session slot
//!
//! [`LocalStorageSessionStore`] is the [`SessionStore`] used on the web
//! platform. The token lives under a single fixed key (default `"token"`) in
//! the origin's `localStorage`, so it survives page reloads within the same
//! browser profile.
//!
//! The store only holds the key name; the `Storage` object is looked up on
//! every call because `web_sys` handles are not `Send`. When storage is
//! unavailable (private mode, sandboxed iframe) reads yield `None` and writes
//! are dropped with a warning.

use web_sys::Storage;

use crate::session::SessionStore;

/// `localStorage`-backed SessionStore for web platform.
#[derive(Clone, Debug)]
pub struct LocalStorageSessionStore {
    key: String,
}

impl LocalStorageSessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("localStorage unavailable: {:?}", e);
                None
            }
        }
    }
}

impl SessionStore for LocalStorageSessionStore {
    fn get(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok().flatten()
    }

    fn set(&self, token: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.set_item(&self.key, token) {
            tracing::warn!("Failed to persist session token: {:?}", e);
        }
    }

    fn clear(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(&self.key) {
            tracing::warn!("Failed to clear session token: {:?}", e);
        }
    }
}
