//! # Session slot: the single persisted access token
//!
//! The client keeps exactly one piece of durable state: the bearer token handed
//! out by `/auth/login`. [`SessionStore`] is the narrow interface over wherever
//! that token lives, and [`Session`] is the cloneable handle that gets injected
//! into the HTTP transport, the auth flows and the route guard.
//!
//! | Backend | Platform | Durable |
//! |---------|----------|---------|
//! | [`crate::MemorySessionStore`] | any | no |
//! | [`crate::FileSessionStore`] | native | yes, one file per key |
//! | [`crate::LocalStorageSessionStore`] | wasm + `web` | yes, browser `localStorage` |
//!
//! Absence of a token is a valid state, not an error, so none of the methods
//! return `Result`. Durable backends log failures and behave as if the slot
//! were empty.

use std::fmt;
use std::sync::Arc;

/// Storage for the session token.
pub trait SessionStore {
    /// The stored token, if any.
    fn get(&self) -> Option<String>;
    /// Replace the stored token.
    fn set(&self, token: &str);
    /// Remove the stored token. Clearing an empty slot is a no-op.
    fn clear(&self);
}

/// Shared handle to a [`SessionStore`].
///
/// Clones point at the same slot; two handles compare equal only when they do.
#[derive(Clone)]
pub struct Session {
    inner: Arc<dyn SessionStore + Send + Sync>,
}

impl Session {
    pub fn new(store: impl SessionStore + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(store),
        }
    }

    pub fn get(&self) -> Option<String> {
        self.inner.get()
    }

    pub fn set(&self, token: &str) {
        self.inner.set(token);
    }

    pub fn clear(&self) {
        self.inner.clear();
    }

    /// Whether a token is present. Validity and expiry are not checked.
    pub fn has_token(&self) -> bool {
        self.get().is_some()
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("has_token", &self.has_token())
            .finish()
    }
}
