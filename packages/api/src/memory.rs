//! # In-process notes API
//!
//! [`MemoryBackend`] answers the same calls as the real server with the same
//! status codes and `detail` messages, keeping users and notes in memory. It
//! reads the bearer token from a shared [`Session`] the way the server reads
//! the `Authorization` header, which lets the auth flows, the repository and
//! the views be exercised end to end without a network.
//!
//! Tokens it issues are unsigned three-segment strings whose payload is
//! `{"sub": "<username>"}`, so [`crate::token::display_name`] reads them like
//! real ones.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::json;
use store::Session;

use crate::backend::NotesApi;
use crate::error::ApiError;
use crate::models::{Credentials, Note, NoteDraft, NoteId, TokenResponse};
use crate::token;

const SIGNATURE: &str = "memory";

#[derive(Debug)]
struct StoredNote {
    note: Note,
    owner: String,
}

#[derive(Debug, Default)]
struct State {
    users: HashMap<String, String>,
    notes: BTreeMap<u64, StoredNote>,
    next_id: u64,
}

/// In-memory NotesApi for tests.
#[derive(Clone, Debug)]
pub struct MemoryBackend {
    state: Arc<Mutex<State>>,
    session: Session,
}

fn status(status: u16, detail: &str) -> ApiError {
    ApiError::Status {
        status,
        detail: Some(detail.to_string()),
    }
}

impl MemoryBackend {
    pub fn new(session: Session) -> Self {
        Self {
            state: Arc::default(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mint a token the way the server does: `{"sub": username}` as payload.
    pub fn issue_token(username: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(json!({"alg": "none", "typ": "JWT"}).to_string());
        let payload = URL_SAFE_NO_PAD.encode(json!({"sub": username}).to_string());
        format!("{header}.{payload}.{SIGNATURE}")
    }

    /// Resolve the session token to a registered user.
    fn current_user(&self) -> Result<String, ApiError> {
        let token = self
            .session
            .get()
            .ok_or_else(|| status(401, "Not authenticated"))?;
        if !token.ends_with(SIGNATURE) {
            return Err(status(401, "Invalid token"));
        }
        let username = token::display_name(&token).ok_or_else(|| status(401, "Invalid token"))?;
        if !self.state().users.contains_key(&username) {
            return Err(status(401, "Invalid token"));
        }
        Ok(username)
    }

    fn parse_id(id: &NoteId) -> Result<u64, ApiError> {
        id.as_str()
            .parse()
            .map_err(|_| status(404, "Note not found"))
    }
}

impl NotesApi for MemoryBackend {
    async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        let state = self.state();
        match state.users.get(&credentials.username) {
            Some(password) if *password == credentials.password => Ok(TokenResponse {
                access_token: Self::issue_token(&credentials.username),
                token_type: "bearer".to_string(),
            }),
            _ => Err(status(400, "Invalid credentials")),
        }
    }

    async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let mut state = self.state();
        if state.users.contains_key(&credentials.username) {
            return Err(status(400, "User already exists"));
        }
        state
            .users
            .insert(credentials.username.clone(), credentials.password.clone());
        Ok(())
    }

    async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        let owner = self.current_user()?;
        Ok(self
            .state()
            .notes
            .values()
            .filter(|stored| stored.owner == owner)
            .map(|stored| stored.note.clone())
            .collect())
    }

    async fn create_note(&self, draft: &NoteDraft) -> Result<Note, ApiError> {
        let owner = self.current_user()?;
        let mut state = self.state();
        state.next_id += 1;
        let id = state.next_id;
        let note = Note {
            id: NoteId::from(id),
            title: draft.title.clone(),
            content: draft.content.clone(),
        };
        state.notes.insert(
            id,
            StoredNote {
                note: note.clone(),
                owner,
            },
        );
        Ok(note)
    }

    async fn update_note(&self, id: &NoteId, draft: &NoteDraft) -> Result<Note, ApiError> {
        let owner = self.current_user()?;
        let key = Self::parse_id(id)?;
        let mut state = self.state();
        let stored = state
            .notes
            .get_mut(&key)
            .ok_or_else(|| status(404, "Note not found"))?;
        if stored.owner != owner {
            return Err(status(403, "Not authorized to update this note"));
        }
        stored.note.title = draft.title.clone();
        stored.note.content = draft.content.clone();
        Ok(stored.note.clone())
    }

    async fn delete_note(&self, id: &NoteId) -> Result<(), ApiError> {
        let owner = self.current_user()?;
        let key = Self::parse_id(id)?;
        let mut state = self.state();
        let stored = state
            .notes
            .get(&key)
            .ok_or_else(|| status(404, "Note not found"))?;
        if stored.owner != owner {
            return Err(status(403, "Not authorized to delete this note"));
        }
        state.notes.remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemorySessionStore;

    fn backend() -> MemoryBackend {
        MemoryBackend::new(Session::new(MemorySessionStore::new()))
    }

    async fn signed_in(api: &MemoryBackend, username: &str) {
        let credentials = Credentials::new(username, "pw");
        api.register(&credentials).await.unwrap();
        let token = api.login(&credentials).await.unwrap();
        api.session().set(&token.access_token);
    }

    #[tokio::test]
    async fn test_issued_token_carries_username() {
        let token = MemoryBackend::issue_token("alice");
        assert_eq!(token.split('.').count(), 3);
        assert_eq!(token::display_name(&token).as_deref(), Some("alice"));
    }

    #[tokio::test]
    async fn test_register_and_login_errors() {
        let api = backend();
        let credentials = Credentials::new("alice", "secret");

        api.register(&credentials).await.unwrap();
        let err = api.register(&credentials).await.unwrap_err();
        assert_eq!(err.detail(), Some("User already exists"));

        let err = api
            .login(&Credentials::new("alice", "wrong"))
            .await
            .unwrap_err();
        assert_eq!(err.detail(), Some("Invalid credentials"));

        let err = api
            .login(&Credentials::new("nobody", "secret"))
            .await
            .unwrap_err();
        assert_eq!(err.detail(), Some("Invalid credentials"));
    }

    #[tokio::test]
    async fn test_notes_require_token() {
        let api = backend();
        let err = api.list_notes().await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.detail(), Some("Not authenticated"));

        api.session().set("garbage");
        let err = api.list_notes().await.unwrap_err();
        assert_eq!(err.detail(), Some("Invalid token"));

        // Well-formed token for a user that never registered
        api.session().set(&MemoryBackend::issue_token("ghost"));
        assert!(api.list_notes().await.unwrap_err().is_unauthorized());
    }

    #[tokio::test]
    async fn test_notes_are_scoped_by_owner() {
        let api = backend();
        signed_in(&api, "alice").await;
        let alice_note = api
            .create_note(&NoteDraft::new("Groceries", "milk, eggs"))
            .await
            .unwrap();

        signed_in(&api, "bob").await;
        assert!(api.list_notes().await.unwrap().is_empty());

        let err = api
            .update_note(&alice_note.id, &NoteDraft::new("mine", ""))
            .await
            .unwrap_err();
        assert_eq!(err.detail(), Some("Not authorized to update this note"));

        let err = api.delete_note(&alice_note.id).await.unwrap_err();
        assert_eq!(err.detail(), Some("Not authorized to delete this note"));

        let err = api.delete_note(&NoteId::new("999")).await.unwrap_err();
        assert_eq!(err.detail(), Some("Note not found"));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let api = backend();
        signed_in(&api, "alice").await;

        let first = api.create_note(&NoteDraft::new("one", "")).await.unwrap();
        api.delete_note(&first.id).await.unwrap();
        let second = api.create_note(&NoteDraft::new("two", "")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(api.list_notes().await.unwrap(), vec![second]);
    }
}
