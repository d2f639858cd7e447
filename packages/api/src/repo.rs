//! # Notes repository: mutate, then refetch
//!
//! Views never patch their list locally. Every mutation goes to the server and
//! is followed by a full `GET /notes/`; the refreshed list is what the caller
//! gets back. If the mutation fails, no refetch happens and the error is
//! returned as is.
//!
//! | Method | Calls |
//! |--------|-------|
//! | [`list`](NotesRepository::list) | `GET /notes/` |
//! | [`create`](NotesRepository::create) | `POST /notes/`, then `GET /notes/` |
//! | [`update`](NotesRepository::update) | `PUT /notes/{id}`, then `GET /notes/` |
//! | [`save`](NotesRepository::save) | `update` when given an id, `create` otherwise |
//! | [`delete`](NotesRepository::delete) | `DELETE /notes/{id}`, then `GET /notes/` |

use tracing::info;

use crate::backend::NotesApi;
use crate::error::ApiError;
use crate::models::{Note, NoteDraft, NoteId};

/// Repository-style access to a user's notes over any [`NotesApi`].
#[derive(Clone, Debug, PartialEq)]
pub struct NotesRepository<A: NotesApi> {
    api: A,
}

impl<A: NotesApi> NotesRepository<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch the current list.
    pub async fn list(&self) -> Result<Vec<Note>, ApiError> {
        self.api.list_notes().await
    }

    pub async fn create(&self, draft: &NoteDraft) -> Result<Vec<Note>, ApiError> {
        let note = self.api.create_note(draft).await?;
        info!("Created note {}", note.id);
        self.list().await
    }

    pub async fn update(&self, id: &NoteId, draft: &NoteDraft) -> Result<Vec<Note>, ApiError> {
        self.api.update_note(id, draft).await?;
        info!("Updated note {}", id);
        self.list().await
    }

    /// Update the note `id` if given, otherwise create a new one.
    pub async fn save(
        &self,
        id: Option<&NoteId>,
        draft: &NoteDraft,
    ) -> Result<Vec<Note>, ApiError> {
        match id {
            Some(id) => self.update(id, draft).await,
            None => self.create(draft).await,
        }
    }

    pub async fn delete(&self, id: &NoteId) -> Result<Vec<Note>, ApiError> {
        self.api.delete_note(id).await?;
        info!("Deleted note {}", id);
        self.list().await
    }
}
