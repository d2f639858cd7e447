//! The seam between flows/views and whatever answers the API.

use std::future::Future;

use crate::error::ApiError;
use crate::models::{Credentials, Note, NoteDraft, NoteId, TokenResponse};

/// One async method per endpoint of the notes API.
///
/// Implementations decide how the session token reaches the server; callers
/// never pass it explicitly.
pub trait NotesApi {
    /// `POST /auth/login`
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<TokenResponse, ApiError>>;
    /// `POST /auth/register`
    fn register(&self, credentials: &Credentials) -> impl Future<Output = Result<(), ApiError>>;
    /// `GET /notes/`
    fn list_notes(&self) -> impl Future<Output = Result<Vec<Note>, ApiError>>;
    /// `POST /notes/`
    fn create_note(&self, draft: &NoteDraft) -> impl Future<Output = Result<Note, ApiError>>;
    /// `PUT /notes/{id}`
    fn update_note(
        &self,
        id: &NoteId,
        draft: &NoteDraft,
    ) -> impl Future<Output = Result<Note, ApiError>>;
    /// `DELETE /notes/{id}`
    fn delete_note(&self, id: &NoteId) -> impl Future<Output = Result<(), ApiError>>;
}
