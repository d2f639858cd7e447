//! # API crate: client side of the notes REST API
//!
//! Everything the UI needs to talk to the backend, with no UI in it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Wire types: [`Note`], [`NoteDraft`], [`Credentials`], [`TokenResponse`] |
//! | [`error`] | [`ApiError`] and the user-facing message fallback |
//! | [`token`] | Best-effort extraction of the display name from a bearer token |
//! | [`backend`] | The [`NotesApi`] trait: one async method per endpoint |
//! | [`http`] | [`HttpBackend`], the `reqwest` transport that attaches the session token |
//! | [`memory`] | [`MemoryBackend`], an in-process stand-in for the server |
//! | [`repo`] | [`NotesRepository`], mutations that hand back the refetched list |
//! | [`auth`] | Login / register / logout flows over a [`store::Session`] |
//!
//! ## Endpoints
//!
//! | Method | Path | Body | Success |
//! |--------|------|------|---------|
//! | `POST` | `/auth/login` | `{username, password}` | `{access_token, token_type}` |
//! | `POST` | `/auth/register` | `{username, password}` | ignored |
//! | `GET` | `/notes/` | - | `[{id, title, content}]` |
//! | `POST` | `/notes/` | `{title, content}` | created note |
//! | `PUT` | `/notes/{id}` | `{title, content}` | updated note |
//! | `DELETE` | `/notes/{id}` | - | ignored |

pub mod auth;
pub mod backend;
pub mod error;
pub mod http;
pub mod memory;
pub mod models;
pub mod repo;
pub mod token;

pub use backend::NotesApi;
pub use error::ApiError;
pub use http::HttpBackend;
pub use memory::MemoryBackend;
pub use models::{Credentials, Note, NoteDraft, NoteId, TokenResponse};
pub use repo::NotesRepository;

pub use store::Session;
