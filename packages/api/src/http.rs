//! # HTTP transport
//!
//! [`HttpBackend`] is the [`NotesApi`] implementation the apps use. It owns a
//! single `reqwest::Client`, a base URL fixed at construction, and the injected
//! [`Session`]. The token is read from the session on every request, so a
//! login or logout takes effect for the very next call without rebuilding
//! anything.

use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use store::Session;
use tracing::{debug, info, warn};

use crate::backend::NotesApi;
use crate::error::ApiError;
use crate::models::{Credentials, Note, NoteDraft, NoteId, TokenResponse};

/// `reqwest`-backed client for the notes API.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    session: Session,
}

impl HttpBackend {
    /// Create a client for `base_url` (e.g. `"http://localhost:8000"`).
    pub fn new(base_url: &str, session: Session) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder().build()?;

        info!("Created notes API client for {}", parsed);

        Ok(Self {
            client,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Start a request, attaching the bearer token when the session has one.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!("{} {}", method, url);

        let builder = self.client.request(method, url);
        match self.session.get() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send and turn any non-2xx status into [`ApiError::Status`].
    async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(|e| {
            warn!("Request to notes API failed: {}", e);
            ApiError::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().clone();
        let body = response.bytes().await.unwrap_or_default();
        let err = ApiError::from_status(status.as_u16(), &body);
        warn!("{} from {}", err, url);
        Err(err)
    }

    async fn json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl PartialEq for HttpBackend {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.session == other.session
    }
}

impl NotesApi for HttpBackend {
    async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        let response =
            Self::send(self.request(Method::POST, "/auth/login").json(credentials)).await?;
        Self::json(response).await
    }

    async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        Self::send(self.request(Method::POST, "/auth/register").json(credentials)).await?;
        Ok(())
    }

    async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        let response = Self::send(self.request(Method::GET, "/notes/")).await?;
        Self::json(response).await
    }

    async fn create_note(&self, draft: &NoteDraft) -> Result<Note, ApiError> {
        let response = Self::send(self.request(Method::POST, "/notes/").json(draft)).await?;
        Self::json(response).await
    }

    async fn update_note(&self, id: &NoteId, draft: &NoteDraft) -> Result<Note, ApiError> {
        let path = format!("/notes/{id}");
        let response = Self::send(self.request(Method::PUT, &path).json(draft)).await?;
        Self::json(response).await
    }

    async fn delete_note(&self, id: &NoteId) -> Result<(), ApiError> {
        let path = format!("/notes/{id}");
        Self::send(self.request(Method::DELETE, &path)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemorySessionStore;

    fn session() -> Session {
        Session::new(MemorySessionStore::new())
    }

    #[test]
    fn test_url_joining() {
        let api = HttpBackend::new("http://localhost:8000", session()).unwrap();
        assert_eq!(api.url("/notes/"), "http://localhost:8000/notes/");
        assert_eq!(api.url("notes/3"), "http://localhost:8000/notes/3");

        let api = HttpBackend::new("https://example.com/api/", session()).unwrap();
        assert_eq!(api.base_url(), "https://example.com/api");
        assert_eq!(api.url("/auth/login"), "https://example.com/api/auth/login");
    }

    #[test]
    fn test_rejects_unusable_base_url() {
        assert!(matches!(
            HttpBackend::new("not a url", session()),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            HttpBackend::new("mailto:someone@example.com", session()),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_equality_follows_session_slot() {
        let shared = session();
        let a = HttpBackend::new("http://localhost:8000", shared.clone()).unwrap();
        let b = HttpBackend::new("http://localhost:8000", shared).unwrap();
        let c = HttpBackend::new("http://localhost:8000", session()).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
