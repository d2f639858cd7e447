//! Error type for every API call.

use serde::Deserialize;
use thiserror::Error;

/// Failure of a request against the notes API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("request failed"))]
    Status { status: u16, detail: Option<String> },

    /// The request never got a response.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response whose body did not match the expected shape.
    #[error("Unexpected response body: {0}")]
    Decode(String),

    /// The configured base URL cannot be used.
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

/// `{"detail": ...}` error body. Only string details are shown to users;
/// validation errors carry a list and are ignored.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

impl ApiError {
    /// Build a [`ApiError::Status`] from a raw error body.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let detail = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.detail)
            .and_then(|detail| match detail {
                serde_json::Value::String(s) if !s.is_empty() => Some(s),
                _ => None,
            });
        Self::Status { status, detail }
    }

    /// Server-supplied detail message, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Message to show the user: the server detail, or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail() {
        let err = ApiError::from_status(400, br#"{"detail": "Invalid credentials"}"#);
        assert_eq!(err.detail(), Some("Invalid credentials"));
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
        assert_eq!(err.to_string(), "HTTP 400: Invalid credentials");
    }

    #[test]
    fn test_list_detail_uses_fallback() {
        let err = ApiError::from_status(
            422,
            br#"{"detail": [{"loc": ["body", "username"], "msg": "field required"}]}"#,
        );
        assert!(err.detail().is_none());
        assert_eq!(err.user_message("Registration failed"), "Registration failed");
    }

    #[test]
    fn test_non_json_body_uses_fallback() {
        let err = ApiError::from_status(502, b"<html>Bad Gateway</html>");
        assert!(err.detail().is_none());
        assert_eq!(err.user_message("Login failed"), "Login failed");
        assert_eq!(err.to_string(), "HTTP 502: request failed");
    }

    #[test]
    fn test_unauthorized() {
        assert!(ApiError::from_status(401, br#"{"detail": "Not authenticated"}"#).is_unauthorized());
        assert!(!ApiError::from_status(403, b"").is_unauthorized());
        assert!(!ApiError::Decode("x".into()).is_unauthorized());
    }
}
