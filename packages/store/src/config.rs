//! # Client configuration (`notes-client.toml`)
//!
//! Where the API lives and which key the session token is stored under.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"
//!
//! [session]
//! token_key = "token"
//! ```
//!
//! Every field has a default, so a missing or empty file is equivalent to
//! [`ClientConfig::default`]. Desktop reads the file from the platform config
//! directory and honours a `NOTES_API_URL` override; web bakes the URL in at
//! compile time.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Environment variable that overrides [`ApiConfig::base_url`].
pub const API_URL_ENV: &str = "NOTES_API_URL";

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Remote API settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base address every request path is joined onto.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Session slot settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Key (or file name) the access token is persisted under.
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_token_key() -> String {
    "token".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
        }
    }
}

impl ClientConfig {
    /// Builder method to set the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Apply `NOTES_API_URL` from the process environment, if set and non-empty.
    pub fn with_env_overrides(self) -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => self.with_base_url(url.trim()),
            _ => self,
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "notes-client.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read the config at `path`, falling back to defaults.
    ///
    /// A missing file is not worth a warning; an unreadable or malformed one is.
    pub fn load_or_default(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match Self::from_toml(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Invalid config in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.session.token_key, "token");
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(ClientConfig::from_toml("").unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "https://notes.example.com/api"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://notes.example.com/api");
        assert_eq!(config.session.token_key, "token");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::default().with_base_url("http://10.0.0.2:9000");
        let text = config.to_toml().unwrap();
        assert!(text.contains("base_url = \"http://10.0.0.2:9000\""));
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_load_or_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(ClientConfig::filename());

        // Missing file
        assert_eq!(ClientConfig::load_or_default(&path), ClientConfig::default());

        // Malformed file
        std::fs::write(&path, "[api\nbase_url = ").unwrap();
        assert_eq!(ClientConfig::load_or_default(&path), ClientConfig::default());

        // Valid file
        std::fs::write(&path, "[session]\ntoken_key = \"notes-token\"\n").unwrap();
        let config = ClientConfig::load_or_default(&path);
        assert_eq!(config.session.token_key, "notes-token");
        assert_eq!(config.api.base_url, "http://localhost:8000");
    }
}
