//! # Filesystem-backed session slot
//!
//! [`FileSessionStore`] keeps the token in a single file, `<base_dir>/<key>`,
//! so a desktop session survives restarts the same way a browser session
//! survives reloads. Use [`dirs::data_dir()`] (or similar) to pick `base_dir`.
//!
//! I/O failures are logged and otherwise ignored: a slot that cannot be read
//! is an empty slot.

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::session::SessionStore;

/// Filesystem-backed SessionStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileSessionStore {
    base: PathBuf,
    key: String,
}

impl FileSessionStore {
    pub fn new(base: PathBuf, key: impl Into<String>) -> Self {
        Self {
            base,
            key: key.into(),
        }
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(&self.key)
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<String> {
        match std::fs::read_to_string(self.token_path()) {
            Ok(content) => {
                let token = content.trim();
                (!token.is_empty()).then(|| token.to_string())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read session file: {}", e);
                None
            }
        }
    }

    fn set(&self, token: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create session directory: {}", e);
            return;
        }
        if let Err(e) = std::fs::write(self.token_path(), token) {
            tracing::warn!("Failed to write session file: {}", e);
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(self.token_path()) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove session file: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let session = Session::new(FileSessionStore::new(dir.path().to_path_buf(), "token"));
        session.set("abc.eyJzdWIiOiJhbGljZSJ9.sig");

        // Re-open from the same directory
        let reopened = Session::new(FileSessionStore::new(dir.path().to_path_buf(), "token"));
        assert_eq!(
            reopened.get().as_deref(),
            Some("abc.eyJzdWIiOiJhbGljZSJ9.sig")
        );

        reopened.clear();
        assert!(session.get().is_none());
        assert!(!dir.path().join("token").exists());
    }

    #[test]
    fn test_missing_directory_is_created_on_set() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("notes-client").join("session");

        let store = FileSessionStore::new(nested.clone(), "token");
        assert!(store.get().is_none());

        store.set("t");
        assert_eq!(store.get().as_deref(), Some("t"));
        assert!(nested.join("token").exists());
    }

    #[test]
    fn test_blank_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("token"), "  \n").unwrap();

        let store = FileSessionStore::new(dir.path().to_path_buf(), "token");
        assert!(store.get().is_none());
    }

    #[test]
    fn test_clear_without_file_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().to_path_buf(), "token");
        store.clear();
        assert!(store.get().is_none());
    }
}
