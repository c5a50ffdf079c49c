//! Session token storage.
//!
//! Holds at most one bearer token. Presence of a token is the only
//! authentication signal the client checks; expiry is left to the backend.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::SessionError;

/// Key the token is persisted under.
pub const TOKEN_KEY: &str = "adminToken";

const SESSION_FILE: &str = "session.json";

pub trait SessionStore: Send + Sync {
    /// The resident token, or `None` if never set or cleared.
    fn get(&self) -> Option<String>;

    /// Store `token`, replacing any previous one.
    fn set(&self, token: &str) -> Result<(), SessionError>;

    fn clear(&self) -> Result<(), SessionError>;

    fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}

/// In-process store, used by tests and short-lived tools.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    fn set(&self, token: &str) -> Result<(), SessionError> {
        let mut guard = self
            .token
            .write()
            .map_err(|_| SessionError::Unavailable("session lock poisoned".to_string()))?;
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut guard = self
            .token
            .write()
            .map_err(|_| SessionError::Unavailable("session lock poisoned".to_string()))?;
        *guard = None;
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(rename = "adminToken", default, skip_serializing_if = "Option::is_none")]
    admin_token: Option<String>,
}

/// Store persisted as `session.json` in the client's config directory, so a
/// login survives across process runs.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under `dir/session.json`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(SESSION_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<SessionFile, SessionError> {
        if !self.path.exists() {
            return Ok(SessionFile::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let file: SessionFile = serde_json::from_str(&content)?;
        Ok(file)
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<String> {
        match self.load() {
            Ok(file) => file.admin_token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!("Ignoring unreadable session file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn set(&self, token: &str) -> Result<(), SessionError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let file = SessionFile {
            admin_token: Some(token.to_string()),
        };
        let content = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_set_then_clear() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get(), None);

        store.set("abc").unwrap();
        store.set("def").unwrap();
        assert_eq!(store.get().as_deref(), Some("def"));
        assert!(store.is_authenticated());

        store.clear().unwrap();
        assert_eq!(store.get(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn file_store_persists_single_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::in_dir(dir.path().join("nested"));

        store.set("abc").unwrap();
        let raw = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, serde_json::json!({ TOKEN_KEY: "abc" }));

        // A second handle on the same file sees the token
        let reopened = FileSessionStore::in_dir(dir.path().join("nested"));
        assert_eq!(reopened.get().as_deref(), Some("abc"));

        reopened.clear().unwrap();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn corrupt_file_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::in_dir(dir.path());
        fs::write(store.path(), "not json").unwrap();
        assert_eq!(store.get(), None);
    }
}
