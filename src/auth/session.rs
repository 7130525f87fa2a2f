//! Durable session token storage. A single slot holds the most recent token
//! as an opaque string; it is overwritten unconditionally on every
//! successful login, last writer wins. Nothing in the login flow reads it
//! back, it exists for later runs.

use crate::auth::error::AuthError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::debug;

pub trait SessionStore: Send + Sync {
    /// Persist the token, replacing any previous one.
    fn save(&self, token: &str) -> Result<(), AuthError>;

    /// Read back the persisted token, `None` when no session was saved yet.
    fn load(&self) -> Result<Option<String>, AuthError>;
}

/// File-backed store, the page-reload-surviving slot of the front end.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, token: &str) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, token)?;
        debug!(path = %self.path.display(), "session token saved");
        Ok(())
    }

    fn load(&self) -> Result<Option<String>, AuthError> {
        match fs::read_to_string(&self.path) {
            Ok(token) => Ok(Some(token)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory store backing tests and embedders with no filesystem.
#[derive(Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<String>>,
}

impl SessionStore for MemorySessionStore {
    fn save(&self, token: &str) -> Result<(), AuthError> {
        *self.slot.lock().expect("session slot poisoned") = Some(token.to_string());
        Ok(())
    }

    fn load(&self) -> Result<Option<String>, AuthError> {
        Ok(self.slot.lock().expect("session slot poisoned").clone())
    }
}
