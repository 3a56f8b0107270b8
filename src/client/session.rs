//! Client-held session. Two string keys, `username` and `token`, live in a
//! [`SessionStore`]; the session counts as authenticated as soon as the
//! `username` key exists. Nothing here is re-validated by the server.

use crate::{client::error::ClientError, identity::LoginResponse};
use std::{
    collections::BTreeMap,
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use tracing::debug;

pub const USERNAME_KEY: &str = "username";
pub const TOKEN_KEY: &str = "token";

/// String key/value storage that outlives a single command.
pub trait SessionStore {
    /// # Errors
    /// Returns [`ClientError::Storage`] if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, ClientError>;

    /// # Errors
    /// Returns [`ClientError::Storage`] if the backing store cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), ClientError>;

    /// Removing a missing key is not an error.
    ///
    /// # Errors
    /// Returns [`ClientError::Storage`] if the backing store cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), ClientError>;
}

/// Process-local store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ClientError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), ClientError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store backed by a JSON object on disk, re-read on every access so that
/// separate CLI invocations share state. A missing file is an empty store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, ClientError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => serde_json::from_str(&raw).map_err(|err| {
                ClientError::Storage(format!(
                    "Failed to parse session file {}: {err}",
                    self.path.display()
                ))
            }),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(ClientError::Storage(format!(
                "Failed to read session file {}: {err}",
                self.path.display()
            ))),
        }
    }

    /// Write through a temp file in the same directory and rename it over the
    /// target, so readers see either the old or the new session.
    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), ClientError> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(|err| {
            ClientError::Storage(format!(
                "Failed to create session directory {}: {err}",
                parent.display()
            ))
        })?;

        let json = serde_json::to_vec_pretty(entries)
            .map_err(|err| ClientError::Storage(format!("Failed to encode session: {err}")))?;

        let write_error = |err: std::io::Error| {
            ClientError::Storage(format!(
                "Failed to write session file {}: {err}",
                self.path.display()
            ))
        };

        let mut tmp = NamedTempFile::new_in(parent).map_err(write_error)?;
        tmp.write_all(&json).map_err(write_error)?;
        tmp.as_file().sync_all().map_err(write_error)?;
        tmp.persist(&self.path).map_err(|err| write_error(err.error))?;

        debug!("session saved to {}", self.path.display());
        Ok(())
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ClientError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), ClientError> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Session<S> {
    store: S,
}

impl<S: SessionStore> Session<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist the outcome of a login. Only a successful response with a
    /// username changes anything; the token is stored when present.
    /// Returns whether the session was recorded.
    ///
    /// # Errors
    /// Returns [`ClientError::Storage`] if the store cannot be written.
    pub fn record_login(&mut self, response: &LoginResponse) -> Result<bool, ClientError> {
        let Some(username) = response.username.as_deref().filter(|_| response.success) else {
            return Ok(false);
        };

        self.store.set(USERNAME_KEY, username)?;
        if let Some(token) = &response.token {
            self.store.set(TOKEN_KEY, token)?;
        }
        Ok(true)
    }

    /// # Errors
    /// Returns [`ClientError::Storage`] if the store cannot be read.
    pub fn is_authenticated(&self) -> Result<bool, ClientError> {
        Ok(self.username()?.is_some())
    }

    /// # Errors
    /// Returns [`ClientError::Storage`] if the store cannot be read.
    pub fn username(&self) -> Result<Option<String>, ClientError> {
        self.store.get(USERNAME_KEY)
    }

    /// # Errors
    /// Returns [`ClientError::Storage`] if the store cannot be read.
    pub fn token(&self) -> Result<Option<String>, ClientError> {
        self.store.get(TOKEN_KEY)
    }

    /// Forget both keys.
    ///
    /// # Errors
    /// Returns [`ClientError::Storage`] if the store cannot be written.
    pub fn logout(&mut self) -> Result<(), ClientError> {
        self.store.remove(USERNAME_KEY)?;
        self.store.remove(TOKEN_KEY)
    }

    pub const fn store(&self) -> &S {
        &self.store
    }
}
