//! Key-value blob storage.
//!
//! The notepad persists everything as a single serialized blob under a
//! fixed key. [`BlobStore`] is the seam; [`FileStore`] keeps one JSON file
//! per key in a data directory and [`MemoryStore`] backs tests and
//! sessions where no directory is usable.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Key the note list is stored under.
pub const STORAGE_KEY: &str = "terminal-notepad-notes";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize notes: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Opaque get/set blob store.
pub trait BlobStore: fmt::Debug {
    /// Fetch the blob for `key`, or `None` if nothing was stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `blob` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing medium cannot be written.
    fn set(&mut self, key: &str, blob: &str) -> Result<(), StorageError>;
}

/// Directory-backed store: `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BlobStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read { path, source }),
        }
    }

    fn set(&mut self, key: &str, blob: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Write {
            path: self.dir.clone(),
            source,
        })?;
        // Write beside the target and rename so a crash never leaves half a blob.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, blob).map_err(|source| StorageError::Write {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StorageError::Write { path, source })
    }
}

/// In-memory store. Writes can be made to fail for exercising fallbacks.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a blob, as if a previous session had written it.
    #[must_use]
    pub fn with_blob(mut self, key: &str, blob: impl Into<String>) -> Self {
        self.blobs.insert(key.to_string(), blob.into());
        self
    }

    /// Make every subsequent `set` fail.
    #[must_use]
    pub const fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, blob: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Unavailable(format!("write to {key} refused")));
        }
        self.blobs.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}
