//! Document storage
//!
//! The regenerator only needs read, write and delete on one path. Writes must
//! be all-or-nothing: a reader either sees the previous text or the new one.

use crate::error::{RegenError, RegenResult};
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Storage the regenerator reads and writes the document through
pub trait DocumentStore {
    /// Current content, `None` if absent
    ///
    /// # Errors
    /// Returns error if the document exists but cannot be read
    fn read(&self, path: &Path) -> RegenResult<Option<String>>;

    /// Replace the content as one unit
    ///
    /// # Errors
    /// Returns error if the content cannot be stored
    fn write(&mut self, path: &Path, content: &str) -> RegenResult<()>;

    /// Remove the document; removing an absent document is not an error
    ///
    /// # Errors
    /// Returns error if an existing document cannot be removed
    fn delete(&mut self, path: &Path) -> RegenResult<()>;
}

/// Filesystem store rooted at a directory
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Create store resolving relative paths against `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a document
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl DocumentStore for FsStore {
    fn read(&self, path: &Path) -> RegenResult<Option<String>> {
        let full = self.resolve(path);
        match fs::read_to_string(&full) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RegenError::io_error(full, e)),
        }
    }

    fn write(&mut self, path: &Path, content: &str) -> RegenResult<()> {
        let full = self.resolve(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).map_err(|e| RegenError::io_error(parent, e))?;
        }

        let mut temp = full.clone().into_os_string();
        temp.push(".tmp");
        let temp = PathBuf::from(temp);

        let written = fs::File::create(&temp)
            .and_then(|mut file| {
                file.write_all(content.as_bytes())?;
                file.sync_all()
            })
            .map_err(|e| RegenError::io_error(&temp, e))
            .and_then(|()| fs::rename(&temp, &full).map_err(|e| RegenError::io_error(&full, e)));
        if let Err(e) = written {
            if let Err(cleanup) = fs::remove_file(&temp) {
                if cleanup.kind() != io::ErrorKind::NotFound {
                    tracing::warn!(path = %temp.display(), error = %cleanup, "temporary file left behind");
                }
            }
            return Err(e);
        }
        tracing::debug!(path = %full.display(), bytes = content.len(), "document written");
        Ok(())
    }

    fn delete(&mut self, path: &Path) -> RegenResult<()> {
        let full = self.resolve(path);
        match fs::remove_file(&full) {
            Ok(()) => {
                tracing::debug!(path = %full.display(), "document deleted");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(RegenError::io_error(full, e)),
        }
    }
}

/// In-memory store, counting mutations
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: BTreeMap<PathBuf, String>,
    writes: usize,
    deletes: usize,
}

impl MemoryStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a pre-existing document
    #[must_use]
    pub fn with_document(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.documents.insert(path.into(), content.into());
        self
    }

    /// Content at a path
    #[must_use]
    pub fn get(&self, path: &Path) -> Option<&str> {
        self.documents.get(path).map(String::as_str)
    }

    /// Number of writes performed
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Number of deletes performed
    #[must_use]
    pub fn deletes(&self) -> usize {
        self.deletes
    }
}

impl DocumentStore for MemoryStore {
    fn read(&self, path: &Path) -> RegenResult<Option<String>> {
        Ok(self.documents.get(path).cloned())
    }

    fn write(&mut self, path: &Path, content: &str) -> RegenResult<()> {
        self.documents.insert(path.to_path_buf(), content.to_string());
        self.writes += 1;
        Ok(())
    }

    fn delete(&mut self, path: &Path) -> RegenResult<()> {
        if self.documents.remove(path).is_some() {
            self.deletes += 1;
        }
        Ok(())
    }
}
