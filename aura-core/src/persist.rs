//! Persistence gateway: best-effort storage for the serialized document.
//!
//! The session treats saves as fire-and-forget. A gateway failure is logged
//! and never rolls back or blocks the in-memory state transition.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::EditorResult;

/// A key-value byte store capable of holding one serialized document.
pub trait PersistenceGateway: Send + Sync {
    /// Load the stored document bytes, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn load(&self) -> EditorResult<Option<Vec<u8>>>;

    /// Store the serialized document.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn save(&self, bytes: &[u8]) -> EditorResult<()>;
}

impl<G: PersistenceGateway + ?Sized> PersistenceGateway for std::sync::Arc<G> {
    fn load(&self) -> EditorResult<Option<Vec<u8>>> {
        (**self).load()
    }

    fn save(&self, bytes: &[u8]) -> EditorResult<()> {
        (**self).save(bytes)
    }
}

/// Gateway backed by a single file on disk.
#[derive(Debug, Clone)]
pub struct FileGateway {
    path: PathBuf,
}

impl FileGateway {
    /// Create a gateway storing the document at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl PersistenceGateway for FileGateway {
    fn load(&self) -> EditorResult<Option<Vec<u8>>> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, bytes: &[u8]) -> EditorResult<()> {
        std::fs::write(&self.path, bytes)?;
        Ok(())
    }
}

/// In-process gateway, for tests and embedders without a filesystem.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    bytes: RwLock<Option<Vec<u8>>>,
}

impl MemoryGateway {
    /// Create an empty in-memory gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gateway pre-seeded with stored bytes.
    #[must_use]
    pub fn with_bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes: RwLock::new(Some(bytes)),
        }
    }
}

impl PersistenceGateway for MemoryGateway {
    fn load(&self) -> EditorResult<Option<Vec<u8>>> {
        let bytes = self
            .bytes
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(bytes.clone())
    }

    fn save(&self, bytes: &[u8]) -> EditorResult<()> {
        let mut stored = self
            .bytes
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *stored = Some(bytes.to_vec());
        Ok(())
    }
}
