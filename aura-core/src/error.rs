//! Error types for editor operations.

use thiserror::Error;

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

/// Errors that can occur in editor operations.
///
/// Note that command dispatch itself is total: unknown ids and exhausted
/// history are defined as no-ops, not errors. These variants cover the
/// persistence boundary only.
#[derive(Debug, Error)]
pub enum EditorError {
    /// An I/O error from the persistence gateway.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
