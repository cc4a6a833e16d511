//! Storage-specific error type wrapping file and serialization errors.

use hearth_domain::error::HearthError;

/// Errors originating from the flat-file storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A file read, write, or rename failed.
    #[error("file error")]
    Io(#[from] std::io::Error),

    /// Failed to serialize or deserialize a stored JSON value.
    #[error("JSON serialization error")]
    Json(#[from] serde_json::Error),
}

impl From<StorageError> for HearthError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
