//! Error types for storage operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while persisting the log collection.
#[derive(Debug, Error)]
pub enum StorageError {
    // ========================================================================
    // File-based backend errors
    // ========================================================================
    /// I/O error during file operations.
    #[error("I/O error at {path}: {source}")]
    FileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ========================================================================
    // Generic errors (any backend)
    // ========================================================================
    /// Error serializing data.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Backend refused the write for a reason of its own.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    /// Create a file I/O error with path context.
    pub fn file_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileIo {
            path: path.into(),
            source,
        }
    }

    /// Create a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Create an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}

/// Convenience type alias for storage results.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_io_display_includes_path() {
        let err = StorageError::file_io(
            "/var/lib/logkeep/logs.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/var/lib/logkeep/logs.json"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn file_io_exposes_source() {
        use std::error::Error as _;

        let err = StorageError::file_io("logs.json", std::io::Error::other("disk full"));
        assert!(err.source().is_some());
    }
}
