//! # Store Error Types
//!
//! Error types for snapshot persistence.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error / CoreError                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the file path as context              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CliError (in apps/cli) ← code + message for the user                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bad file CONTENT is never an error: restore falls back to defaults and
//! logs. Only failing to read or write the file surfaces here.

use std::path::PathBuf;

use canteen_core::CoreError;
use thiserror::Error;

/// Snapshot persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the snapshot file failed.
    ///
    /// ## When This Occurs
    /// - Data directory can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoding the snapshot failed.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A session mutation was rejected by the core (unknown id, bad name).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_the_path() {
        let err = StoreError::io(
            "/tmp/canteen.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "I/O error on /tmp/canteen.json: denied");
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err: StoreError = CoreError::ItemNotFound("Biriyani".to_string()).into();
        assert_eq!(err.to_string(), "Menu item not found: Biriyani");
    }
}
