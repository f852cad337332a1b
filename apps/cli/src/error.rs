//! # CLI Error Type
//!
//! Unified error type for every `canteen` command.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Canteen Split                          │
//! │                                                                         │
//! │  canteen order Nobody Puri                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, CliError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Storage Error? ─── StoreError::Io { path, .. } ───┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Lookup Error? ─── CoreError::PersonNotFound ──── CliError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  stderr:  error: Person not found: Nobody          (exit code 1)       │
//! │  --json:  {"code":"NOT_FOUND","message":"Person not found: Nobody"}    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use canteen_core::{CoreError, ValidationError};
use canteen_store::StoreError;
use serde::Serialize;
use thiserror::Error;

/// Error returned from CLI commands.
///
/// ## Serialization
/// Printed to stderr like this when `--json` is set:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Menu item not found: Biriyani"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct CliError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown person or menu item
    NotFound,

    /// Input validation failed (bad name, bad price)
    ValidationError,

    /// Snapshot file could not be read or written
    StorageError,

    /// Anything else
    Internal,
}

impl CliError {
    /// Creates a new CLI error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, key: &str) -> Self {
        CliError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, key))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::Internal, message)
    }

    /// Renders the error for `--json` output.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"code":"INTERNAL","message":{:?}}}"#, self.message)
        })
    }
}

/// Converts core errors to CLI errors.
impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemNotFound(key) => CliError::not_found("Menu item", &key),
            CoreError::PersonNotFound(key) => CliError::not_found("Person", &key),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::validation(err.to_string())
    }
}

/// Converts store errors to CLI errors.
impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Core(e) => e.into(),
            StoreError::Io { path, source } => {
                tracing::error!(path = %path.display(), error = %source, "Snapshot I/O failed");
                CliError::new(
                    ErrorCode::StorageError,
                    format!("Could not access {}: {}", path.display(), source),
                )
            }
            StoreError::Serialization(e) => {
                tracing::error!(error = %e, "Snapshot encoding failed");
                CliError::new(ErrorCode::StorageError, "Could not encode the snapshot")
            }
        }
    }
}

/// Convenience type alias for command results.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_errors_map_to_not_found() {
        let err: CliError = CoreError::PersonNotFound("Nobody".into()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Person not found: Nobody");

        let err: CliError = StoreError::Core(CoreError::ItemNotFound("Biriyani".into())).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.to_string(), "Menu item not found: Biriyani");
    }

    #[test]
    fn test_validation_errors_keep_their_message() {
        let err: CliError = CoreError::Validation(ValidationError::MustBePositive {
            field: "price".into(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "price must be positive");
    }

    #[test]
    fn test_io_errors_are_storage_errors() {
        let err: CliError = StoreError::io(
            "/nowhere/canteen.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        )
        .into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(err.message.contains("/nowhere/canteen.json"));
    }

    #[test]
    fn test_json_shape() {
        let err = CliError::not_found("Person", "Nobody");
        assert_eq!(
            err.to_json(),
            r#"{"code":"NOT_FOUND","message":"Person not found: Nobody"}"#
        );
    }
}
