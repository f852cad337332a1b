//! # Error Types
//!
//! Domain-specific error types for canteen-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  canteen-core errors (this file)                                       │
//! │  ├── CoreError        - Setup and lookup failures                      │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  canteen-store errors (separate crate)                                 │
//! │  └── StoreError       - Snapshot I/O failures                          │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CliError         - What the user sees (code + message)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → CliError → stderr    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The allocation engine itself has no error type: quantities clamp and
//! empty splits yield zero. Only menu/roster setup and id lookups can fail.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Setup and lookup errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No menu item matches the given id or name.
    #[error("Menu item not found: {0}")]
    ItemNotFound(String),

    /// No roster person matches the given id or name.
    #[error("Person not found: {0}")]
    PersonNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while adding menu items and people, and while checking a restored
/// snapshot field before it is accepted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. a price with three decimals).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g. two menu items sharing an id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
