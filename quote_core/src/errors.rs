//! # Error Types
//!
//! Structured error types for quote_core. The estimation pipeline itself is
//! total — malformed numeric form input coerces to zero and never reaches
//! this module — so errors come from the boundaries: unrecognized material
//! names, bad record names, and project-file I/O.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::errors::{QuoteError, QuoteResult};
//!
//! fn validate_record_name(name: &str) -> QuoteResult<()> {
//!     if name.trim().is_empty() {
//!         return Err(QuoteError::invalid_input(
//!             "name",
//!             name,
//!             "Record name cannot be blank",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for quote_core operations
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Structured error type for estimation and persistence operations.
///
/// Each variant carries enough context for a consumer to present a useful
/// message or handle the failure programmatically.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum QuoteError {
    /// An input value is invalid (blank record name, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A glass type or profile name was not recognized
    #[error("Material not found: {name}")]
    MaterialNotFound { name: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// File is locked by another user/process
    #[error("File locked: '{path}' is locked by {locked_by} since {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl QuoteError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        QuoteError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(name: impl Into<String>) -> Self {
        QuoteError::MaterialNotFound { name: name.into() }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        QuoteError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(
        path: impl Into<String>,
        locked_by: impl Into<String>,
        locked_at: impl Into<String>,
    ) -> Self {
        QuoteError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, QuoteError::FileLocked { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            QuoteError::InvalidInput { .. } => "INVALID_INPUT",
            QuoteError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            QuoteError::FileError { .. } => "FILE_ERROR",
            QuoteError::FileLocked { .. } => "FILE_LOCKED",
            QuoteError::SerializationError { .. } => "SERIALIZATION_ERROR",
            QuoteError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = QuoteError::material_not_found("Series 99");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: QuoteError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            QuoteError::material_not_found("frosted").error_code(),
            "MATERIAL_NOT_FOUND"
        );
        assert_eq!(
            QuoteError::invalid_input("name", "", "blank").error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_recoverable() {
        let locked = QuoteError::file_locked("quotes.fen", "someone", "2026-01-01");
        assert!(locked.is_recoverable());
        assert!(!QuoteError::material_not_found("x").is_recoverable());
    }
}
