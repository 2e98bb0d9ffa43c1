//! # Error Types
//!
//! Structured error types for codecheck_core. Check functions themselves are
//! infallible; everything here is raised while building the inputs of a run
//! (parsing a member state, resolving clause labels, loading settings).
//!
//! ## Example
//!
//! ```rust
//! use codecheck_core::errors::{CalcError, CalcResult};
//!
//! fn require_positive(field: &str, value: f64) -> CalcResult<()> {
//!     if value <= 0.0 {
//!         return Err(CalcError::invalid_input(field, value.to_string(), "Must be positive"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_positive("fy", 355.0).is_ok());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for codecheck_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for code-check operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-finite, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A member state field required by the checks was not supplied
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A clause label that no built-in check answers to
    #[error("Unknown clause: {label}")]
    UnknownClause { label: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Run settings could not be read or are inconsistent
    #[error("Settings error: {reason}")]
    SettingsError { reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// A check panicked inside a batch worker
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownClause error
    pub fn unknown_clause(label: impl Into<String>) -> Self {
        CalcError::UnknownClause {
            label: label.into(),
        }
    }

    /// Create a SettingsError
    pub fn settings_error(reason: impl Into<String>) -> Self {
        CalcError::SettingsError {
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Map a serde_json error, promoting "missing field" reports to
    /// [`CalcError::MissingField`] so callers never see a half-parsed member.
    pub fn from_json_error(err: &serde_json::Error) -> Self {
        let message = err.to_string();
        match missing_field_name(&message) {
            Some(field) => CalcError::missing_field(field),
            None => CalcError::SerializationError { reason: message },
        }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        CalcError::Internal {
            message: message.into(),
        }
    }

    /// Whether the same command can succeed once the environment is fixed.
    ///
    /// Only file errors qualify: the input itself is unchanged by a retry.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::FileError { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::UnknownClause { .. } => "UNKNOWN_CLAUSE",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::SettingsError { .. } => "SETTINGS_ERROR",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

/// serde reports absent struct fields as "missing field `name` at line L column C".
fn missing_field_name(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("missing field `")?;
    let end = rest.find('`')?;
    Some(&rest[..end])
}
