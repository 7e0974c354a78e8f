//! Error types for the list engine

use laneboard_remote::{AuthError, RemoteError};
use thiserror::Error;

/// Result type for list operations
pub type Result<T> = std::result::Result<T, ListsError>;

/// Errors that can occur in list operations
///
/// All of these are transient from the application's point of view: they are
/// surfaced to the user and never fatal. Validation errors are raised before
/// any remote call is made.
#[derive(Debug, Error)]
pub enum ListsError {
    /// Missing required field
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// List not found in the local store
    #[error("list not found: {id}")]
    ListNotFound { id: String },

    /// Task not found within a list
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// No user is signed in
    #[error("no user is signed in")]
    NotSignedIn,

    /// Auth provider failure
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Remote store failure. When raised by a move, the optimistic local
    /// state has already been applied and is intentionally kept.
    #[error("persistence error: {0}")]
    Persistence(#[from] RemoteError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ListsError {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if this error was raised by input validation (no remote call
    /// was made)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingField { .. } | Self::InvalidValue { .. })
    }
}
