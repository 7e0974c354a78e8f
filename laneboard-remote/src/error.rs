//! Error types for the collaborator boundary

use thiserror::Error;

/// Errors reported by a remote document store
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Document not found in the given collection
    #[error("document not found: {collection}/{id}")]
    DocumentNotFound { collection: String, id: String },

    /// Field cannot accept the requested update (e.g. array-union on a
    /// non-array field)
    #[error("invalid update for field {field}: {message}")]
    InvalidUpdate { field: String, message: String },

    /// The backing service rejected or failed the call
    #[error("remote store unavailable: {message}")]
    Unavailable { message: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RemoteError {
    /// Create an unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Create an invalid update error
    pub fn invalid_update(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidUpdate {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors reported by an auth provider
#[derive(Debug, Error)]
pub enum AuthError {
    /// Sign-out did not complete; the session is unchanged
    #[error("sign-out failed: {message}")]
    SignOutFailed { message: String },
}

impl AuthError {
    pub fn sign_out_failed(message: impl Into<String>) -> Self {
        Self::SignOutFailed {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RemoteError::DocumentNotFound {
            collection: "ToDoLists".into(),
            id: "abc123".into(),
        };
        assert_eq!(err.to_string(), "document not found: ToDoLists/abc123");
    }

    #[test]
    fn test_unavailable() {
        let err = RemoteError::unavailable("connection reset");
        assert!(err.to_string().contains("connection reset"));
    }
}
