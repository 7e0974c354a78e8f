//! ID wrapper types for type-safe identifiers.
//!
//! String-backed wrappers to prevent mixing up list and task identifiers.
//! Task ids are generated client-side (ULID) at creation time; list ids are
//! assigned by the remote store and only ever parsed, never generated here.

use laneboard_remote::DocumentId;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Identifier of a to-do list, assigned by the remote store
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(String);

impl ListId {
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The underlying document id in the remote store
    pub fn to_document_id(&self) -> DocumentId {
        DocumentId::from_string(&self.0)
    }
}

impl std::fmt::Display for ListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<DocumentId> for ListId {
    fn from(id: DocumentId) -> Self {
        Self(id.as_str().to_string())
    }
}

/// Identifier of a task, generated client-side and immutable
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generate a fresh task id
    pub fn new() -> Self {
        Self(Ulid::new().to_string())
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_unique() {
        assert_ne!(TaskId::new(), TaskId::new());
    }

    #[test]
    fn test_list_id_document_roundtrip() {
        let doc_id = DocumentId::from_string("list-1");
        let list_id = ListId::from(doc_id.clone());
        assert_eq!(list_id.as_str(), "list-1");
        assert_eq!(list_id.to_document_id(), doc_id);
    }
}
