//! RemoteStore trait and the in-memory implementation

use crate::document::{Document, FieldUpdate, Fields, Filter};
use crate::error::RemoteError;
use crate::ids::DocumentId;
use crate::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

/// A hosted document-oriented store, addressed by collection name and
/// document id
///
/// This is the entire surface laneboard needs from its persistence
/// collaborator: create with server-assigned id, partial update of named
/// fields, and equality-filtered queries.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Create a document with the given fields, returning its assigned id
    async fn create_document(&self, collection: &str, fields: Fields) -> Result<DocumentId>;

    /// Apply field updates to an existing document
    async fn update_document(
        &self,
        collection: &str,
        id: &DocumentId,
        updates: Vec<(String, FieldUpdate)>,
    ) -> Result<()>;

    /// Return all documents in the collection matching the filter, in a
    /// stable order
    async fn query_documents(&self, collection: &str, filter: Filter) -> Result<Vec<Document>>;
}

/// In-memory [`RemoteStore`]
///
/// Plays the server role: assigns document ids, keeps insertion order per
/// collection, and implements the array-union/set update semantics. Counts
/// every call and can be told to fail writes, so tests can assert "no network
/// call happened" and "the write failed but local state was kept".
#[derive(Default)]
pub struct MemoryRemote {
    collections: RwLock<HashMap<String, Vec<Document>>>,
    calls: AtomicUsize,
    write_calls: AtomicUsize,
    fail_writes: AtomicBool,
}

impl MemoryRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of store calls observed (reads and writes)
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of write calls observed (create + update)
    pub fn write_call_count(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    /// Make subsequent writes fail with [`RemoteError::Unavailable`]
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Fetch a single document without going through a query (test helper)
    pub async fn document(&self, collection: &str, id: &DocumentId) -> Option<Document> {
        let collections = self.collections.read().await;
        collections
            .get(collection)?
            .iter()
            .find(|d| &d.id == id)
            .cloned()
    }

    fn record_call(&self, write: bool) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if write {
            self.write_calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn check_write(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RemoteError::unavailable("write failure injected"));
        }
        Ok(())
    }
}

#[async_trait]
impl RemoteStore for MemoryRemote {
    async fn create_document(&self, collection: &str, fields: Fields) -> Result<DocumentId> {
        self.record_call(true);
        self.check_write()?;

        let id = DocumentId::generate();
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(Document::new(id.clone(), fields));

        tracing::debug!(collection, id = %id, "created document");
        Ok(id)
    }

    async fn update_document(
        &self,
        collection: &str,
        id: &DocumentId,
        updates: Vec<(String, FieldUpdate)>,
    ) -> Result<()> {
        self.record_call(true);
        self.check_write()?;

        let mut collections = self.collections.write().await;
        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| &d.id == id))
            .ok_or_else(|| RemoteError::DocumentNotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;

        for (field, update) in updates {
            match update {
                FieldUpdate::Set(value) => {
                    doc.fields.insert(field, value);
                }
                FieldUpdate::ArrayUnion(elements) => {
                    let existing = doc
                        .fields
                        .entry(field.clone())
                        .or_insert_with(|| Value::Array(Vec::new()));
                    match existing {
                        Value::Array(items) => items.extend(elements),
                        _ => {
                            return Err(RemoteError::invalid_update(
                                field,
                                "array-union target is not an array",
                            ))
                        }
                    }
                }
            }
        }

        tracing::debug!(collection, id = %id, "updated document");
        Ok(())
    }

    async fn query_documents(&self, collection: &str, filter: Filter) -> Result<Vec<Document>> {
        self.record_call(false);

        let collections = self.collections.read().await;
        let docs = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| filter.matches(&d.fields))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        Ok(docs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[tokio::test]
    async fn test_create_and_query() {
        let store = MemoryRemote::new();

        let id = store
            .create_document("ToDoLists", fields(json!({"name": "Chores", "owner": "alice"})))
            .await
            .unwrap();
        store
            .create_document("ToDoLists", fields(json!({"name": "Work", "owner": "bob"})))
            .await
            .unwrap();

        let docs = store
            .query_documents("ToDoLists", Filter::field_eq("owner", json!("alice")))
            .await
            .unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, id);
        assert_eq!(docs[0].field("name"), Some(&json!("Chores")));
    }

    #[tokio::test]
    async fn test_query_preserves_insertion_order() {
        let store = MemoryRemote::new();

        for name in ["a", "b", "c"] {
            store
                .create_document("ToDoLists", fields(json!({"name": name, "owner": "alice"})))
                .await
                .unwrap();
        }

        let docs = store
            .query_documents("ToDoLists", Filter::field_eq("owner", json!("alice")))
            .await
            .unwrap();
        let names: Vec<_> = docs.iter().map(|d| d.field("name").unwrap()).collect();
        assert_eq!(names, vec![&json!("a"), &json!("b"), &json!("c")]);
    }

    #[tokio::test]
    async fn test_array_union_appends_without_dedup() {
        let store = MemoryRemote::new();
        let id = store
            .create_document("ToDoLists", fields(json!({"tasks": [{"id": "t1"}]})))
            .await
            .unwrap();

        // Append the same element twice - no duplicate checking
        for _ in 0..2 {
            store
                .update_document(
                    "ToDoLists",
                    &id,
                    vec![("tasks".into(), FieldUpdate::ArrayUnion(vec![json!({"id": "t2"})]))],
                )
                .await
                .unwrap();
        }

        let doc = store.document("ToDoLists", &id).await.unwrap();
        assert_eq!(doc.field("tasks").unwrap().as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_array_union_on_missing_field() {
        let store = MemoryRemote::new();
        let id = store
            .create_document("ToDoLists", fields(json!({"name": "x"})))
            .await
            .unwrap();

        store
            .update_document(
                "ToDoLists",
                &id,
                vec![("tasks".into(), FieldUpdate::ArrayUnion(vec![json!(1)]))],
            )
            .await
            .unwrap();

        let doc = store.document("ToDoLists", &id).await.unwrap();
        assert_eq!(doc.field("tasks"), Some(&json!([1])));
    }

    #[tokio::test]
    async fn test_set_replaces_whole_field() {
        let store = MemoryRemote::new();
        let id = store
            .create_document("ToDoLists", fields(json!({"tasks": [1, 2, 3]})))
            .await
            .unwrap();

        store
            .update_document(
                "ToDoLists",
                &id,
                vec![("tasks".into(), FieldUpdate::Set(json!([9])))],
            )
            .await
            .unwrap();

        let doc = store.document("ToDoLists", &id).await.unwrap();
        assert_eq!(doc.field("tasks"), Some(&json!([9])));
    }

    #[tokio::test]
    async fn test_update_missing_document() {
        let store = MemoryRemote::new();
        let result = store
            .update_document(
                "ToDoLists",
                &DocumentId::from_string("nope"),
                vec![("tasks".into(), FieldUpdate::Set(json!([])))],
            )
            .await;

        assert!(matches!(result, Err(RemoteError::DocumentNotFound { .. })));
    }

    #[tokio::test]
    async fn test_call_counting_and_failure_injection() {
        let store = MemoryRemote::new();
        assert_eq!(store.call_count(), 0);

        let id = store
            .create_document("c", fields(json!({"owner": "a"})))
            .await
            .unwrap();
        store
            .query_documents("c", Filter::field_eq("owner", json!("a")))
            .await
            .unwrap();
        assert_eq!(store.call_count(), 2);
        assert_eq!(store.write_call_count(), 1);

        store.fail_writes(true);
        let result = store
            .update_document("c", &id, vec![("x".into(), FieldUpdate::Set(json!(1)))])
            .await;
        assert!(matches!(result, Err(RemoteError::Unavailable { .. })));

        // Failed writes still count as observed calls
        assert_eq!(store.write_call_count(), 2);

        store.fail_writes(false);
        store
            .update_document("c", &id, vec![("x".into(), FieldUpdate::Set(json!(1)))])
            .await
            .unwrap();
    }
}
