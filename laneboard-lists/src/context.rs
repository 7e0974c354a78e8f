//! ListsContext - collaborator access for list commands
//!
//! The context provides access to the remote store, the auth provider, the
//! local list store, and the current session. No business logic methods,
//! just data access primitives. Commands do all the work.

use crate::error::Result;
use crate::store::ListStore;
use crate::types::{ListId, Task, TaskList};
use laneboard_remote::{
    AuthProvider, DocumentId, FieldUpdate, Filter, Fields, RemoteStore, UserId,
};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::{watch, RwLock};

/// Remote collection holding one document per to-do list
pub const LISTS_COLLECTION: &str = "ToDoLists";

/// Context passed to every command
pub struct ListsContext {
    remote: Arc<dyn RemoteStore>,
    auth: Arc<dyn AuthProvider>,
    store: ListStore,
    /// Explicit session state, refreshed from the auth subscription rather
    /// than looked up implicitly per call
    session: RwLock<Option<UserId>>,
}

impl ListsContext {
    /// Create a context over the given collaborators, seeding the session
    /// from the provider's current state
    pub fn new(remote: Arc<dyn RemoteStore>, auth: Arc<dyn AuthProvider>) -> Self {
        let session = auth.current_user();
        Self {
            remote,
            auth,
            store: ListStore::new(),
            session: RwLock::new(session),
        }
    }

    /// The local list store
    pub fn store(&self) -> &ListStore {
        &self.store
    }

    /// The auth provider collaborator
    pub fn auth(&self) -> &dyn AuthProvider {
        self.auth.as_ref()
    }

    /// The current session, if signed in
    pub async fn session(&self) -> Option<UserId> {
        self.session.read().await.clone()
    }

    /// Replace the session state
    pub async fn set_session(&self, user: Option<UserId>) {
        *self.session.write().await = user;
    }

    /// Receiver over the auth provider's session changes
    pub fn subscribe_session(&self) -> watch::Receiver<Option<UserId>> {
        self.auth.subscribe()
    }

    // =========================================================================
    // Remote document I/O
    // =========================================================================

    /// Fetch all lists owned by `owner` from the remote store
    pub async fn fetch_lists(&self, owner: &UserId) -> Result<Vec<TaskList>> {
        let docs = self
            .remote
            .query_documents(
                LISTS_COLLECTION,
                Filter::field_eq("owner", serde_json::to_value(owner)?),
            )
            .await?;

        let mut lists = Vec::with_capacity(docs.len());
        for doc in &docs {
            lists.push(TaskList::from_document(doc)?);
        }
        Ok(lists)
    }

    /// Fetch `owner`'s lists and replace the local store with them
    pub async fn refresh_lists(&self, owner: &UserId) -> Result<Vec<Arc<TaskList>>> {
        let lists: Vec<Arc<TaskList>> = self
            .fetch_lists(owner)
            .await?
            .into_iter()
            .map(Arc::new)
            .collect();
        self.store.replace_all(lists.clone()).await;
        tracing::debug!(owner = %owner, count = lists.len(), "refreshed lists");
        Ok(lists)
    }

    /// Persist a new empty list document, returning its assigned id
    pub async fn create_list_document(&self, name: &str, owner: &UserId) -> Result<DocumentId> {
        let mut fields = Fields::new();
        fields.insert("name".into(), Value::String(name.to_string()));
        fields.insert("owner".into(), serde_json::to_value(owner)?);
        fields.insert("tasks".into(), Value::Array(Vec::new()));

        let id = self.remote.create_document(LISTS_COLLECTION, fields).await?;
        Ok(id)
    }

    /// Append a task to a list's persisted collection (array-union)
    pub async fn append_task(&self, list: &ListId, task: &Task) -> Result<()> {
        self.remote
            .update_document(
                LISTS_COLLECTION,
                &list.to_document_id(),
                vec![(
                    "tasks".into(),
                    FieldUpdate::ArrayUnion(vec![serde_json::to_value(task)?]),
                )],
            )
            .await?;
        Ok(())
    }

    /// Replace a list's entire persisted `tasks` array (move path)
    pub async fn write_tasks(&self, list: &ListId, tasks: &[Task]) -> Result<()> {
        self.remote
            .update_document(
                LISTS_COLLECTION,
                &list.to_document_id(),
                vec![("tasks".into(), FieldUpdate::Set(serde_json::to_value(tasks)?))],
            )
            .await?;
        Ok(())
    }
}
