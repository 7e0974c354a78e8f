//! In-memory store of the signed-in user's lists

use crate::types::{ListId, TaskList};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Cache of all lists owned by the current user, refreshed from the remote
/// store
///
/// There is no partial-update operation: any targeted change is expressed as
/// a full replacement of the affected entries within a new sequence. Entries
/// are `Arc`-shared so replacement is structural, not destructive, and
/// untouched lists keep their identity across replacements.
#[derive(Default)]
pub struct ListStore {
    lists: RwLock<Vec<Arc<TaskList>>>,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically replace the entire visible collection
    pub async fn replace_all(&self, lists: Vec<Arc<TaskList>>) {
        *self.lists.write().await = lists;
    }

    /// Look up a list by id. The store holds at most one list per id,
    /// trusting the uniqueness of remote-assigned ids.
    pub async fn get_by_id(&self, id: &ListId) -> Option<Arc<TaskList>> {
        self.lists
            .read()
            .await
            .iter()
            .find(|l| &l.id == id)
            .map(Arc::clone)
    }

    /// The current sequence of lists
    pub async fn snapshot(&self) -> Vec<Arc<TaskList>> {
        self.lists.read().await.clone()
    }

    /// Drop all lists (sign-out)
    pub async fn clear(&self) {
        self.lists.write().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.lists.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.lists.read().await.is_empty()
    }
}
