//! CreateList command

use crate::context::ListsContext;
use crate::error::{ListsError, Result};
use crate::types::ListId;
use laneboard_operations::{async_trait, Execute, Operation};
use laneboard_remote::UserId;
use serde::Deserialize;
use serde_json::Value;

/// Create a new empty to-do list
///
/// The name is persisted as given - there is deliberately no emptiness check
/// on it. On success the whole collection is re-fetched rather than appended
/// locally, so server-assigned fields (the list id) never have to be
/// predicted client-side.
#[derive(Debug, Deserialize)]
pub struct CreateList {
    /// The list name
    pub name: String,
    /// Owner of the list; defaults to the current session
    pub owner: Option<UserId>,
}

impl CreateList {
    /// Create a new CreateList command owned by the current session
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: None,
        }
    }

    /// Set an explicit owner
    pub fn with_owner(mut self, owner: UserId) -> Self {
        self.owner = Some(owner);
        self
    }
}

impl Operation for CreateList {
    fn verb(&self) -> &'static str {
        "create"
    }
    fn noun(&self) -> &'static str {
        "list"
    }
    fn description(&self) -> &'static str {
        "Create a new empty to-do list"
    }
}

#[async_trait]
impl Execute<ListsContext, ListsError> for CreateList {
    async fn execute(&self, ctx: &ListsContext) -> Result<Value> {
        let owner = match &self.owner {
            Some(owner) => owner.clone(),
            None => ctx.session().await.ok_or(ListsError::NotSignedIn)?,
        };

        let id = ListId::from(ctx.create_list_document(&self.name, &owner).await?);
        tracing::debug!(list = %id, "created list");

        let lists = ctx.refresh_lists(&owner).await?;
        let created = lists
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| ListsError::ListNotFound { id: id.to_string() })?;

        Ok(serde_json::to_value(&**created)?)
    }
}
