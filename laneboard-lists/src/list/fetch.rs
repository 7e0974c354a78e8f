//! FetchLists command

use crate::context::ListsContext;
use crate::error::{ListsError, Result};
use laneboard_operations::{async_trait, Execute, Operation};
use laneboard_remote::UserId;
use serde::Deserialize;
use serde_json::Value;

/// Fetch all lists owned by a user and replace the local store with them
///
/// This is the only way remote changes become visible locally - there is no
/// live subscription to the store.
#[derive(Debug, Deserialize)]
pub struct FetchLists {
    /// Owner to fetch for; defaults to the current session
    pub owner: Option<UserId>,
}

impl FetchLists {
    /// Fetch for the current session
    pub fn new() -> Self {
        Self { owner: None }
    }

    /// Fetch for an explicit owner
    pub fn for_owner(owner: UserId) -> Self {
        Self { owner: Some(owner) }
    }
}

impl Default for FetchLists {
    fn default() -> Self {
        Self::new()
    }
}

impl Operation for FetchLists {
    fn verb(&self) -> &'static str {
        "fetch"
    }
    fn noun(&self) -> &'static str {
        "lists"
    }
    fn description(&self) -> &'static str {
        "Fetch the user's lists from the remote store"
    }
}

#[async_trait]
impl Execute<ListsContext, ListsError> for FetchLists {
    async fn execute(&self, ctx: &ListsContext) -> Result<Value> {
        let owner = match &self.owner {
            Some(owner) => owner.clone(),
            None => ctx.session().await.ok_or(ListsError::NotSignedIn)?,
        };

        let lists = ctx.refresh_lists(&owner).await?;
        let lists: Vec<_> = lists.iter().map(|l| &**l).collect();
        Ok(serde_json::to_value(lists)?)
    }
}
