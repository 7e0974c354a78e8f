//! GetList command

use crate::context::ListsContext;
use crate::error::{ListsError, Result};
use crate::types::ListId;
use laneboard_operations::{async_trait, Execute, Operation};
use serde::Deserialize;
use serde_json::Value;

/// Look up a list by id in the local store
#[derive(Debug, Deserialize)]
pub struct GetList {
    /// The list id
    pub id: ListId,
}

impl GetList {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: ListId::from_string(id),
        }
    }
}

impl Operation for GetList {
    fn verb(&self) -> &'static str {
        "get"
    }
    fn noun(&self) -> &'static str {
        "list"
    }
    fn description(&self) -> &'static str {
        "Look up a list by id"
    }
}

#[async_trait]
impl Execute<ListsContext, ListsError> for GetList {
    async fn execute(&self, ctx: &ListsContext) -> Result<Value> {
        let list = ctx
            .store()
            .get_by_id(&self.id)
            .await
            .ok_or_else(|| ListsError::ListNotFound {
                id: self.id.to_string(),
            })?;

        Ok(serde_json::to_value(&*list)?)
    }
}
