//! AddTask command

use crate::context::ListsContext;
use crate::error::{ListsError, Result};
use crate::types::{ListId, Priority, Task};
use chrono::NaiveDate;
use laneboard_operations::{async_trait, Execute, Operation};
use serde::Deserialize;
use serde_json::Value;

/// Add a new task to a list
///
/// All task fields are required; validation happens before any remote call
/// is attempted. The task id is generated client-side and the task is
/// appended to the list's persisted collection via array-union, followed by
/// a full re-fetch.
#[derive(Debug, Deserialize)]
pub struct AddTask {
    /// The target list
    pub list_id: ListId,
    /// The task title (required)
    pub title: String,
    /// The task description (required)
    pub description: String,
    /// Due date as `YYYY-MM-DD` (required)
    pub due_date: String,
    /// Priority lane for the new task
    pub priority: Priority,
}

impl AddTask {
    /// Create a new AddTask command with a title; remaining fields default
    /// empty and fail validation until set
    pub fn new(list_id: ListId, title: impl Into<String>) -> Self {
        Self {
            list_id,
            title: title.into(),
            description: String::new(),
            due_date: String::new(),
            priority: Priority::Low,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = due_date.into();
        self
    }

    /// Set the priority lane
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    fn validate(&self) -> Result<NaiveDate> {
        if self.title.trim().is_empty() {
            return Err(ListsError::missing_field("title"));
        }
        if self.description.trim().is_empty() {
            return Err(ListsError::missing_field("description"));
        }
        if self.due_date.trim().is_empty() {
            return Err(ListsError::missing_field("dueDate"));
        }
        self.due_date
            .parse()
            .map_err(|_| ListsError::invalid_value("dueDate", "expected YYYY-MM-DD"))
    }
}

impl Operation for AddTask {
    fn verb(&self) -> &'static str {
        "add"
    }
    fn noun(&self) -> &'static str {
        "task"
    }
    fn description(&self) -> &'static str {
        "Add a task to a list"
    }
}

#[async_trait]
impl Execute<ListsContext, ListsError> for AddTask {
    async fn execute(&self, ctx: &ListsContext) -> Result<Value> {
        // Validation first - a validation failure must make zero remote calls
        let due_date = self.validate()?;
        let owner = ctx.session().await.ok_or(ListsError::NotSignedIn)?;

        let task = Task::new(&self.title, &self.description, due_date, self.priority);
        ctx.append_task(&self.list_id, &task).await?;
        tracing::debug!(list = %self.list_id, task = %task.id, "added task");

        ctx.refresh_lists(&owner).await?;
        Ok(serde_json::to_value(&task)?)
    }
}
