//! Task record and priority lanes

use super::ids::TaskId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The three priority lanes of every list
///
/// Serialized as `"Low"`/`"Medium"`/`"High"`, matching the stored document
/// format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// All lanes in display order
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Priority::Low),
            "Medium" => Ok(Priority::Medium),
            "High" => Ok(Priority::High),
            other => Err(format!("unknown priority: {other}")),
        }
    }
}

/// A task within a list
///
/// Everything except `priority` is immutable after creation; `priority`
/// changes only when a move re-lanes the task. The id is the sole key used
/// to locate a task for reordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    /// Due date, `YYYY-MM-DD` on the wire
    pub due_date: NaiveDate,
    pub priority: Priority,
}

impl Task {
    /// Create a new task with a freshly generated id
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: NaiveDate,
        priority: Priority,
    ) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: description.into(),
            due_date,
            priority,
        }
    }
}
