//! TaskList record and lane views

use super::ids::{ListId, TaskId};
use super::task::{Priority, Task};
use laneboard_remote::{Document, Fields};
use laneboard_remote::UserId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A to-do list owned by one user
///
/// The `tasks` sequence is implicitly partitioned into priority lanes: each
/// lane's displayed order is the relative order of its tasks within this
/// sequence. Absolute positions in `tasks` carry no meaning across lanes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskList {
    /// Remote document id. Not part of the document fields; injected on read.
    #[serde(default)]
    pub id: ListId,
    pub name: String,
    pub owner: UserId,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl TaskList {
    /// Create an empty list
    pub fn new(id: ListId, name: impl Into<String>, owner: UserId) -> Self {
        Self {
            id,
            name: name.into(),
            owner,
            tasks: Vec::new(),
        }
    }

    /// The lane view for one priority: same-priority tasks in sequence order
    pub fn lane(&self, priority: Priority) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.priority == priority)
            .collect()
    }

    /// Number of tasks in the given lane
    pub fn lane_len(&self, priority: Priority) -> usize {
        self.tasks.iter().filter(|t| t.priority == priority).count()
    }

    /// Find a task by id
    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// A task's position within its own lane, if present
    pub fn lane_index_of(&self, id: &TaskId) -> Option<(Priority, usize)> {
        let pos = self.tasks.iter().position(|t| &t.id == id)?;
        let priority = self.tasks[pos].priority;
        let index = self.tasks[..pos]
            .iter()
            .filter(|t| t.priority == priority)
            .count();
        Some((priority, index))
    }

    /// Decode a list from a remote document, taking the id from the document
    /// rather than its fields
    pub fn from_document(doc: &Document) -> Result<Self, serde_json::Error> {
        let mut list: TaskList = serde_json::from_value(Value::Object(doc.fields.clone()))?;
        list.id = ListId::from_string(doc.id.as_str());
        Ok(list)
    }

    /// Encode the document fields for this list (id excluded - the store
    /// addresses documents by id separately)
    pub fn to_fields(&self) -> Result<Fields, serde_json::Error> {
        let mut fields = Fields::new();
        fields.insert("name".into(), Value::String(self.name.clone()));
        fields.insert("owner".into(), serde_json::to_value(&self.owner)?);
        fields.insert("tasks".into(), serde_json::to_value(&self.tasks)?);
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use laneboard_remote::DocumentId;

    fn task(id: &str, priority: Priority) -> Task {
        Task {
            id: TaskId::from_string(id),
            title: format!("task {id}"),
            description: "d".into(),
            due_date: "2026-09-01".parse().unwrap(),
            priority,
        }
    }

    fn sample_list() -> TaskList {
        let mut list = TaskList::new(
            ListId::from_string("A"),
            "Chores",
            UserId::from("alice"),
        );
        list.tasks = vec![
            task("1", Priority::Low),
            task("2", Priority::Low),
            task("3", Priority::High),
        ];
        list
    }

    #[test]
    fn test_lane_views() {
        let list = sample_list();

        let low: Vec<_> = list.lane(Priority::Low).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(low, vec!["1", "2"]);
        assert_eq!(list.lane_len(Priority::High), 1);
        assert!(list.lane(Priority::Medium).is_empty());
    }

    #[test]
    fn test_lane_index_of() {
        let list = sample_list();

        assert_eq!(
            list.lane_index_of(&TaskId::from_string("2")),
            Some((Priority::Low, 1))
        );
        assert_eq!(
            list.lane_index_of(&TaskId::from_string("3")),
            Some((Priority::High, 0))
        );
        assert_eq!(list.lane_index_of(&TaskId::from_string("nope")), None);
    }

    #[test]
    fn test_document_roundtrip() {
        let list = sample_list();

        let fields = list.to_fields().unwrap();
        assert!(fields.get("id").is_none());

        let doc = Document::new(DocumentId::from_string("A"), fields);
        let decoded = TaskList::from_document(&doc).unwrap();
        assert_eq!(decoded, list);
    }
}
