//! Lane addressing and move descriptors

use super::ids::{ListId, TaskId};
use super::task::Priority;
use serde::{Deserialize, Serialize};

/// The addressable drop target: one priority lane of one list
///
/// Derived, never persisted - reconstructed from `(list, priority)` on read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaneKey {
    pub list: ListId,
    pub priority: Priority,
}

impl LaneKey {
    pub fn new(list: ListId, priority: Priority) -> Self {
        Self { list, priority }
    }
}

impl std::fmt::Display for LaneKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.list, self.priority)
    }
}

/// Everything identifying one drag-end event: the task, its source lane,
/// and the destination lane plus position within that lane
///
/// `dest_index` counts among same-lane tasks only; it is translated to an
/// absolute sequence position by the reordering engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveDescriptor {
    pub task_id: TaskId,
    pub source_list: ListId,
    pub source_priority: Priority,
    pub dest_list: ListId,
    pub dest_priority: Priority,
    pub dest_index: usize,
}

impl MoveDescriptor {
    pub fn new(
        task_id: TaskId,
        source: LaneKey,
        dest: LaneKey,
        dest_index: usize,
    ) -> Self {
        Self {
            task_id,
            source_list: source.list,
            source_priority: source.priority,
            dest_list: dest.list,
            dest_priority: dest.priority,
            dest_index,
        }
    }

    pub fn source_lane(&self) -> LaneKey {
        LaneKey::new(self.source_list.clone(), self.source_priority)
    }

    pub fn dest_lane(&self) -> LaneKey {
        LaneKey::new(self.dest_list.clone(), self.dest_priority)
    }

    /// Whether source and destination are the same list
    pub fn is_same_list(&self) -> bool {
        self.source_list == self.dest_list
    }

    /// The inverse move: same task, swapped lanes, restoring `original_index`
    /// in the source lane
    pub fn inverse(&self, original_index: usize) -> Self {
        Self {
            task_id: self.task_id.clone(),
            source_list: self.dest_list.clone(),
            source_priority: self.dest_priority,
            dest_list: self.source_list.clone(),
            dest_priority: self.source_priority,
            dest_index: original_index,
        }
    }
}
