//! MoveTask command

use crate::context::ListsContext;
use crate::error::{ListsError, Result};
use crate::reorder::{apply_move, MoveOutcome};
use crate::types::{LaneKey, MoveDescriptor, TaskId};
use laneboard_operations::{async_trait, Execute, Operation};
use serde::Deserialize;
use serde_json::{json, Value};

/// Move a task to a new lane position, optimistically
///
/// The reordering engine computes the new lane partition from the current
/// local state; the result replaces the local store immediately, then the
/// source and destination lists are persisted in parallel. Both writes are
/// always attempted; a failure is surfaced as [`ListsError::Persistence`]
/// but the optimistic local state is left in place - the next fetch corrects
/// any divergence.
///
/// There is no per-list lock: overlapping moves race, last local mutation
/// wins in memory and the last remote write to complete wins durably.
#[derive(Debug, Deserialize)]
pub struct MoveTask {
    /// The task, its source lane, and its destination lane/position
    #[serde(flatten)]
    pub descriptor: MoveDescriptor,
}

impl MoveTask {
    /// Create a new MoveTask command from a full descriptor
    pub fn new(descriptor: MoveDescriptor) -> Self {
        Self { descriptor }
    }

    /// Create a MoveTask command between two lanes
    pub fn to_lane(task_id: TaskId, source: LaneKey, dest: LaneKey, dest_index: usize) -> Self {
        Self {
            descriptor: MoveDescriptor::new(task_id, source, dest, dest_index),
        }
    }
}

impl Operation for MoveTask {
    fn verb(&self) -> &'static str {
        "move"
    }
    fn noun(&self) -> &'static str {
        "task"
    }
    fn description(&self) -> &'static str {
        "Move a task to a different lane or position"
    }
}

#[async_trait]
impl Execute<ListsContext, ListsError> for MoveTask {
    async fn execute(&self, ctx: &ListsContext) -> Result<Value> {
        let lists = ctx.store().snapshot().await;

        let (lists, source, dest) = match apply_move(&lists, &self.descriptor) {
            MoveOutcome::Unchanged => {
                tracing::debug!(task = %self.descriptor.task_id, "move is a no-op");
                return Ok(json!({ "moved": false }));
            }
            MoveOutcome::Moved { lists, source, dest } => (lists, source, dest),
        };

        // Optimistic: the UI re-renders from this before any write returns
        ctx.store().replace_all(lists).await;

        if source.id == dest.id {
            if let Err(error) = ctx.write_tasks(&dest.id, &dest.tasks).await {
                tracing::warn!(
                    list = %dest.id,
                    %error,
                    "move write failed; keeping optimistic local state"
                );
                return Err(error);
            }
        } else {
            // Both writes are issued concurrently and both always attempted;
            // there is no cross-document transaction in the remote store.
            let (source_result, dest_result) = tokio::join!(
                ctx.write_tasks(&source.id, &source.tasks),
                ctx.write_tasks(&dest.id, &dest.tasks),
            );
            if source_result.is_err() || dest_result.is_err() {
                tracing::warn!(
                    source = %source.id,
                    dest = %dest.id,
                    "move write failed; keeping optimistic local state"
                );
            }
            source_result?;
            dest_result?;
        }

        let task = dest
            .find_task(&self.descriptor.task_id)
            .ok_or_else(|| ListsError::TaskNotFound {
                id: self.descriptor.task_id.to_string(),
            })?;

        Ok(json!({
            "moved": true,
            "task": serde_json::to_value(task)?,
            "source": source.id,
            "dest": dest.id,
        }))
    }
}
