//! Pure reordering engine for lane moves
//!
//! Computes the new partition of tasks across source and destination lanes
//! for one move. No I/O: the sync layer applies the result optimistically
//! and persists it.
//!
//! Lanes are filtered views over each list's canonical `tasks` sequence, so
//! a lane-relative index and an absolute sequence index are different
//! address spaces. The engine always locates the moved task by id and
//! translates the destination index by counting same-lane tasks; only the
//! relative order within each lane is contractually preserved.

use crate::types::{MoveDescriptor, Priority, Task, TaskList};
use std::sync::Arc;

/// Result of applying a move to a sequence of lists
#[derive(Debug, Clone)]
pub enum MoveOutcome {
    /// Nothing to do: the destination equals the source lane and index, or
    /// the descriptor references a list/task that is not present (a
    /// caller-level inconsistency, deliberately not an error)
    Unchanged,
    /// The move was applied. `lists` is the full sequence with exactly the
    /// source and destination entries rebuilt; every untouched entry is the
    /// same `Arc` as the input, so upstream change detection by pointer
    /// identity stays cheap.
    Moved {
        lists: Vec<Arc<TaskList>>,
        source: Arc<TaskList>,
        dest: Arc<TaskList>,
    },
}

impl MoveOutcome {
    /// Whether the move changed anything
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// Apply a move descriptor to the current sequence of lists
pub fn apply_move(lists: &[Arc<TaskList>], mv: &MoveDescriptor) -> MoveOutcome {
    let Some(source) = lists.iter().find(|l| l.id == mv.source_list) else {
        return MoveOutcome::Unchanged;
    };
    let Some(dest) = lists.iter().find(|l| l.id == mv.dest_list) else {
        return MoveOutcome::Unchanged;
    };

    // Locate by id, never by position: the drag index is lane-relative and
    // the sequence interleaves lanes.
    let Some(task_pos) = source.tasks.iter().position(|t| t.id == mv.task_id) else {
        return MoveOutcome::Unchanged;
    };

    // Dropping a task back where it was picked up is an explicit no-op.
    if mv.is_same_list() && mv.source_priority == mv.dest_priority {
        let lane_index = count_lane_tasks(&source.tasks[..task_pos], mv.source_priority);
        if lane_index == mv.dest_index {
            return MoveOutcome::Unchanged;
        }
    }

    let mut source_tasks = source.tasks.clone();
    let mut moved = source_tasks.remove(task_pos);
    // Re-lane before insertion so lane filtering partitions it correctly.
    moved.priority = mv.dest_priority;

    if mv.is_same_list() {
        // Intra-list move: one underlying sequence.
        let at = absolute_insert_index(&source_tasks, mv.dest_priority, mv.dest_index);
        source_tasks.insert(at, moved);

        let new_list = Arc::new(TaskList {
            id: source.id.clone(),
            name: source.name.clone(),
            owner: source.owner.clone(),
            tasks: source_tasks,
        });
        let lists = replace(lists, [&new_list]);
        MoveOutcome::Moved {
            lists,
            source: Arc::clone(&new_list),
            dest: new_list,
        }
    } else {
        let mut dest_tasks = dest.tasks.clone();
        let at = absolute_insert_index(&dest_tasks, mv.dest_priority, mv.dest_index);
        dest_tasks.insert(at, moved);

        let new_source = Arc::new(TaskList {
            id: source.id.clone(),
            name: source.name.clone(),
            owner: source.owner.clone(),
            tasks: source_tasks,
        });
        let new_dest = Arc::new(TaskList {
            id: dest.id.clone(),
            name: dest.name.clone(),
            owner: dest.owner.clone(),
            tasks: dest_tasks,
        });
        let lists = replace(lists, [&new_source, &new_dest]);
        MoveOutcome::Moved {
            lists,
            source: new_source,
            dest: new_dest,
        }
    }
}

/// Translate a lane-relative index to an absolute position in `tasks`:
/// the position of the `lane_index`-th same-lane task, clamped to after the
/// lane's last task when out of bounds (and to the sequence end for an
/// empty lane, which puts the task at the lane head).
fn absolute_insert_index(tasks: &[Task], priority: Priority, lane_index: usize) -> usize {
    let mut seen = 0;
    for (i, task) in tasks.iter().enumerate() {
        if task.priority == priority {
            if seen == lane_index {
                return i;
            }
            seen += 1;
        }
    }
    tasks.len()
}

fn count_lane_tasks(tasks: &[Task], priority: Priority) -> usize {
    tasks.iter().filter(|t| t.priority == priority).count()
}

/// Rebuild the sequence, substituting the given replacement lists by id and
/// passing every other entry through as the same `Arc`
fn replace<'a>(
    lists: &[Arc<TaskList>],
    replacements: impl IntoIterator<Item = &'a Arc<TaskList>>,
) -> Vec<Arc<TaskList>> {
    let replacements: Vec<&Arc<TaskList>> = replacements.into_iter().collect();
    lists
        .iter()
        .map(|list| {
            replacements
                .iter()
                .find(|r| r.id == list.id)
                .map(|r| Arc::clone(r))
                .unwrap_or_else(|| Arc::clone(list))
        })
        .collect()
}
