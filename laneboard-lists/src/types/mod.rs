//! Core types for the list engine

mod ids;
mod lane;
mod list;
mod task;

// Re-export all types
pub use ids::{ListId, TaskId};
pub use lane::{LaneKey, MoveDescriptor};
pub use list::TaskList;
pub use task::{Priority, Task};
