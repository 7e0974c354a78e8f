//! To-do list domain: lists, prioritized tasks, and the reorder engine.
//!
//! A task list is a flat, ordered vector of tasks; the three priority
//! lanes (High, Medium, Low) are filtered views over that vector, never
//! stored separately. Moving a task between lanes is a pure transformation
//! over immutable list snapshots ([`reorder::apply_move`]) followed by an
//! optimistic local update and parallel persistence of the affected lists.
//!
//! Commands follow the operation pattern: each one is a struct implementing
//! [`Execute`] against a [`ListsContext`], dispatched through a
//! [`ListsOperationProcessor`] that adds timing and logging.
//!
//! ```no_run
//! use laneboard_lists::{AddTask, CreateList, Execute, ListId, ListsContext};
//! use laneboard_remote::{MemoryAuth, MemoryRemote};
//! use std::sync::Arc;
//!
//! # async fn example() -> laneboard_lists::Result<()> {
//! let ctx = ListsContext::new(
//!     Arc::new(MemoryRemote::new()),
//!     Arc::new(MemoryAuth::signed_in("alice")),
//! );
//!
//! let list = CreateList::new("Groceries").execute(&ctx).await?;
//! let list_id = ListId::from_string(list["id"].as_str().unwrap());
//!
//! AddTask::new(list_id, "Buy milk")
//!     .with_description("Whole milk")
//!     .with_due_date("2026-09-01")
//!     .execute(&ctx)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod error;
pub mod list;
pub mod processor;
pub mod reorder;
pub mod session;
pub mod store;
pub mod task;
pub mod types;

pub use context::{ListsContext, LISTS_COLLECTION};
pub use error::{ListsError, Result};
pub use list::{CreateList, FetchLists, GetList};
pub use processor::ListsOperationProcessor;
pub use reorder::{apply_move, MoveOutcome};
pub use session::{spawn_session_watcher, Logout};
pub use store::ListStore;
pub use task::{AddTask, MoveTask};
pub use types::{LaneKey, ListId, MoveDescriptor, Priority, Task, TaskId, TaskList};

// Re-export the operation machinery so downstream callers only need this crate
pub use laneboard_operations::{async_trait, Execute, Operation, OperationProcessor};
