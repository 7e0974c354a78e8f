//! # Laneboard Operations
//!
//! This crate provides the `Execute` and `Operation` traits for defining
//! commands. Commands are structs where the fields ARE the parameters - no
//! duplication.
//!
//! ## Example
//!
//! ```ignore
//! use laneboard_operations::*;
//!
//! /// Create a new list
//! #[derive(Debug, Deserialize)]
//! pub struct CreateList {
//!     /// The list name
//!     pub name: String,
//! }
//!
//! impl Operation for CreateList {
//!     fn verb(&self) -> &'static str { "create" }
//!     fn noun(&self) -> &'static str { "list" }
//!     fn description(&self) -> &'static str { "Create a new list" }
//! }
//!
//! #[async_trait]
//! impl Execute<ListsContext, ListsError> for CreateList {
//!     async fn execute(&self, ctx: &ListsContext) -> Result<Value, ListsError> {
//!         // implementation returns a JSON value
//!     }
//! }
//! ```

mod operation;
mod processor;

pub use operation::{Execute, Operation};
pub use processor::OperationProcessor;

// Re-export for use in implementations
pub use async_trait::async_trait;
pub use serde_json::Value;
