//! Operation processor for list commands
//!
//! Wraps command execution with timing and structured logging so every
//! operation leaves a trace of what ran, how long it took, and whether
//! it succeeded.

use crate::context::ListsContext;
use crate::error::ListsError;
use async_trait::async_trait;
use laneboard_operations::{Execute, Operation, OperationProcessor};
use serde_json::Value;
use std::time::Instant;

/// Executes list operations and logs each one
#[derive(Debug, Default, Clone)]
pub struct ListsOperationProcessor;

impl ListsOperationProcessor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OperationProcessor<ListsContext, ListsError> for ListsOperationProcessor {
    async fn process<O>(&self, op: &O, ctx: &ListsContext) -> Result<Value, ListsError>
    where
        O: Execute<ListsContext, ListsError> + Operation + Sync,
    {
        let start = Instant::now();
        let result = op.execute(ctx).await;
        let duration_ms = start.elapsed().as_millis();

        match &result {
            Ok(_) => {
                tracing::info!(
                    operation = %op.op_string(),
                    duration_ms = duration_ms as u64,
                    "operation completed"
                );
            }
            Err(e) => {
                tracing::warn!(
                    operation = %op.op_string(),
                    duration_ms = duration_ms as u64,
                    error = %e,
                    "operation failed"
                );
            }
        }

        result
    }
}
