//! OperationProcessor - uniform command execution

use crate::operation::{Execute, Operation};
use async_trait::async_trait;
use serde_json::Value;

/// Processes operations uniformly - implementations add cross-cutting
/// behavior (timing, logging, attribution) around `Execute::execute`
#[async_trait]
pub trait OperationProcessor<C, E>
where
    C: Send + Sync,
    E: Send,
{
    /// Execute the operation against the context
    async fn process<O>(&self, op: &O, ctx: &C) -> Result<Value, E>
    where
        O: Execute<C, E> + Operation + Sync;
}
