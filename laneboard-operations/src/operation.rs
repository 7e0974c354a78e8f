//! The Execute and Operation traits

use async_trait::async_trait;
use serde_json::Value;

/// Execute a command against a context, producing a JSON value
///
/// `C` is the context type (access primitives, no business logic) and `E` is
/// the domain error type. Commands do all the work.
#[async_trait]
pub trait Execute<C, E> {
    async fn execute(&self, ctx: &C) -> Result<Value, E>;
}

/// Metadata describing a command as a verb/noun pair
pub trait Operation {
    /// The verb (e.g. "add", "move")
    fn verb(&self) -> &'static str;

    /// The noun (e.g. "task", "list")
    fn noun(&self) -> &'static str;

    /// Human-readable description of what the operation does
    fn description(&self) -> &'static str;

    /// Canonical op string (e.g. "move task")
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}
