//! Logout command

use crate::context::ListsContext;
use crate::error::{ListsError, Result};
use laneboard_operations::{async_trait, Execute, Operation};
use serde::Deserialize;
use serde_json::{json, Value};

/// Terminate the session and clear local list state
///
/// If the auth provider fails the sign-out, the session and local state are
/// left untouched and the failure is surfaced.
#[derive(Debug, Default, Deserialize)]
pub struct Logout;

impl Logout {
    pub fn new() -> Self {
        Self
    }
}

impl Operation for Logout {
    fn verb(&self) -> &'static str {
        "logout"
    }
    fn noun(&self) -> &'static str {
        "session"
    }
    fn description(&self) -> &'static str {
        "Sign out and clear local lists"
    }
}

#[async_trait]
impl Execute<ListsContext, ListsError> for Logout {
    async fn execute(&self, ctx: &ListsContext) -> Result<Value> {
        ctx.auth().sign_out().await?;

        ctx.set_session(None).await;
        ctx.store().clear().await;
        tracing::debug!("signed out; local lists cleared");

        Ok(json!({ "signedOut": true }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::CreateList;
    use laneboard_remote::{MemoryAuth, MemoryRemote, UserId};
    use std::sync::Arc;

    fn setup() -> (Arc<MemoryAuth>, ListsContext) {
        let auth = Arc::new(MemoryAuth::signed_in("alice"));
        let ctx = ListsContext::new(Arc::new(MemoryRemote::new()), auth.clone());
        (auth, ctx)
    }

    #[tokio::test]
    async fn test_logout_clears_state() {
        let (_auth, ctx) = setup();
        CreateList::new("Chores").execute(&ctx).await.unwrap();
        assert!(!ctx.store().is_empty().await);

        let result = Logout::new().execute(&ctx).await.unwrap();
        assert_eq!(result["signedOut"], true);
        assert!(ctx.session().await.is_none());
        assert!(ctx.store().is_empty().await);
    }

    #[tokio::test]
    async fn test_logout_failure_leaves_session() {
        let (auth, ctx) = setup();
        CreateList::new("Chores").execute(&ctx).await.unwrap();
        auth.fail_sign_out(true);

        let result = Logout::new().execute(&ctx).await;
        assert!(matches!(result, Err(ListsError::Auth(_))));

        // Session and local state untouched on failure
        assert_eq!(ctx.session().await, Some(UserId::from("alice")));
        assert!(!ctx.store().is_empty().await);
    }
}
