//! Auth subscription watcher

use crate::context::ListsContext;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Drive the auth provider's session subscription
///
/// Applies the current session state immediately, then follows changes:
/// a sign-in refreshes the session and fetches that user's lists; a
/// sign-out clears the session and the local store. The task ends when the
/// auth provider is dropped.
pub fn spawn_session_watcher(ctx: Arc<ListsContext>) -> JoinHandle<()> {
    let mut rx = ctx.subscribe_session();
    tokio::spawn(async move {
        loop {
            let user = rx.borrow_and_update().clone();
            match user {
                Some(user) => {
                    ctx.set_session(Some(user.clone())).await;
                    if let Err(error) = ctx.refresh_lists(&user).await {
                        tracing::warn!(owner = %user, %error, "fetch after sign-in failed");
                    }
                }
                None => {
                    ctx.set_session(None).await;
                    ctx.store().clear().await;
                }
            }

            if rx.changed().await.is_err() {
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use laneboard_remote::{AuthProvider, MemoryAuth, MemoryRemote, RemoteStore, UserId};
    use std::time::Duration;

    const POLL: Duration = Duration::from_millis(5);
    const ATTEMPTS: usize = 200;

    #[tokio::test]
    async fn test_sign_in_populates_store() {
        let remote = Arc::new(MemoryRemote::new());
        let auth = Arc::new(MemoryAuth::new());
        let ctx = Arc::new(ListsContext::new(remote.clone(), auth.clone()));

        // A list already exists remotely for alice
        let mut fields = laneboard_remote::Fields::new();
        fields.insert("name".into(), serde_json::json!("Chores"));
        fields.insert("owner".into(), serde_json::json!("alice"));
        fields.insert("tasks".into(), serde_json::json!([]));
        remote
            .create_document(crate::context::LISTS_COLLECTION, fields)
            .await
            .unwrap();

        let _watcher = spawn_session_watcher(ctx.clone());

        auth.sign_in("alice");
        let mut populated = false;
        for _ in 0..ATTEMPTS {
            if !ctx.store().is_empty().await {
                populated = true;
                break;
            }
            tokio::time::sleep(POLL).await;
        }
        assert!(populated, "sign-in should fetch lists");
        assert_eq!(ctx.session().await, Some(UserId::from("alice")));

        auth.sign_out().await.unwrap();
        let mut cleared = false;
        for _ in 0..ATTEMPTS {
            if ctx.store().is_empty().await && ctx.session().await.is_none() {
                cleared = true;
                break;
            }
            tokio::time::sleep(POLL).await;
        }
        assert!(cleared, "sign-out should clear session and store");
    }

    #[tokio::test]
    async fn test_existing_session_applied_immediately() {
        let remote = Arc::new(MemoryRemote::new());
        let auth = Arc::new(MemoryAuth::signed_in("alice"));
        let ctx = Arc::new(ListsContext::new(remote, auth));

        let _watcher = spawn_session_watcher(ctx.clone());

        let mut seen = false;
        for _ in 0..ATTEMPTS {
            if ctx.session().await == Some(UserId::from("alice")) {
                seen = true;
                break;
            }
            tokio::time::sleep(POLL).await;
        }
        assert!(seen, "watcher should apply the current session on start");
    }
}
