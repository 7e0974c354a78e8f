//! AuthProvider trait and the in-memory implementation

use crate::error::AuthError;
use crate::ids::UserId;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;

/// A hosted identity service with session-based sign-in state
///
/// The application never signs users in itself; it observes the session the
/// provider reports and can request sign-out.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// The currently signed-in user, if any
    fn current_user(&self) -> Option<UserId>;

    /// Terminate the session. On failure the session is unchanged.
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Subscribe to session changes. The receiver always holds the latest
    /// session state.
    fn subscribe(&self) -> watch::Receiver<Option<UserId>>;
}

/// In-memory [`AuthProvider`] driven by explicit `sign_in`/`sign_out` calls
pub struct MemoryAuth {
    session: watch::Sender<Option<UserId>>,
    fail_sign_out: AtomicBool,
}

impl MemoryAuth {
    /// Create a provider with no signed-in user
    pub fn new() -> Self {
        let (session, _) = watch::channel(None);
        Self {
            session,
            fail_sign_out: AtomicBool::new(false),
        }
    }

    /// Create a provider with the given user already signed in
    pub fn signed_in(user: impl Into<UserId>) -> Self {
        let auth = Self::new();
        auth.sign_in(user);
        auth
    }

    /// Sign a user in, notifying subscribers
    pub fn sign_in(&self, user: impl Into<UserId>) {
        self.session.send_replace(Some(user.into()));
    }

    /// Make subsequent sign-out calls fail
    pub fn fail_sign_out(&self, fail: bool) {
        self.fail_sign_out.store(fail, Ordering::SeqCst);
    }
}

impl Default for MemoryAuth {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthProvider for MemoryAuth {
    fn current_user(&self) -> Option<UserId> {
        self.session.borrow().clone()
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        if self.fail_sign_out.load(Ordering::SeqCst) {
            return Err(AuthError::sign_out_failed("sign-out failure injected"));
        }
        self.session.send_replace(None);
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<Option<UserId>> {
        self.session.subscribe()
    }
}
