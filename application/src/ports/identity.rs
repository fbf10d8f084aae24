//! Identity port
//!
//! Defines the interface of the identity collaborator: who is signed in,
//! and a stream of sign-in / sign-out changes. Credentials are never seen
//! by the application layer.

use skinpal_domain::UserId;
use tokio::sync::watch;

/// The authenticated user, as reported by the identity provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: UserId,
    pub email: Option<String>,
}

impl CurrentUser {
    pub fn new(id: UserId) -> Self {
        Self { id, email: None }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Handle for observing authentication state changes.
///
/// Wraps a `watch::Receiver`, so a subscriber always sees the latest
/// state and never a backlog of stale ones.
pub struct AuthChanges {
    receiver: watch::Receiver<Option<CurrentUser>>,
}

impl AuthChanges {
    pub fn new(receiver: watch::Receiver<Option<CurrentUser>>) -> Self {
        Self { receiver }
    }

    /// The state as of now
    pub fn current(&self) -> Option<CurrentUser> {
        self.receiver.borrow().clone()
    }

    /// Wait for the next change.
    ///
    /// Returns `None` once the identity provider has been dropped.
    pub async fn changed(&mut self) -> Option<Option<CurrentUser>> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }
}

/// Port for the identity collaborator
///
/// Implementations live in the infrastructure layer.
pub trait IdentityPort: Send + Sync {
    /// Currently signed-in user, if any
    fn current_user(&self) -> Option<CurrentUser>;

    /// Subscribe to authentication state changes
    fn subscribe(&self) -> AuthChanges;
}
