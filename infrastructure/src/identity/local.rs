//! Local identity adapter
//!
//! An in-process session: whoever is named in config (or via `--user`),
//! or failing that in the saved session file, is treated as signed in.
//! Changes are broadcast over a `watch` channel.

use super::session::{SessionError, SessionFile};
use crate::config::FileIdentityConfig;
use skinpal_application::{AuthChanges, CurrentUser, IdentityPort};
use skinpal_domain::{DomainError, UserId};
use tokio::sync::watch;
use tracing::{debug, info, warn};

pub struct LocalIdentity {
    sender: watch::Sender<Option<CurrentUser>>,
}

impl LocalIdentity {
    /// Start with nobody signed in
    pub fn new() -> Self {
        Self {
            sender: watch::Sender::new(None),
        }
    }

    /// Build from the `[identity]` config section.
    ///
    /// A blank or missing `user` leaves the session signed out.
    pub fn from_config(config: &FileIdentityConfig) -> Result<Self, DomainError> {
        let identity = Self::new();
        if let Some(user) = config.user.as_deref()
            && !user.trim().is_empty()
        {
            let mut current = CurrentUser::new(UserId::new(user)?);
            if let Some(email) = &config.email {
                current = current.with_email(email.clone());
            }
            identity.sign_in(current);
        }
        Ok(identity)
    }

    /// Build from config, falling back to a session saved by `signin`.
    ///
    /// A configured user always wins over the session file. An unreadable
    /// session is ignored so `signout` can still clear it.
    pub async fn restore(
        config: &FileIdentityConfig,
        session: &SessionFile,
    ) -> Result<Self, SessionError> {
        let identity = Self::from_config(config)?;
        if identity.current_user().is_some() {
            return Ok(identity);
        }

        match session.load().await {
            Ok(Some(user)) => identity.sign_in(user),
            Ok(None) => debug!("No saved session"),
            Err(e @ SessionError::Io { .. }) => return Err(e),
            Err(e) => warn!("Ignoring saved session: {}", e),
        }
        Ok(identity)
    }

    pub fn sign_in(&self, user: CurrentUser) {
        info!("Signed in as {}", user.id);
        self.sender.send_replace(Some(user));
    }

    pub fn sign_out(&self) {
        if let Some(previous) = self.sender.send_replace(None) {
            info!("Signed out {}", previous.id);
        } else {
            debug!("Sign-out requested with no active session");
        }
    }
}

impl Default for LocalIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityPort for LocalIdentity {
    fn current_user(&self) -> Option<CurrentUser> {
        self.sender.borrow().clone()
    }

    fn subscribe(&self) -> AuthChanges {
        AuthChanges::new(self.sender.subscribe())
    }
}
