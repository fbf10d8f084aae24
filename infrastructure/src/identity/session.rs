//! Persisted sign-in session
//!
//! `skinpal signin` records the user in a small JSON file so later runs
//! start signed in; `skinpal signout` removes it.
//!
//! ```json
//! { "user": "alice", "email": "alice@example.com" }
//! ```

use serde::{Deserialize, Serialize};
use skinpal_application::CurrentUser;
use skinpal_domain::{DomainError, UserId};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to access session file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Session file {path} is unreadable: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    #[error("Session file names an invalid user: {0}")]
    InvalidUser(#[from] DomainError),
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    user: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

/// Session file on disk
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> SessionError {
        SessionError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// The signed-in user recorded on disk, if any
    pub async fn load(&self) -> Result<Option<CurrentUser>, SessionError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        let stored: StoredSession =
            serde_json::from_str(&content).map_err(|e| SessionError::Corrupt {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        let mut user = CurrentUser::new(UserId::new(stored.user)?);
        if let Some(email) = stored.email {
            user = user.with_email(email);
        }
        debug!("Restored session for {} from {}", user.id, self.path.display());
        Ok(Some(user))
    }

    pub async fn save(&self, user: &CurrentUser) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }

        let stored = StoredSession {
            user: user.id.to_string(),
            email: user.email.clone(),
        };
        let json = serde_json::to_string_pretty(&stored).map_err(|e| SessionError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| self.io_error(e))?;
        info!("Saved session for {} to {}", user.id, self.path.display());
        Ok(())
    }

    /// Remove the session. Returns whether one existed.
    pub async fn clear(&self) -> Result<bool, SessionError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                info!("Removed session file {}", self.path.display());
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(self.io_error(e)),
        }
    }
}
