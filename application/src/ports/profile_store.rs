//! Profile store port
//!
//! Defines the interface for reading and writing a user's questionnaire
//! answers. Keyed by user id; a missing record is the normal
//! pre-questionnaire state, reported as [`ProfileState::Absent`].

use async_trait::async_trait;
use skinpal_domain::{ProfileState, SkinProfile, UserId};
use thiserror::Error;

/// Errors that can occur during profile store operations
#[derive(Error, Debug)]
pub enum ProfileStoreError {
    #[error("Profile store unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt profile record for user {user}: {reason}")]
    Corrupt { user: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ProfileStoreError {
    /// Whether retrying the same operation may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ProfileStoreError::Unavailable(_) | ProfileStoreError::Io(_)
        )
    }
}

/// Port for the profile store collaborator
#[async_trait]
pub trait ProfileStorePort: Send + Sync {
    /// Load the profile for a user
    async fn get_profile(&self, user: &UserId) -> Result<ProfileState, ProfileStoreError>;

    /// Create or replace the profile for a user
    async fn save_profile(
        &self,
        user: &UserId,
        profile: &SkinProfile,
    ) -> Result<(), ProfileStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(ProfileStoreError::Unavailable("offline".into()).is_retryable());
        assert!(
            ProfileStoreError::Io(std::io::Error::new(std::io::ErrorKind::Other, "x"))
                .is_retryable()
        );
        assert!(
            !ProfileStoreError::Corrupt {
                user: "u".into(),
                reason: "bad".into()
            }
            .is_retryable()
        );
        assert!(!ProfileStoreError::Serialization("x".into()).is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = ProfileStoreError::Unavailable("offline".into());
        assert_eq!(err.to_string(), "Profile store unavailable: offline");
    }
}
