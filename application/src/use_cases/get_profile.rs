//! Get Profile use case
//!
//! Returns the signed-in user's saved questionnaire answers.

use super::shared::signed_in_user;
use crate::ports::identity::IdentityPort;
use crate::ports::profile_store::{ProfileStoreError, ProfileStorePort};
use skinpal_domain::ProfileState;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GetProfileError {
    #[error("You must be signed in to view your profile")]
    NotSignedIn,

    #[error("Failed to load your profile data: {0}")]
    Store(#[from] ProfileStoreError),
}

impl GetProfileError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, GetProfileError::Store(e) if e.is_retryable())
    }
}

pub struct GetProfileUseCase<I: IdentityPort, S: ProfileStorePort> {
    identity: Arc<I>,
    store: Arc<S>,
}

impl<I: IdentityPort, S: ProfileStorePort> GetProfileUseCase<I, S> {
    pub fn new(identity: Arc<I>, store: Arc<S>) -> Self {
        Self { identity, store }
    }

    pub async fn execute(&self) -> Result<ProfileState, GetProfileError> {
        let user = signed_in_user(self.identity.as_ref()).ok_or(GetProfileError::NotSignedIn)?;
        Ok(self.store.get_profile(&user).await?)
    }
}
