//! Submit Questionnaire use case
//!
//! Validates the three questionnaire answers and saves them as the
//! signed-in user's profile.

use super::shared::signed_in_user;
use crate::ports::identity::IdentityPort;
use crate::ports::profile_store::{ProfileStoreError, ProfileStorePort};
use skinpal_domain::{DomainError, SkinProfile};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while submitting the questionnaire
#[derive(Error, Debug)]
pub enum SubmitQuestionnaireError {
    #[error("You must be signed in to submit your skin profile")]
    NotSignedIn,

    #[error("Invalid answers: {0}")]
    InvalidAnswers(#[from] DomainError),

    #[error("Failed to save your responses: {0}")]
    Store(#[from] ProfileStoreError),
}

impl SubmitQuestionnaireError {
    /// Whether the user can simply try again
    pub fn is_retryable(&self) -> bool {
        match self {
            SubmitQuestionnaireError::Store(e) => e.is_retryable(),
            _ => false,
        }
    }
}

/// Raw answers as collected from the user
#[derive(Debug, Clone, Default)]
pub struct SubmitQuestionnaireInput {
    pub skin_type: String,
    pub concern: String,
    pub budget: String,
}

impl SubmitQuestionnaireInput {
    pub fn new(
        skin_type: impl Into<String>,
        concern: impl Into<String>,
        budget: impl Into<String>,
    ) -> Self {
        Self {
            skin_type: skin_type.into(),
            concern: concern.into(),
            budget: budget.into(),
        }
    }
}

/// Use case for saving questionnaire answers
pub struct SubmitQuestionnaireUseCase<I: IdentityPort, S: ProfileStorePort> {
    identity: Arc<I>,
    store: Arc<S>,
}

impl<I: IdentityPort, S: ProfileStorePort> SubmitQuestionnaireUseCase<I, S> {
    pub fn new(identity: Arc<I>, store: Arc<S>) -> Self {
        Self { identity, store }
    }

    pub async fn execute(
        &self,
        input: SubmitQuestionnaireInput,
    ) -> Result<SkinProfile, SubmitQuestionnaireError> {
        let user =
            signed_in_user(self.identity.as_ref()).ok_or(SubmitQuestionnaireError::NotSignedIn)?;

        let profile = SkinProfile::from_answers(&input.skin_type, &input.concern, &input.budget)?;

        if let Err(e) = self.store.save_profile(&user, &profile).await {
            warn!("Saving profile for {} failed: {}", user, e);
            return Err(e.into());
        }

        info!("Saved profile for {}: {}", user, profile);
        Ok(profile)
    }
}
