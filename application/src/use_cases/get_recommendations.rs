//! Get Recommendations use case
//!
//! Loads the signed-in user's profile and runs the recommendation engine.
//! A user without a profile is sent to the questionnaire instead; the
//! engine is never invoked without a profile.

use super::shared::signed_in_user;
use crate::ports::identity::IdentityPort;
use crate::ports::profile_store::{ProfileStoreError, ProfileStorePort};
use skinpal_domain::{ProfileState, RecommendationEngine, RecommendationSet, SkinProfile};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while fetching recommendations
#[derive(Error, Debug)]
pub enum GetRecommendationsError {
    #[error("You must be signed in to see recommendations")]
    NotSignedIn,

    #[error("Failed to load your profile: {0}")]
    Store(#[from] ProfileStoreError),
}

impl GetRecommendationsError {
    pub fn is_retryable(&self) -> bool {
        match self {
            GetRecommendationsError::Store(e) => e.is_retryable(),
            GetRecommendationsError::NotSignedIn => false,
        }
    }
}

/// Result of asking for recommendations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendationOutcome {
    /// The user has a profile; here is their routine
    Ready {
        profile: SkinProfile,
        recommendations: RecommendationSet,
    },
    /// The user has not completed the questionnaire yet
    QuestionnaireRequired,
}

impl RecommendationOutcome {
    /// Run the engine only when a profile is present
    pub fn from_state(engine: &RecommendationEngine, state: ProfileState) -> Self {
        match state {
            ProfileState::Present(profile) => RecommendationOutcome::Ready {
                profile,
                recommendations: engine.generate_recommendations(&profile),
            },
            ProfileState::Absent => RecommendationOutcome::QuestionnaireRequired,
        }
    }
}

/// Use case for producing the signed-in user's routine
pub struct GetRecommendationsUseCase<I: IdentityPort, S: ProfileStorePort> {
    identity: Arc<I>,
    store: Arc<S>,
    engine: RecommendationEngine,
}

impl<I: IdentityPort, S: ProfileStorePort> GetRecommendationsUseCase<I, S> {
    pub fn new(identity: Arc<I>, store: Arc<S>, engine: RecommendationEngine) -> Self {
        Self {
            identity,
            store,
            engine,
        }
    }

    pub async fn execute(&self) -> Result<RecommendationOutcome, GetRecommendationsError> {
        let user =
            signed_in_user(self.identity.as_ref()).ok_or(GetRecommendationsError::NotSignedIn)?;

        let state = self.store.get_profile(&user).await?;
        let outcome = RecommendationOutcome::from_state(&self.engine, state);

        match &outcome {
            RecommendationOutcome::Ready {
                profile,
                recommendations,
            } => info!(
                "Generated {} recommendation categories for {} ({})",
                recommendations.len(),
                user,
                profile
            ),
            RecommendationOutcome::QuestionnaireRequired => {
                debug!("User {} has not completed the questionnaire", user)
            }
        }

        Ok(outcome)
    }
}
