//! Application layer for skinpal
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    identity::{AuthChanges, CurrentUser, IdentityPort},
    profile_store::{ProfileStoreError, ProfileStorePort},
};
pub use use_cases::get_profile::{GetProfileError, GetProfileUseCase};
pub use use_cases::get_recommendations::{
    GetRecommendationsError, GetRecommendationsUseCase, RecommendationOutcome,
};
pub use use_cases::submit_questionnaire::{
    SubmitQuestionnaireError, SubmitQuestionnaireInput, SubmitQuestionnaireUseCase,
};
