//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod get_profile;
pub mod get_recommendations;
pub mod submit_questionnaire;
pub(crate) mod shared;
