//! Recommendation generation.

pub mod engine;
pub mod value_objects;

pub use engine::RecommendationEngine;
pub use value_objects::{CategoryRecommendation, RecommendationSet};
