//! Domain layer for skinpal
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Profile
//!
//! The three questionnaire answers (skin type, concern, budget). A user
//! either has one ([`ProfileState::Present`]) or has not answered yet
//! ([`ProfileState::Absent`]).
//!
//! ## Catalog
//!
//! Static rule tables mapping profile dimensions to product short-lists
//! and tips, with one fallback row per category.
//!
//! ## Recommendation Engine
//!
//! A pure function from profile to ordered [`RecommendationSet`]:
//! Cleanser, Moisturizer, Treatment (only with a concern), Sunscreen.

pub mod catalog;
pub mod config;
pub mod core;
pub mod profile;
pub mod recommendation;

// Re-export commonly used types
pub use catalog::{
    Catalog, CatalogError, Category, Dimension, FallbackProducts, ProductKey, ProductRule,
    SUPPORTED_CATALOG_VERSION, TipRule, TipTier,
};
pub use config::OutputFormat;
pub use core::{error::DomainError, user::UserId};
pub use profile::{Budget, Concern, ProfileState, SkinProfile, SkinType};
pub use recommendation::{CategoryRecommendation, RecommendationEngine, RecommendationSet};
