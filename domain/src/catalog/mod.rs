//! Recommendation catalog subdomain.
//!
//! The catalog is a tagged rule table: product rows and tip rows, each
//! with optional match criteria, plus one fallback row per category.
//! It is configuration data, built once and shared read-only.

pub mod category;
pub mod entities;
pub mod rule;

#[cfg(test)]
pub(crate) mod fixtures;

pub use category::{Category, Dimension};
pub use entities::{Catalog, CatalogError, FallbackProducts, SUPPORTED_CATALOG_VERSION};
pub use rule::{ProductKey, ProductRule, TipRule, TipTier};
