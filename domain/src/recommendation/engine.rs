//! Recommendation engine
//!
//! Maps a [`SkinProfile`] to an ordered [`RecommendationSet`] using the
//! catalog tables. Every lookup has a defined fallback, so generation is
//! total: it never fails and never returns an empty product list.
//!
//! # Algorithm
//!
//! ```text
//! Cleanser     products: skin_type × budget   tips: skin_type + concern
//! Moisturizer  products: skin_type × budget   tips: skin_type + concern
//! Treatment    products: concern × budget     tips: concern          (only if concern != none)
//! Sunscreen    products: skin_type × budget   tips: skin_type
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use skinpal_domain::{
//!     Budget, Catalog, Category, Concern, FallbackProducts, RecommendationEngine, SkinProfile,
//!     SkinType,
//! };
//!
//! let fallbacks = FallbackProducts {
//!     cleanser: vec!["Cetaphil Gentle Skin Cleanser".into()],
//!     moisturizer: vec!["CeraVe Moisturizing Cream".into()],
//!     treatment: vec!["The Ordinary Niacinamide 10% + Zinc 1%".into()],
//!     sunscreen: vec!["Neutrogena Ultra Sheer Dry-Touch SPF 50+".into()],
//! };
//! let catalog = Catalog::new(1, fallbacks, vec![], vec![]).unwrap();
//! let engine = RecommendationEngine::new(Arc::new(catalog));
//!
//! let profile = SkinProfile::new(SkinType::Oily, Concern::None, Budget::Below500);
//! let set = engine.generate_recommendations(&profile);
//! assert_eq!(
//!     set.categories(),
//!     vec![Category::Cleanser, Category::Moisturizer, Category::Sunscreen]
//! );
//! ```

use super::value_objects::{CategoryRecommendation, RecommendationSet};
use crate::catalog::{Catalog, Category, Dimension, ProductKey, TipTier};
use crate::profile::{Concern, SkinProfile, SkinType};
use std::sync::Arc;

/// Stateless recommendation engine over a shared, read-only catalog
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: Arc<Catalog>,
}

impl RecommendationEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Generate the full routine for a profile
    pub fn generate_recommendations(&self, profile: &SkinProfile) -> RecommendationSet {
        let items = Category::ALL
            .into_iter()
            .filter(|category| *category != Category::Treatment || profile.concern.needs_treatment())
            .map(|category| self.recommend(category, profile))
            .collect();

        RecommendationSet::from_ordered(items)
    }

    /// Recommendation for a single category, keyed the way that category is keyed
    pub fn recommend(&self, category: Category, profile: &SkinProfile) -> CategoryRecommendation {
        let products = self.select_products(&ProductKey::for_profile(category, profile));

        let skin_type = category
            .keys_tips_by(Dimension::SkinType)
            .then_some(profile.skin_type);
        let concern = category
            .keys_tips_by(Dimension::Concern)
            .then_some(profile.concern);
        let tips = self.select_tips(category, skin_type, concern);

        CategoryRecommendation {
            category,
            products,
            tips,
        }
    }

    /// Product short-list for a key, or the category fallback if no row matches
    pub fn select_products(&self, key: &ProductKey) -> Vec<String> {
        match self.catalog.find_product_rule(key) {
            Some(rule) => rule.products.clone(),
            None => self.catalog.fallback_for(key.category).to_vec(),
        }
    }

    /// Base tips, then skin-type tips, then concern tips; each group in table order
    pub fn select_tips(
        &self,
        category: Category,
        skin_type: Option<SkinType>,
        concern: Option<Concern>,
    ) -> Vec<String> {
        let mut tips = Vec::new();
        for tier in TipTier::ORDER {
            tips.extend(
                self.catalog
                    .tips_for(category)
                    .filter(|tip| tip.tier() == tier && tip.applies(skin_type, concern))
                    .map(|tip| tip.text.clone()),
            );
        }
        tips
    }
}
