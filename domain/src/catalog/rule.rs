//! Catalog rows
//!
//! A [`ProductRule`] maps match criteria to a product short-list; a
//! [`TipRule`] attaches one tip to a category, optionally gated on a
//! profile value. Omitted criteria are wildcards.

use super::category::{Category, Dimension};
use crate::profile::{Budget, Concern, SkinProfile, SkinType};
use serde::{Deserialize, Serialize};

/// Lookup key for the product table of one category
///
/// Only the dimensions the category is keyed by are populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductKey {
    pub category: Category,
    pub skin_type: Option<SkinType>,
    pub concern: Option<Concern>,
    pub budget: Budget,
}

impl ProductKey {
    pub fn for_profile(category: Category, profile: &SkinProfile) -> Self {
        Self {
            category,
            skin_type: category
                .keys_products_by(Dimension::SkinType)
                .then_some(profile.skin_type),
            concern: category
                .keys_products_by(Dimension::Concern)
                .then_some(profile.concern),
            budget: profile.budget,
        }
    }
}

/// Product short-list for every profile matching the criteria
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductRule {
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_type: Option<SkinType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concern: Option<Concern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Budget>,
    pub products: Vec<String>,
}

impl ProductRule {
    pub fn new(category: Category, products: Vec<String>) -> Self {
        Self {
            category,
            skin_type: None,
            concern: None,
            budget: None,
            products,
        }
    }

    pub fn with_skin_type(mut self, skin_type: SkinType) -> Self {
        self.skin_type = Some(skin_type);
        self
    }

    pub fn with_concern(mut self, concern: Concern) -> Self {
        self.concern = Some(concern);
        self
    }

    pub fn with_budget(mut self, budget: Budget) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Check whether this row applies to the key
    pub fn matches(&self, key: &ProductKey) -> bool {
        self.category == key.category
            && criterion_matches(self.skin_type, key.skin_type)
            && criterion_matches(self.concern, key.concern)
            && criterion_matches(self.budget, Some(key.budget))
    }

    /// Number of constrained dimensions; more specific rows win
    pub fn specificity(&self) -> usize {
        self.constrained_dimensions().len()
    }

    pub fn constrained_dimensions(&self) -> Vec<Dimension> {
        let mut dims = Vec::with_capacity(3);
        if self.skin_type.is_some() {
            dims.push(Dimension::SkinType);
        }
        if self.concern.is_some() {
            dims.push(Dimension::Concern);
        }
        if self.budget.is_some() {
            dims.push(Dimension::Budget);
        }
        dims
    }

    pub(crate) fn same_criteria(&self, other: &ProductRule) -> bool {
        self.category == other.category
            && self.skin_type == other.skin_type
            && self.concern == other.concern
            && self.budget == other.budget
    }
}

fn criterion_matches<T: PartialEq>(criterion: Option<T>, value: Option<T>) -> bool {
    match criterion {
        None => true,
        Some(expected) => value == Some(expected),
    }
}

/// Where a tip sits in the output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TipTier {
    /// Applies to everyone
    Base,
    /// Gated on skin type
    SkinType,
    /// Gated on concern
    Concern,
}

impl TipTier {
    pub const ORDER: [TipTier; 3] = [TipTier::Base, TipTier::SkinType, TipTier::Concern];
}

/// A single tip for a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TipRule {
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_type: Option<SkinType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concern: Option<Concern>,
    pub text: String,
}

impl TipRule {
    pub fn base(category: Category, text: impl Into<String>) -> Self {
        Self {
            category,
            skin_type: None,
            concern: None,
            text: text.into(),
        }
    }

    pub fn for_skin_type(category: Category, skin_type: SkinType, text: impl Into<String>) -> Self {
        Self {
            skin_type: Some(skin_type),
            ..Self::base(category, text)
        }
    }

    pub fn for_concern(category: Category, concern: Concern, text: impl Into<String>) -> Self {
        Self {
            concern: Some(concern),
            ..Self::base(category, text)
        }
    }

    /// Tier of this tip. Catalog validation rejects rows gated on both
    /// dimensions.
    pub fn tier(&self) -> TipTier {
        match (self.skin_type, self.concern) {
            (_, Some(_)) => TipTier::Concern,
            (Some(_), None) => TipTier::SkinType,
            (None, None) => TipTier::Base,
        }
    }

    /// Check whether this tip applies given the (category-relevant) profile values
    pub fn applies(&self, skin_type: Option<SkinType>, concern: Option<Concern>) -> bool {
        criterion_matches(self.skin_type, skin_type) && criterion_matches(self.concern, concern)
    }
}
