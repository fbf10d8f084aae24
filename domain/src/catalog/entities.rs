//! The validated, immutable product and tip catalog

use super::category::{Category, Dimension};
use super::rule::{ProductKey, ProductRule, TipRule};
use crate::profile::Concern;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Catalog schema version understood by this build
pub const SUPPORTED_CATALOG_VERSION: u32 = 1;

/// Catalog validation errors
///
/// Indices refer to the row position within the `products` or `tips` table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unsupported catalog version {found} (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Fallback list for {0} is empty")]
    EmptyFallback(Category),

    #[error("Product rule #{index} ({category}) has no products")]
    EmptyProductList { index: usize, category: Category },

    #[error("Blank product name in {category} list")]
    BlankProductName { category: Category },

    #[error("Product rule #{index}: {category} products are not keyed by {dimension}")]
    ProductDimension {
        index: usize,
        category: Category,
        dimension: Dimension,
    },

    #[error("Product rule #{index}: treatment cannot target concern 'none'")]
    TreatmentForNoConcern { index: usize },

    #[error("Product rules #{first} and #{second} ({category}) have identical criteria")]
    DuplicateProductRule {
        first: usize,
        second: usize,
        category: Category,
    },

    #[error("Tip #{index} ({category}) is empty")]
    EmptyTip { index: usize, category: Category },

    #[error("Tip #{index}: {category} tips cannot be gated on {dimension}")]
    TipDimension {
        index: usize,
        category: Category,
        dimension: Dimension,
    },

    #[error("Tip #{index} ({category}) is gated on both skin type and concern")]
    AmbiguousTipCondition { index: usize, category: Category },
}

/// The fixed default product list per category
///
/// Returned whenever no product rule matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FallbackProducts {
    pub cleanser: Vec<String>,
    pub moisturizer: Vec<String>,
    pub treatment: Vec<String>,
    pub sunscreen: Vec<String>,
}

impl FallbackProducts {
    pub fn for_category(&self, category: Category) -> &[String] {
        match category {
            Category::Cleanser => &self.cleanser,
            Category::Moisturizer => &self.moisturizer,
            Category::Treatment => &self.treatment,
            Category::Sunscreen => &self.sunscreen,
        }
    }
}

/// Static recommendation catalog (Value Object)
///
/// Constructed once through [`Catalog::new`], which rejects malformed
/// tables, and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    version: u32,
    fallbacks: FallbackProducts,
    products: Vec<ProductRule>,
    tips: Vec<TipRule>,
}

impl Catalog {
    pub fn new(
        version: u32,
        fallbacks: FallbackProducts,
        products: Vec<ProductRule>,
        tips: Vec<TipRule>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            version,
            fallbacks,
            products,
            tips,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn fallbacks(&self) -> &FallbackProducts {
        &self.fallbacks
    }

    pub fn product_rules(&self) -> &[ProductRule] {
        &self.products
    }

    pub fn tip_rules(&self) -> &[TipRule] {
        &self.tips
    }

    /// Most specific product rule matching the key.
    ///
    /// Ties between equally specific rows go to the earlier row.
    pub fn find_product_rule(&self, key: &ProductKey) -> Option<&ProductRule> {
        let mut best: Option<&ProductRule> = None;
        for rule in self.products.iter().filter(|rule| rule.matches(key)) {
            match best {
                Some(current) if current.specificity() >= rule.specificity() => {}
                _ => best = Some(rule),
            }
        }
        best
    }

    pub fn fallback_for(&self, category: Category) -> &[String] {
        self.fallbacks.for_category(category)
    }

    /// Tips for a category, in table order
    pub fn tips_for(&self, category: Category) -> impl Iterator<Item = &TipRule> {
        self.tips.iter().filter(move |tip| tip.category == category)
    }

    pub fn rule_count(&self, category: Category) -> usize {
        self.products
            .iter()
            .filter(|rule| rule.category == category)
            .count()
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.version != SUPPORTED_CATALOG_VERSION {
            return Err(CatalogError::UnsupportedVersion {
                found: self.version,
                supported: SUPPORTED_CATALOG_VERSION,
            });
        }

        for category in Category::ALL {
            let fallback = self.fallbacks.for_category(category);
            if fallback.is_empty() {
                return Err(CatalogError::EmptyFallback(category));
            }
            check_names(category, fallback)?;
        }

        for (index, rule) in self.products.iter().enumerate() {
            let category = rule.category;
            if rule.products.is_empty() {
                return Err(CatalogError::EmptyProductList { index, category });
            }
            check_names(category, &rule.products)?;

            if let Some(dimension) = rule
                .constrained_dimensions()
                .into_iter()
                .find(|dim| !category.keys_products_by(*dim))
            {
                return Err(CatalogError::ProductDimension {
                    index,
                    category,
                    dimension,
                });
            }

            if rule.concern == Some(Concern::None) {
                return Err(CatalogError::TreatmentForNoConcern { index });
            }

            if let Some(first) = self.products[..index]
                .iter()
                .position(|earlier| earlier.same_criteria(rule))
            {
                return Err(CatalogError::DuplicateProductRule {
                    first,
                    second: index,
                    category,
                });
            }
        }

        for (index, tip) in self.tips.iter().enumerate() {
            let category = tip.category;
            if tip.text.trim().is_empty() {
                return Err(CatalogError::EmptyTip { index, category });
            }
            if tip.skin_type.is_some() && tip.concern.is_some() {
                return Err(CatalogError::AmbiguousTipCondition { index, category });
            }

            let gated_on = if tip.skin_type.is_some() {
                Some(Dimension::SkinType)
            } else if tip.concern.is_some() {
                Some(Dimension::Concern)
            } else {
                None
            };
            if let Some(dimension) = gated_on.filter(|dim| !category.keys_tips_by(*dim)) {
                return Err(CatalogError::TipDimension {
                    index,
                    category,
                    dimension,
                });
            }
        }

        Ok(())
    }
}

fn check_names(category: Category, names: &[String]) -> Result<(), CatalogError> {
    if names.iter().any(|name| name.trim().is_empty()) {
        return Err(CatalogError::BlankProductName { category });
    }
    Ok(())
}
