//! Recommendation categories and the profile dimensions they are keyed by

use serde::{Deserialize, Serialize};

/// One of the four steps of a skincare routine
///
/// Declaration order is presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cleanser,
    Moisturizer,
    Treatment,
    Sunscreen,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Cleanser,
        Category::Moisturizer,
        Category::Treatment,
        Category::Sunscreen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cleanser => "cleanser",
            Category::Moisturizer => "moisturizer",
            Category::Treatment => "treatment",
            Category::Sunscreen => "sunscreen",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Cleanser => "Cleanser",
            Category::Moisturizer => "Moisturizer",
            Category::Treatment => "Treatment",
            Category::Sunscreen => "Sunscreen",
        }
    }

    /// Dimensions the product table is keyed by for this category
    pub fn product_dimensions(&self) -> &'static [Dimension] {
        match self {
            Category::Treatment => &[Dimension::Concern, Dimension::Budget],
            _ => &[Dimension::SkinType, Dimension::Budget],
        }
    }

    /// Dimensions conditional tips may be gated on for this category
    pub fn tip_dimensions(&self) -> &'static [Dimension] {
        match self {
            Category::Cleanser | Category::Moisturizer => &[Dimension::SkinType, Dimension::Concern],
            Category::Treatment => &[Dimension::Concern],
            Category::Sunscreen => &[Dimension::SkinType],
        }
    }

    pub fn keys_products_by(&self, dimension: Dimension) -> bool {
        self.product_dimensions().contains(&dimension)
    }

    pub fn keys_tips_by(&self, dimension: Dimension) -> bool {
        self.tip_dimensions().contains(&dimension)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A profile field that a catalog row can match on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    SkinType,
    Concern,
    Budget,
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::SkinType => f.write_str("skin_type"),
            Dimension::Concern => f.write_str("concern"),
            Dimension::Budget => f.write_str("budget"),
        }
    }
}
