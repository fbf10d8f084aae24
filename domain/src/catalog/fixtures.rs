//! Small catalog shared by domain tests

use super::category::Category;
use super::entities::{Catalog, FallbackProducts, SUPPORTED_CATALOG_VERSION};
use super::rule::{ProductRule, TipRule};
use crate::profile::{Budget, Concern, SkinType};

fn list(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn fallbacks() -> FallbackProducts {
    FallbackProducts {
        cleanser: list(&["Cetaphil Gentle Skin Cleanser"]),
        moisturizer: list(&["CeraVe Moisturizing Cream"]),
        treatment: list(&["The Ordinary Niacinamide 10% + Zinc 1%"]),
        sunscreen: list(&["Neutrogena Ultra Sheer Dry-Touch SPF 50+"]),
    }
}

/// Cleanser and sunscreen are mapped for oily and dry skin; moisturizer
/// only for oily skin below 500, so every other moisturizer key falls back.
pub(crate) fn catalog() -> Catalog {
    let products = vec![
        ProductRule::new(
            Category::Cleanser,
            list(&["Cetaphil Gentle Skin Cleanser", "Himalaya Neem Face Wash"]),
        )
        .with_skin_type(SkinType::Oily)
        .with_budget(Budget::Below500),
        ProductRule::new(Category::Cleanser, list(&["CeraVe Hydrating Facial Cleanser"]))
            .with_skin_type(SkinType::Dry),
        ProductRule::new(Category::Moisturizer, list(&["Neutrogena Hydro Boost Water Gel"]))
            .with_skin_type(SkinType::Oily)
            .with_budget(Budget::Below500),
        ProductRule::new(
            Category::Treatment,
            list(&[
                "The Ordinary Niacinamide 10% + Zinc 1%",
                "Minimalist 2% Salicylic Acid Serum",
            ]),
        )
        .with_concern(Concern::Acne)
        .with_budget(Budget::Below500),
        ProductRule::new(Category::Treatment, list(&["Dot & Key Retinol Night Cream"]))
            .with_concern(Concern::Wrinkles),
        ProductRule::new(Category::Sunscreen, list(&["Lakme Sun Expert Ultra Matte SPF 50"]))
            .with_skin_type(SkinType::Oily),
    ];

    let tips = vec![
        TipRule::base(Category::Cleanser, "Cleanse twice daily, morning and evening"),
        TipRule::for_concern(
            Category::Cleanser,
            Concern::Acne,
            "Cleansers with salicylic acid help keep pores clear",
        ),
        TipRule::for_skin_type(
            Category::Cleanser,
            SkinType::Oily,
            "Look for oil-free or gel-based cleansers",
        ),
        TipRule::base(Category::Cleanser, "Use lukewarm water, never hot"),
        TipRule::for_skin_type(
            Category::Cleanser,
            SkinType::Oily,
            "Avoid over-cleansing as it can strip natural oils",
        ),
        TipRule::base(
            Category::Moisturizer,
            "Apply to slightly damp skin to lock in hydration",
        ),
        TipRule::for_concern(
            Category::Treatment,
            Concern::Acne,
            "Be patient: results take 6-8 weeks",
        ),
        TipRule::base(
            Category::Sunscreen,
            "Apply sunscreen every morning, even on cloudy days",
        ),
        TipRule::for_skin_type(
            Category::Sunscreen,
            SkinType::Oily,
            "Choose matte or gel-based sunscreens",
        ),
    ];

    match Catalog::new(SUPPORTED_CATALOG_VERSION, fallbacks(), products, tips) {
        Ok(catalog) => catalog,
        Err(e) => panic!("fixture catalog is invalid: {e}"),
    }
}
