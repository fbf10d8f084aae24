//! Catalog loading
//!
//! The default catalog ships inside the binary as a versioned TOML
//! resource. A replacement file can be configured with `[catalog] path`,
//! which lets the tables change without touching engine code.

use crate::config::FileCatalogConfig;
use serde::Deserialize;
use skinpal_domain::{Catalog, CatalogError, FallbackProducts, ProductRule, TipRule};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Built-in catalog, embedded at compile time
pub const DEFAULT_CATALOG: &str = include_str!("default_catalog.toml");

/// Errors that can occur while loading a catalog
#[derive(Error, Debug)]
pub enum CatalogLoadError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(#[from] CatalogError),
}

/// Raw catalog file structure
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileCatalog {
    version: u32,
    fallbacks: FallbackProducts,
    #[serde(default)]
    products: Vec<ProductRule>,
    #[serde(default)]
    tips: Vec<TipRule>,
}

impl FileCatalog {
    fn into_catalog(self) -> Result<Catalog, CatalogError> {
        Catalog::new(self.version, self.fallbacks, self.products, self.tips)
    }
}

/// Loads and validates catalogs
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load the catalog selected by configuration: the configured file if
    /// any, otherwise the built-in one.
    pub fn load(config: &FileCatalogConfig) -> Result<Catalog, CatalogLoadError> {
        match &config.path {
            Some(path) => Self::from_path(path),
            None => Self::builtin(),
        }
    }

    pub fn builtin() -> Result<Catalog, CatalogLoadError> {
        debug!("Loading built-in catalog");
        Self::from_toml_str(DEFAULT_CATALOG)
    }

    pub fn from_path(path: &Path) -> Result<Catalog, CatalogLoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&content)?;
        info!(
            "Loaded catalog v{} from {} ({} product rules, {} tips)",
            catalog.version(),
            path.display(),
            catalog.product_rules().len(),
            catalog.tip_rules().len()
        );
        Ok(catalog)
    }

    pub fn from_toml_str(content: &str) -> Result<Catalog, CatalogLoadError> {
        let raw: FileCatalog = toml::from_str(content)?;
        Ok(raw.into_catalog()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skinpal_domain::{
        Budget, Category, Concern, ProductKey, RecommendationEngine, SkinProfile, SkinType,
    };
    use std::io::Write;
    use std::sync::Arc;

    fn engine() -> RecommendationEngine {
        RecommendationEngine::new(Arc::new(CatalogLoader::builtin().unwrap()))
    }

    fn all_profiles() -> Vec<SkinProfile> {
        let mut profiles = Vec::new();
        for skin_type in SkinType::ALL {
            for concern in Concern::ALL {
                for budget in Budget::ALL {
                    profiles.push(SkinProfile::new(skin_type, concern, budget));
                }
            }
        }
        profiles
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = CatalogLoader::builtin().unwrap();
        assert_eq!(catalog.version(), 1);
        for category in Category::ALL {
            assert!(catalog.rule_count(category) > 0);
        }
    }

    #[test]
    fn test_builtin_known_mappings() {
        let engine = engine();

        let oily = SkinProfile::new(SkinType::Oily, Concern::Acne, Budget::Below500);
        let set = engine.generate_recommendations(&oily);
        assert_eq!(
            set.get(Category::Cleanser).unwrap().top_pick(),
            Some("Cetaphil Gentle Skin Cleanser")
        );
        assert_eq!(
            set.get(Category::Treatment).unwrap().top_pick(),
            Some("The Ordinary Niacinamide 10% + Zinc 1%")
        );
    }

    #[test]
    fn test_builtin_moisturizer_fallback() {
        let engine = engine();
        let profile = SkinProfile::new(SkinType::Combination, Concern::None, Budget::From1000To2000);
        let key = ProductKey::for_profile(Category::Moisturizer, &profile);
        assert!(engine.catalog().find_product_rule(&key).is_none());
        assert_eq!(engine.select_products(&key), vec!["CeraVe Moisturizing Cream"]);
    }

    #[test]
    fn test_builtin_oily_cleanser_tip_order() {
        let engine = engine();
        let profile = SkinProfile::new(SkinType::Oily, Concern::None, Budget::Below500);
        let set = engine.generate_recommendations(&profile);
        let tips = &set.get(Category::Cleanser).unwrap().tips;
        assert_eq!(
            tips,
            &vec![
                "Cleanse twice daily, morning and evening",
                "Use lukewarm water, never hot",
                "Massage gently for 30-60 seconds",
                "Pat dry with a clean towel instead of rubbing",
                "Look for oil-free or gel-based cleansers",
                "Avoid over-cleansing as it can strip natural oils",
            ]
        );
    }

    #[test]
    fn test_builtin_category_counts() {
        let engine = engine();
        let none = SkinProfile::new(SkinType::Oily, Concern::None, Budget::Below500);
        assert_eq!(engine.generate_recommendations(&none).len(), 3);
        let acne = SkinProfile::new(SkinType::Oily, Concern::Acne, Budget::Below500);
        assert_eq!(engine.generate_recommendations(&acne).len(), 4);
    }

    #[test]
    fn test_builtin_total_and_deterministic() {
        let engine = engine();
        for profile in all_profiles() {
            let first = engine.generate_recommendations(&profile);
            assert_eq!(first, engine.generate_recommendations(&profile));
            assert!(first.iter().all(|item| !item.products.is_empty()));
            assert!(first.iter().all(|item| !item.tips.is_empty()));
        }
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
version = 1

[fallbacks]
cleanser = ["C"]
moisturizer = ["M"]
treatment = ["T"]
sunscreen = ["S"]

[[products]]
category = "sunscreen"
skin_type = "dry"
products = ["Dry SPF"]
"#
        )
        .unwrap();

        let catalog = CatalogLoader::load(&FileCatalogConfig {
            path: Some(file.path().to_path_buf()),
        })
        .unwrap();
        assert_eq!(catalog.product_rules().len(), 1);
        assert!(catalog.tip_rules().is_empty());
        assert_eq!(catalog.fallback_for(Category::Moisturizer), ["M"]);
    }

    #[test]
    fn test_missing_file() {
        let err = CatalogLoader::from_path(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Io { .. }));
    }

    #[test]
    fn test_parse_error_on_unknown_value() {
        let err = CatalogLoader::from_toml_str(
            r#"
version = 1
[fallbacks]
cleanser = ["C"]
moisturizer = ["M"]
treatment = ["T"]
sunscreen = ["S"]

[[products]]
category = "serum"
products = ["X"]
"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogLoadError::Parse(_)));
    }

    #[test]
    fn test_missing_fallback_is_parse_error() {
        let err = CatalogLoader::from_toml_str(
            r#"
version = 1
[fallbacks]
cleanser = ["C"]
"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogLoadError::Parse(_)));
    }

    #[test]
    fn test_validation_error_surfaces() {
        let err = CatalogLoader::from_toml_str(
            r#"
version = 1
[fallbacks]
cleanser = ["C"]
moisturizer = []
treatment = ["T"]
sunscreen = ["S"]
"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CatalogLoadError::Invalid(CatalogError::EmptyFallback(Category::Moisturizer))
        ));
    }
}
