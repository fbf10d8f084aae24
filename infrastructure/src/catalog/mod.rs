//! Catalog source adapters

mod loader;

pub use loader::{CatalogLoadError, CatalogLoader, DEFAULT_CATALOG};
