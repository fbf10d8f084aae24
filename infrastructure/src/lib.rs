//! Infrastructure layer for skinpal
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration and catalog loading.

pub mod catalog;
pub mod config;
pub mod identity;
pub mod store;

// Re-export commonly used types
pub use catalog::{CatalogLoadError, CatalogLoader, DEFAULT_CATALOG};
pub use config::{
    ConfigLoader, ConfigValidationError, FileCatalogConfig, FileConfig, FileIdentityConfig,
    FileOutputConfig, FileOutputFormat, FileStoreConfig, StoreBackend,
};
pub use identity::{LocalIdentity, SessionError, SessionFile};
pub use store::{InMemoryProfileStore, JsonFileProfileStore};
