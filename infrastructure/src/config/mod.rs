//! Configuration file loading for skinpal
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SKINPAL_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./skinpal.toml` or `./.skinpal.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/skinpal/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileCatalogConfig, FileConfig, FileIdentityConfig, FileOutputConfig,
    FileOutputFormat, FileStoreConfig, StoreBackend,
};
pub use loader::ConfigLoader;
