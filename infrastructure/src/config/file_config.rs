//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.
//!
//! ```toml
//! [catalog]
//! path = "/etc/skinpal/catalog.toml"
//!
//! [store]
//! backend = "file"
//! path = "/var/lib/skinpal/profiles.json"
//!
//! [identity]
//! user = "uid-123"
//! session_path = "/var/lib/skinpal/session.json"
//!
//! [output]
//! format = "summary"
//! color = false
//! ```

use serde::{Deserialize, Serialize};
use skinpal_domain::OutputFormat;
use std::path::PathBuf;
use thiserror::Error;

// Re-export OutputFormat from domain for convenience
pub use skinpal_domain::OutputFormat as FileOutputFormat;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("catalog.path cannot be empty")]
    EmptyCatalogPath,

    #[error("store.path cannot be empty")]
    EmptyStorePath,

    #[error("identity.user cannot be blank")]
    BlankUser,

    #[error("identity.session_path cannot be empty")]
    EmptySessionPath,
}

/// Raw catalog configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// Catalog file to use instead of the built-in one
    pub path: Option<PathBuf>,
}

/// Profile store backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Lives for the duration of the process
    Memory,
    /// JSON document on disk (default)
    #[default]
    File,
}

/// Raw profile store configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    pub backend: StoreBackend,
    /// JSON file for the `file` backend; defaults to the platform data dir
    pub path: Option<PathBuf>,
}

impl FileStoreConfig {
    /// Resolved store file path
    ///
    /// Returns `$XDG_DATA_HOME/skinpal/profiles.json` (or the platform
    /// equivalent) when no path is configured.
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.path
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join("skinpal").join("profiles.json")))
    }
}

/// Raw identity configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileIdentityConfig {
    /// User to sign in as at startup
    pub user: Option<String>,
    pub email: Option<String>,
    /// Where `skinpal signin` records the session; defaults to the platform data dir
    pub session_path: Option<PathBuf>,
}

impl FileIdentityConfig {
    /// Resolved session file path
    pub fn resolved_session_path(&self) -> Option<PathBuf> {
        self.session_path
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join("skinpal").join("session.json")))
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Catalog source
    pub catalog: FileCatalogConfig,
    /// Profile store settings
    pub store: FileStoreConfig,
    /// Identity settings
    pub identity: FileIdentityConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(path) = &self.catalog.path
            && path.as_os_str().is_empty()
        {
            return Err(ConfigValidationError::EmptyCatalogPath);
        }

        if let Some(path) = &self.store.path
            && path.as_os_str().is_empty()
        {
            return Err(ConfigValidationError::EmptyStorePath);
        }

        if let Some(user) = &self.identity.user
            && user.trim().is_empty()
        {
            return Err(ConfigValidationError::BlankUser);
        }

        if let Some(path) = &self.identity.session_path
            && path.as_os_str().is_empty()
        {
            return Err(ConfigValidationError::EmptySessionPath);
        }

        Ok(())
    }
}
