//! Database configuration via `docstore.toml`
//!
//! On first open, a default `docstore.toml` is created in the data
//! directory. To change settings, edit the file and reopen the database.

use docstore_core::{Error, Result};
use docstore_storage::{Durability, StoreOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name placed in the database data directory.
pub const CONFIG_FILE_NAME: &str = "docstore.toml";

/// Engine data file name placed in the database data directory.
pub const DATA_FILE_NAME: &str = "docstore.redb";

/// Database configuration loaded from `docstore.toml`.
///
/// # Example
///
/// ```toml
/// # Durability mode: "immediate" (default), "eventual" or "none"
/// durability = "immediate"
///
/// # Engine page cache in bytes (engine default when omitted)
/// # cache_size_bytes = 67108864
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocstoreConfig {
    /// Durability mode: `"immediate"`, `"eventual"` or `"none"`.
    #[serde(default = "default_durability_str")]
    pub durability: String,
    /// Engine page cache size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_size_bytes: Option<usize>,
}

fn default_durability_str() -> String {
    "immediate".to_string()
}

impl Default for DocstoreConfig {
    fn default() -> Self {
        Self {
            durability: default_durability_str(),
            cache_size_bytes: None,
        }
    }
}

impl DocstoreConfig {
    /// Parse the durability string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a known mode.
    pub fn durability_mode(&self) -> Result<Durability> {
        Durability::parse(&self.durability).ok_or_else(|| {
            Error::Config(format!(
                "Invalid durability mode '{}' in {}. Expected \"immediate\", \"eventual\" or \"none\".",
                self.durability, CONFIG_FILE_NAME
            ))
        })
    }

    /// Engine options described by this config.
    pub fn store_options(&self) -> Result<StoreOptions> {
        if self.cache_size_bytes == Some(0) {
            return Err(Error::Config(
                "cache_size_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(StoreOptions {
            durability: self.durability_mode()?,
            cache_size_bytes: self.cache_size_bytes,
        })
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Docstore database configuration
#
# Durability mode: "immediate" (default), "eventual" or "none"
#   "immediate" = fsync on every commit, zero data loss
#   "eventual"  = commit returns before fsync, recent commits may be lost on crash
#   "none"      = no persistence guarantee until a later durable commit
durability = "immediate"

# Engine page cache size in bytes (engine default when omitted).
# cache_size_bytes = 67108864
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: DocstoreConfig = toml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.store_options()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::Config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::Config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
