//! Store configuration via `attrstore.toml`
//!
//! `ResourceService::open` writes a default `attrstore.toml` into a
//! directory that has none. To change settings, edit the file and reopen.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "attrstore.toml";

/// Table used when the config does not name one.
pub const DEFAULT_TABLE_NAME: &str = "ResourceTable";

/// Store configuration loaded from `attrstore.toml`.
///
/// # Example
///
/// ```toml
/// # Name of the table resources are written to
/// table_name = "ResourceTable"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Name of the table resources are written to.
    #[serde(default = "default_table_name")]
    pub table_name: String,
}

fn default_table_name() -> String {
    DEFAULT_TABLE_NAME.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            table_name: default_table_name(),
        }
    }
}

impl StoreConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# attrstore configuration
#
# Name of the table resources are written to (default: "ResourceTable")
table_name = "ResourceTable"
"#
    }

    /// Check that the settings are usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the table name is empty or blank.
    pub fn validate(&self) -> Result<()> {
        if self.table_name.trim().is_empty() {
            return Err(Error::config("table_name must not be empty"));
        }
        Ok(())
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: StoreConfig = toml::from_str(&content).map_err(|e| {
            Error::config(format!("invalid {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::config(format!("cannot create {}: {}", path.display(), e))
            })?;
        }
        Ok(())
    }
}
