//! Configuration file parsing for the provider.
//!
//! Loads the provider type name, version and reconciler settings from TOML.

use lazy_reconciler::ReconcilerConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Provider configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A field holds a value the provider cannot use
    #[error("Invalid configuration field {field}: {reason}")]
    Invalid {
        /// Offending field
        field: String,
        /// What is wrong with it
        reason: String,
    },
}

/// Provider configuration loaded from TOML
///
/// ```toml
/// type_name = "lazy"
/// version = "0.1.0"
///
/// [reconciler]
/// id_format = "decimal"
/// timestamp_format = "rfc850"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider type name; resource type names are prefixed with it
    #[serde(default = "default_type_name")]
    pub type_name: String,

    /// Version reported in provider metadata
    #[serde(default = "default_version")]
    pub version: String,

    /// Identifier and change-label settings
    #[serde(default)]
    pub reconciler: ReconcilerConfig,
}

/// Default type name: "lazy"
fn default_type_name() -> String {
    "lazy".to_string()
}

/// Default version for locally built providers
fn default_version() -> String {
    "dev".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            type_name: default_type_name(),
            version: default_version(),
            reconciler: ReconcilerConfig::default(),
        }
    }
}

impl ProviderConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: ProviderConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration used under tests
    pub fn test_config() -> Self {
        Self {
            version: "test".to_string(),
            ..Self::default()
        }
    }

    /// Check that the type name can prefix resource type names
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.type_name.is_empty() {
            return Err(ConfigError::Invalid {
                field: "type_name".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        let valid = self
            .type_name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if !valid {
            return Err(ConfigError::Invalid {
                field: "type_name".to_string(),
                reason: format!(
                    "'{}' may only contain lowercase letters, digits and underscores",
                    self.type_name
                ),
            });
        }

        Ok(())
    }
}
