//! Store configuration file support.
//!
//! Reads the portal's client-side store configuration from TOML: which
//! repository backs the snapshot, plus validation tunables.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::error::StoreError;
use super::local::LocalBatchStore;
use super::repository::BatchRepository;
use crate::services::validation::ValidationSettings;

/// Which repository implementation backs the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreType {
    /// In-memory snapshot, loaded from a fetched roster.
    Local,
}

impl FromStr for StoreType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(StoreType::Local),
            other => Err(format!("unknown store type: {:?}", other)),
        }
    }
}

/// Store configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub store: StoreSettings,
    #[serde(default)]
    pub validation: ValidationSettings,
}

/// Store type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(rename = "type")]
    pub store_type: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store: StoreSettings {
                store_type: "local".to_string(),
            },
            validation: ValidationSettings::default(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            StoreError::configuration(format!("Failed to read config file: {}", e))
        })?;

        toml::from_str(&content).map_err(|e| {
            StoreError::configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Load configuration from the default locations, falling back to the
    /// built-in defaults when no file exists.
    ///
    /// Searches for `batchguard.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, StoreError> {
        let search_paths = vec![
            PathBuf::from("batchguard.toml"),
            PathBuf::from("config/batchguard.toml"),
            PathBuf::from("../batchguard.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Get the store type from configuration.
    pub fn store_type(&self) -> Result<StoreType, StoreError> {
        StoreType::from_str(&self.store.store_type).map_err(StoreError::configuration)
    }

    /// Build the configured repository.
    pub fn build(&self) -> Result<Arc<dyn BatchRepository>, StoreError> {
        match self.store_type()? {
            StoreType::Local => Ok(Arc::new(LocalBatchStore::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_local_config() {
        let toml = r#"
[store]
type = "local"
"#;

        let config: StoreConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.store.store_type, "local");
        assert_eq!(config.store_type().unwrap(), StoreType::Local);
        assert!(config.validation.warn_on_unparseable_times);
        assert_eq!(config.validation.min_slot_minutes, 30);
    }

    #[test]
    fn test_parse_validation_settings() {
        let toml = r#"
[store]
type = "local"

[validation]
min_slot_minutes = 45
warn_on_unparseable_times = false
"#;

        let config: StoreConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.validation.min_slot_minutes, 45);
        assert!(!config.validation.warn_on_unparseable_times);
    }

    #[test]
    fn test_unknown_store_type_is_configuration_error() {
        let toml = r#"
[store]
type = "cloud"
"#;

        let config: StoreConfig = toml::from_str(toml).unwrap();
        let err = config.store_type().unwrap_err();
        assert!(matches!(err, StoreError::Configuration { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[store]\ntype = \"local\"").unwrap();

        let config = StoreConfig::from_file(file.path()).unwrap();
        assert_eq!(config.store_type().unwrap(), StoreType::Local);
        assert!(config.build().is_ok());
    }

    #[test]
    fn test_from_missing_file_is_error() {
        let result = StoreConfig::from_file("/nonexistent/batchguard.toml");
        assert!(matches!(result, Err(StoreError::Configuration { .. })));
    }
}
