//! # Configuration
//!
//! Settings for the Stockroom app.
//!
//! ## Load Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Sources                                │
//! │                                                                         │
//! │  1. Defaults                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. stockroom.toml (explicit path, or the platform config dir)          │
//! │       │   Linux:   ~/.config/stockroom/stockroom.toml                   │
//! │       │   macOS:   ~/Library/Application Support/com.stockroom.stockroom│
//! │       ▼                                                                 │
//! │  3. Environment                                                         │
//! │         STOCKROOM_DB_PATH   → storage.database_path                     │
//! │         STOCKROOM_SLOT_KEY  → storage.slot_key                          │
//! │         STOCKROOM_LOG       → logging.filter                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example File
//! ```toml
//! [storage]
//! database_path = "/home/me/stockroom.db"
//! slot_key = "products"
//!
//! [logging]
//! filter = "info,stockroom=debug,sqlx=warn"
//! ```

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use stockroom_db::DEFAULT_SLOT_KEY;

/// Default `tracing` filter when neither `RUST_LOG` nor config sets one.
pub const DEFAULT_LOG_FILTER: &str = "info,stockroom=debug,sqlx=warn";

const CONFIG_FILE_NAME: &str = "stockroom.toml";
const DATABASE_FILE_NAME: &str = "stockroom.db";

// =============================================================================
// Errors
// =============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("Could not determine the platform {0} directory")]
    NoPlatformDir(&'static str),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Sections
// =============================================================================

/// Where the product collection is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// SQLite file. `None` means the platform data dir.
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Name of the durable slot holding the collection.
    #[serde(default = "default_slot_key")]
    pub slot_key: String,
}

fn default_slot_key() -> String {
    DEFAULT_SLOT_KEY.to_string()
}

impl Default for StorageSettings {
    fn default() -> Self {
        StorageSettings {
            database_path: None,
            slot_key: default_slot_key(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// App Config
// =============================================================================

/// Complete app configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = match Self::resolve_path(config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// The file `load` and `save` use: the explicit path, else the platform default.
    pub fn resolve_path(config_path: Option<PathBuf>) -> Option<PathBuf> {
        config_path.or_else(Self::default_config_path)
    }

    fn from_file(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            debug!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Saves configuration to file, returning the path written.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<PathBuf> {
        let path = Self::resolve_path(config_path).ok_or(ConfigError::NoPlatformDir("config"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Config saved");
        Ok(path)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.storage.slot_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage.slot_key must not be empty".into()));
        }

        if let Some(ref path) = self.storage.database_path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid(
                    "storage.database_path must not be empty".into(),
                ));
            }
        }

        Ok(())
    }

    /// Applies `STOCKROOM_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Applies overrides from an arbitrary variable lookup.
    fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("STOCKROOM_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.storage.database_path = Some(PathBuf::from(path));
        }

        if let Some(key) = lookup("STOCKROOM_SLOT_KEY") {
            debug!(slot = %key, "Overriding slot key from environment");
            self.storage.slot_key = key;
        }

        if let Some(filter) = lookup("STOCKROOM_LOG") {
            self.logging.filter = filter;
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Resolves the database file, creating its parent directory.
    ///
    /// ## Platform-Specific Defaults
    /// - **Linux**: `~/.local/share/stockroom/stockroom.db`
    /// - **macOS**: `~/Library/Application Support/com.stockroom.stockroom/stockroom.db`
    /// - **Windows**: `%APPDATA%\stockroom\stockroom\data\stockroom.db`
    pub fn database_path(&self) -> ConfigResult<PathBuf> {
        let path = match self.storage.database_path {
            Some(ref path) => path.clone(),
            None => project_dirs()
                .ok_or(ConfigError::NoPlatformDir("data"))?
                .data_dir()
                .join(DATABASE_FILE_NAME),
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        Ok(path)
    }

    /// Returns the slot key.
    pub fn slot_key(&self) -> &str {
        &self.storage.slot_key
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "stockroom", "stockroom")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.slot_key(), "products");
        assert_eq!(config.storage.database_path, None);
        assert_eq!(config.logging.filter, DEFAULT_LOG_FILTER);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [storage]
            database_path = "/tmp/inventory.db"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.storage.database_path,
            Some(PathBuf::from("/tmp/inventory.db"))
        );
        assert_eq!(config.slot_key(), "products");
        assert_eq!(config.logging.filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::from_file(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let mut config = AppConfig::default();
        config.storage.slot_key = "pantry".into();
        assert_eq!(config.save(Some(path.clone())).unwrap(), path);

        assert_eq!(AppConfig::load(Some(path)).unwrap().slot_key(), "pantry");
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = PathBuf::from("/etc/stockroom/custom.toml");
        assert_eq!(AppConfig::resolve_path(Some(path.clone())), Some(path));
        assert_eq!(AppConfig::resolve_path(None), AppConfig::default_config_path());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[storage\nslot_key = ").unwrap();

        assert!(matches!(
            AppConfig::from_file(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("STOCKROOM_DB_PATH", "/data/stock.db"),
            ("STOCKROOM_SLOT_KEY", "inventory"),
            ("STOCKROOM_LOG", "warn"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_overrides_from(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(
            config.storage.database_path,
            Some(PathBuf::from("/data/stock.db"))
        );
        assert_eq!(config.slot_key(), "inventory");
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn test_validate_rejects_empty_slot_key() {
        let mut config = AppConfig::default();
        config.storage.slot_key = "   ".into();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_database_path_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("stock.db");

        let mut config = AppConfig::default();
        config.storage.database_path = Some(path.clone());

        assert_eq!(config.database_path().unwrap(), path);
        assert!(dir.path().join("a").join("b").is_dir());
    }
}
