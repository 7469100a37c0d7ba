//! Runtime configuration for hosts of the notes widget.
//!
//! # Responsibility
//! - Parse `notecard.toml` into typed settings with defaults.
//! - Reject unknown keys and unusable values early.
//!
//! # Invariants
//! - `storage_key` is never empty after loading.
//! - Missing keys fall back to defaults; unknown keys are an error.

use crate::id::IdStrategy;
use crate::logging::default_log_level;
use crate::storage::DEFAULT_STORAGE_KEY;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Database file used when none is configured.
pub const DEFAULT_DB_FILE_NAME: &str = "notecard.sqlite3";

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(toml::de::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Parse(value)
    }
}

/// Settings for opening storage, logging and id generation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotecardConfig {
    /// SQLite file holding the slot table.
    pub db_path: PathBuf,
    /// Name of the slot holding the note list.
    pub storage_key: String,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute log directory; logging stays off when unset.
    pub log_dir: Option<PathBuf>,
    pub id_strategy: IdStrategy,
}

impl Default for NotecardConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: default_log_level().to_string(),
            log_dir: None,
            id_strategy: IdStrategy::default(),
        }
    }
}

impl NotecardConfig {
    /// Parses and validates TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage_key cannot be empty".to_string()));
        }
        if self.db_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("db_path cannot be empty".to_string()));
        }
        Ok(())
    }
}
