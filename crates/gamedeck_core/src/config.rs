//! Environment-driven runtime configuration.
//!
//! # Responsibility
//! - Read database, logging and paging settings from `GAMEDECK_*` variables.
//! - Reject malformed values up front instead of at first use.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "GAMEDECK_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "GAMEDECK_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "GAMEDECK_LOG_DIR";
pub const ENV_DEFAULT_PAGE_SIZE: &str = "GAMEDECK_DEFAULT_PAGE_SIZE";

const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, value, reason } => {
                write!(f, "{key}=`{value}` is invalid: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamedeckConfig {
    /// SQLite file; `None` selects an in-memory database.
    pub db_path: Option<PathBuf>,
    pub log_level: &'static str,
    /// Absolute log directory; `None` leaves file logging off.
    pub log_dir: Option<PathBuf>,
    pub default_page_size: u32,
}

impl Default for GamedeckConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            log_level: default_log_level(),
            log_dir: None,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl GamedeckConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        config.db_path = read(ENV_DB_PATH).map(PathBuf::from);

        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = normalize_level(&level).map_err(|reason| {
                ConfigError::InvalidValue {
                    key: ENV_LOG_LEVEL,
                    value: level.clone(),
                    reason,
                }
            })?;
        }

        if let Some(dir) = read(ENV_LOG_DIR) {
            let path = PathBuf::from(&dir);
            if !path.is_absolute() {
                return Err(ConfigError::InvalidValue {
                    key: ENV_LOG_DIR,
                    value: dir,
                    reason: "must be an absolute path".to_string(),
                });
            }
            config.log_dir = Some(path);
        }

        if let Some(size) = read(ENV_DEFAULT_PAGE_SIZE) {
            config.default_page_size = match size.parse::<u32>() {
                Ok(parsed) if parsed > 0 => parsed,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: ENV_DEFAULT_PAGE_SIZE,
                        value: size,
                        reason: "expected a positive integer".to_string(),
                    })
                }
            };
        }

        Ok(config)
    }
}
