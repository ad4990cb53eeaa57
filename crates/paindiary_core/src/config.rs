//! Runtime configuration resolved from the environment.
//!
//! # Invariants
//! - Blank variables are treated as unset.
//! - Resolution never fails; missing values fall back to defaults.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "PAINDIARY_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "PAINDIARY_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "PAINDIARY_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "paindiary.sqlite3";

/// Paths and levels used to bootstrap the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryConfig {
    /// SQLite database file.
    pub db_path: PathBuf,
    /// Log level passed to [`crate::init_logging`].
    pub log_level: String,
    /// Log directory; file logging stays off when `None`.
    pub log_dir: Option<PathBuf>,
}

impl DiaryConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through `lookup`, one call per variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            db_path: read(DB_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME)),
            log_level: read(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: read(LOG_DIR_ENV).map(PathBuf::from),
        }
    }
}
