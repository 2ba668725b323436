//! Runtime configuration.

use crate::achievements::AchievementTracker;
use crate::constants::{DEFAULT_DATA_DIR_NAME, DEFAULT_PROGRESS_FILE};
use crate::storage::{JsonFileStore, StoreError};
use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "VOLCADO_DATA_DIR";
pub const LOG_ENV: &str = "VOLCADO_LOG";

/// Where progress lives and how loudly to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the progress file (default `~/.volcado`)
    pub data_dir: PathBuf,

    /// Progress file name inside `data_dir`
    pub file_name: String,

    /// `tracing` filter directive used when `VOLCADO_LOG` is unset
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(DEFAULT_DATA_DIR_NAME),
            file_name: DEFAULT_PROGRESS_FILE.to_string(),
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Defaults overridden by `VOLCADO_DATA_DIR` and `VOLCADO_LOG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(filter) = lookup(LOG_ENV).filter(|f| !f.is_empty()) {
            config.log_filter = filter;
        }
        config
    }

    pub fn progress_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }

    /// Open the configured progress file and wrap it in a tracker.
    pub fn open_tracker(&self) -> Result<AchievementTracker<JsonFileStore>, StoreError> {
        let store = JsonFileStore::open(self.progress_path())?;
        Ok(AchievementTracker::new(store))
    }
}
