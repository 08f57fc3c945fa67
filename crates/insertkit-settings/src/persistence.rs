//! Settings persistence
//!
//! Owns the configuration file on disk: loads it at startup, writes the
//! standard configuration on first run, and writes remembered dialog state
//! back after each confirmed operation.

use crate::config::{Config, DialogDefaults};
use insertkit_catalog::InsertId;
use insertkit_core::ConfigError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Platform configuration file location
/// (`<config_dir>/insertkit/config.toml`)
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir()
        .ok_or_else(|| ConfigError::ReadFailed("no platform config directory".to_string()))?;
    Ok(base.join("insertkit").join("config.toml"))
}

/// Configuration file handle: load-or-create plus preference write-back
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    config: Config,
}

impl SettingsStore {
    /// Open the configuration at `path`, writing the standard configuration
    /// first when no file exists yet
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        if !path.exists() {
            info!(path = %path.display(), "no configuration found, writing standard defaults");
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| ConfigError::WriteFailed(format!("{}: {}", parent.display(), e)))?;
            }
            Config::standard().save_to_file(&path)?;
        }
        let config = Config::load_from_file(&path)?;
        debug!(inserts = config.inserts.len(), "configuration loaded");
        Ok(Self { path, config })
    }

    /// The loaded configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remember the insert picked in the dialog
    pub fn remember_insert(&mut self, id: &InsertId) -> Result<(), ConfigError> {
        self.config.dialog.last_selected_insert = Some(id.clone());
        self.config.save_to_file(&self.path)
    }

    /// Remember toggles and hole type as the next dialog's initial state
    pub fn remember_dialog(&mut self, dialog: DialogDefaults) -> Result<(), ConfigError> {
        self.config.dialog = dialog;
        self.config.save_to_file(&self.path)
    }
}
