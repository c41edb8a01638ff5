//! Config persistence and path resolution.
//!
//! Covers:
//! - `load_from` / `save_to` (JSON file I/O with atomic write)
//! - platform path helpers (`config_path`, `config_dir`)

use std::fs;
use std::path::{Path, PathBuf};

use super::Config;
use crate::error::ConfigError;

/// File name of the deck configuration document.
pub const CONFIG_FILE_NAME: &str = "touchdeck.json";

impl Config {
    /// Load configuration from a specific file.
    ///
    /// A missing or malformed file is an error; startup policy (seeding a
    /// bundled default, fatal diagnostics) belongs to the caller. Legacy
    /// config shapes are migrated and the mode index clamped before the
    /// value is returned, so a loaded config always has at least one mode.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        log::info!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&contents)?;
        config.migrate_legacy();
        Ok(config)
    }

    /// Save configuration to a specific file.
    ///
    /// Atomic save: write to a temp file then rename, so a crash mid-write
    /// cannot corrupt the existing document. The in-memory config remains
    /// authoritative when the write fails.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, &json)?;
        fs::rename(&temp_path, path)?;
        log::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Directory holding the user's config file.
    ///
    /// `%LOCALAPPDATA%\TouchDeck` on Windows, `~/.config/touchdeck`
    /// elsewhere. Falls back to the current directory when the platform
    /// directory cannot be resolved.
    pub fn config_dir() -> PathBuf {
        #[cfg(windows)]
        let base = dirs::data_local_dir().map(|d| d.join("TouchDeck"));
        #[cfg(not(windows))]
        let base = dirs::config_dir().map(|d| d.join("touchdeck"));

        base.unwrap_or_else(|| PathBuf::from("."))
    }

    /// Full path of the user's config file.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE_NAME)
    }
}
