//! Persisted engine settings.
//!
//! Overrides live in a `settings.toml` under the platform config
//! directory. Every field is optional; anything absent (or an entirely
//! malformed file) falls back to the constants in [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use noticeboard::config::Config;
//!
//! let mut config = Config::load().unwrap_or_default();
//! config.toast_duration_ms = Some(4000);
//! config.save().expect("failed to save settings");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

const SETTINGS_FILE: &str = "settings.toml";
const APP_DIR: &str = "Noticeboard";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Default auto-dismiss timeout for panels, in milliseconds.
    #[serde(default)]
    pub panel_timeout_ms: Option<u64>,
    /// Display duration for toasts, in milliseconds.
    #[serde(default)]
    pub toast_duration_ms: Option<u64>,
    /// Vertical spacing between stacked toasts, in pixels.
    #[serde(default)]
    pub stack_spacing_px: Option<u32>,
    /// Grace period between hiding and removing a visual, in milliseconds.
    #[serde(default)]
    pub exit_grace_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            panel_timeout_ms: Some(defaults::DEFAULT_PANEL_TIMEOUT_MS),
            toast_duration_ms: Some(defaults::DEFAULT_TOAST_DURATION_MS),
            stack_spacing_px: Some(defaults::DEFAULT_STACK_SPACING_PX),
            exit_grace_ms: Some(defaults::DEFAULT_EXIT_GRACE_MS),
        }
    }
}

impl Config {
    /// Loads settings from the platform config directory. A missing
    /// file (or a platform without a config directory) yields defaults.
    pub fn load() -> Result<Self> {
        match Self::settings_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Writes settings to the platform config directory.
    pub fn save(&self) -> Result<()> {
        match Self::settings_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    /// Loads settings from an explicit path. A file that is not valid
    /// TOML yields defaults rather than an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content).unwrap_or_default())
    }

    /// Writes settings to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
    }
}
