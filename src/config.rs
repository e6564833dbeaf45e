//! Configuration loading for termgrid.
//!
//! Settings are read from `~/.termgrid/config.toml` when the file exists;
//! anything missing or malformed falls back to the defaults below, so
//! configuration can never abort startup.
//!
//! ```toml
//! # Driver read timeout in deciseconds (1 = 100ms). Bounds every raw-mode
//! # read and therefore the lone-Escape disambiguation window.
//! escape_timeout_ds = 1
//!
//! # Draw the centered welcome banner while the grid is empty.
//! show_welcome = true
//!
//! # tracing filter for the log file, e.g. "info" or "termgrid=debug"
//! log_filter = "info"
//! ```

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

/// Main configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Read timeout in deciseconds applied to every raw-mode byte read.
    pub escape_timeout_ds: u8,
    /// Whether to draw the welcome banner.
    pub show_welcome: bool,
    /// Filter directive for the log file.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            escape_timeout_ds: 1,
            show_welcome: true,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults.
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                if let Ok(content) = fs::read_to_string(&path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    /// Directory holding the config file and the log, `~/.termgrid`.
    pub fn state_dir() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".termgrid"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::state_dir().map(|dir| dir.join("config.toml"))
    }
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
