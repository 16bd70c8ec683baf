//! Configuration management for pomotui.
//!
//! Handles loading of user preferences: starting durations, notification
//! channels and log verbosity. Timer state itself is never written to disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::pomodoro::TimerRunConfig;

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Focus and break durations the timer starts with
    #[serde(default)]
    pub durations: TimerRunConfig,

    /// Phase change notifications
    #[serde(default)]
    pub notifications: NotificationConfig,

    /// Log file settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, or return default if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate();

        Ok(config)
    }

    /// Clamp durations into their allowed ranges
    pub fn validate(&mut self) {
        self.durations =
            TimerRunConfig::new(self.durations.focus_minutes, self.durations.break_minutes);
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not find config directory")?;

        Ok(config_dir.join("pomotui").join("config.json"))
    }
}

/// Which notification channels fire when a phase ends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Ring the terminal bell
    #[serde(default = "default_true")]
    pub bell: bool,

    /// Show a desktop notification
    #[serde(default)]
    pub desktop: bool,
}

fn default_true() -> bool {
    true
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            bell: true,
            desktop: false,
        }
    }
}

impl NotificationConfig {
    /// Disable every channel
    pub fn silence(&mut self) {
        self.bell = false;
        self.desktop = false;
    }
}

/// Log file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Maximum level written to the log file (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
