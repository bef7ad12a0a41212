//! Configuration management for listkeeper
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{CONFIG_GENERATED, NAV_DEFAULT_WIDTH, NAV_MAX_WIDTH, NAV_MIN_WIDTH};
use crate::entities::Urgency;
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

const CONFIG_FILE_NAME: &str = "listkeeper.toml";
const CONFIG_DIR_NAME: &str = "listkeeper";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub list: ListConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Navigation drawer width in columns
    pub nav_width: u16,
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Location opened on startup, e.g. "/" or "/categories?menu"
    pub start_location: String,
    /// Icon theme: "ascii", "unicode" or "emoji"
    pub icon_theme: IconTheme,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show the secondary line (notes, item counts) next to each entry
    pub show_secondary: bool,
    /// Colour the left edge of urgent entries
    pub show_urgency_accent: bool,
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AuthConfig {
    /// Name used when logging in; falls back to $USER
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Start with a signed-in session
    pub signed_in: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs to a file
    pub enabled: bool,
    /// Log level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

/// Initial shopping list contents
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ListConfig {
    /// Initial entries. Left out entirely, the built-in sample is used;
    /// `items = []` starts with an empty list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<SeedItem>>,
}

/// One entry of the initial list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedItem {
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub checked: bool,
}

/// Reasons a configuration is rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("nav_width must be between {min} and {max} columns, got {got}")]
    NavWidth { min: u16, max: u16, got: u16 },

    #[error("start_location must be an absolute path starting with '/', got '{0}'")]
    StartLocation(String),

    #[error("unknown log level '{0}'")]
    LogLevel(String),

    #[error("list item #{index}: {field} cannot be empty")]
    EmptySeedField { index: usize, field: &'static str },
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            nav_width: NAV_DEFAULT_WIDTH,
            mouse_enabled: true,
            start_location: "/".to_string(),
            icon_theme: IconTheme::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_secondary: true,
            show_urgency_accent: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl AuthConfig {
    /// Name shown after logging in
    pub fn resolved_display_name(&self) -> String {
        self.display_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .or_else(|| std::env::var("USER").ok())
            .unwrap_or_else(|| "friend".to_string())
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.level).map_err(|_| ConfigError::LogLevel(self.level.clone()))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(CONFIG_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.nav_width < NAV_MIN_WIDTH || self.ui.nav_width > NAV_MAX_WIDTH {
            return Err(ConfigError::NavWidth {
                min: NAV_MIN_WIDTH,
                max: NAV_MAX_WIDTH,
                got: self.ui.nav_width,
            });
        }

        if !self.ui.start_location.starts_with('/') {
            return Err(ConfigError::StartLocation(self.ui.start_location.clone()));
        }

        self.logging.level_filter()?;

        for (index, item) in self.list.items.iter().flatten().enumerate() {
            if item.name.trim().is_empty() {
                return Err(ConfigError::EmptySeedField { index, field: "name" });
            }
            if item.category.trim().is_empty() {
                return Err(ConfigError::EmptySeedField {
                    index,
                    field: "category",
                });
            }
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let full_content = Self::default().commented_toml()?;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Render this configuration as a TOML file with a comment on every
    /// section and field
    pub fn commented_toml(&self) -> Result<String> {
        fn value<T: Serialize>(value: &T) -> Result<String> {
            Ok(toml::Value::try_from(value)
                .context("Failed to serialize config value")?
                .to_string())
        }

        let display_name = match &self.auth.display_name {
            Some(name) => format!("display_name = {}", value(name)?),
            None => "# display_name = \"Ada\"".to_string(),
        };

        Ok(format!(
            r#"# listkeeper configuration file
# Generated on {date}

# Screen layout and input
[ui]
# Navigation drawer width in columns ({nav_min} to {nav_max})
nav_width = {nav_width}
# Enable mouse support
mouse_enabled = {mouse_enabled}
# Location opened on startup, e.g. "/" or "/categories?menu"
start_location = {start_location}
# Icon theme: "ascii", "unicode" or "emoji"
icon_theme = {icon_theme}

# What each list row shows
[display]
# Show the secondary text (notes, item counts) next to each entry
show_secondary = {show_secondary}
# Colour the left edge of urgent entries
show_urgency_accent = {show_urgency_accent}

# Session
[auth]
# Name used when logging in; falls back to $USER
{display_name}
# Start with a signed-in session
signed_in = {signed_in}

# Log output
[logging]
# Also write logs to a file
enabled = {logging_enabled}
# Log level: "error", "warn", "info", "debug" or "trace"
level = {level}

# Initial shopping list. Without any entries a sample list is loaded;
# `items = []` under a [list] table starts with an empty list.
# [[list.items]]
# name = "Milk"
# category = "Dairy"
# urgency = 3            # 1 low, 2 moderate, 3 severe
# note = "out since Monday"
# checked = false
"#,
            date = chrono::Local::now().format("%Y-%m-%d"),
            nav_min = NAV_MIN_WIDTH,
            nav_max = NAV_MAX_WIDTH,
            nav_width = self.ui.nav_width,
            mouse_enabled = self.ui.mouse_enabled,
            start_location = value(&self.ui.start_location)?,
            icon_theme = value(&self.ui.icon_theme)?,
            show_secondary = self.display.show_secondary,
            show_urgency_accent = self.display.show_urgency_accent,
            signed_in = self.auth.signed_in,
            logging_enabled = self.logging.enabled,
            level = value(&self.logging.level)?,
        ))
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(CONFIG_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
