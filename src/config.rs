//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::color_table::ColorTable;
use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME};
use crate::models::{BandCount, BandRole};
use crate::services::TolerancePolicy;

/// Encoder defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeConfig {
    /// Band count used when `encode` and `bands` are run without `--bands`
    #[serde(default)]
    pub default_bands: BandCount,
    /// Tolerance color written into 4-band results
    #[serde(default = "default_tolerance_four_band")]
    pub tolerance_four_band: String,
    /// Tolerance color written into 5- and 6-band results
    #[serde(default = "default_tolerance_multi_band")]
    pub tolerance_multi_band: String,
    /// Temperature-coefficient color for 6-band results (unset leaves the band empty)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_coefficient: Option<String>,
}

fn default_tolerance_four_band() -> String {
    TolerancePolicy::default().four_band
}

fn default_tolerance_multi_band() -> String {
    TolerancePolicy::default().multi_band
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            default_bands: BandCount::default(),
            tolerance_four_band: default_tolerance_four_band(),
            tolerance_multi_band: default_tolerance_multi_band(),
            temp_coefficient: None,
        }
    }
}

impl EncodeConfig {
    /// Encoder policy built from these settings.
    #[must_use]
    pub fn tolerance_policy(&self) -> TolerancePolicy {
        TolerancePolicy {
            four_band: self.tolerance_four_band.clone(),
            multi_band: self.tolerance_multi_band.clone(),
            temp_coefficient: self.temp_coefficient.clone(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/ResistorCode/config.toml`
/// - macOS: `~/Library/Application Support/ResistorCode/config.toml`
/// - Windows: `%APPDATA%\ResistorCode\config.toml`
///
/// `RESISTOR_CODE_CONFIG_DIR` overrides the directory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Encoder defaults
    #[serde(default)]
    pub encode: EncodeConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path, honoring `RESISTOR_CODE_CONFIG_DIR`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config = Self::from_toml(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        debug!("Loaded configuration from {}", config_path.display());
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        debug!("Saved configuration to {}", config_path.display());
        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - tolerance colors exist and carry a tolerance value
    /// - the temperature-coefficient color, if set, carries a temperature coefficient
    pub fn validate(&self) -> Result<()> {
        let table = ColorTable::standard()?;

        for (key, color) in [
            ("tolerance_four_band", &self.encode.tolerance_four_band),
            ("tolerance_multi_band", &self.encode.tolerance_multi_band),
        ] {
            Self::validate_color(table, key, color, BandRole::Tolerance)?;
        }

        if let Some(color) = &self.encode.temp_coefficient {
            Self::validate_color(table, "temp_coefficient", color, BandRole::TempCoefficient)?;
        }

        Ok(())
    }

    fn validate_color(table: &ColorTable, key: &str, color: &str, role: BandRole) -> Result<()> {
        let entry = table
            .lookup(color)
            .context(format!("Invalid value for encode.{key}"))?;
        if !entry.has_role(role) {
            anyhow::bail!(
                "Invalid value for encode.{key}: '{}' has no {role} value",
                entry.name
            );
        }
        Ok(())
    }
}
