//! Configuration management for `RainOrShine`
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::RainOrShineError;
use crate::models::{ConditionCode, Units};
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RainOrShineConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Measurement system (metric or imperial)
    #[serde(default = "default_units")]
    pub units: String,
    /// Number of hourly entries to show
    #[serde(default = "default_max_hourly_items")]
    pub max_hourly_items: u32,
    /// Code used when a payload carries no condition code
    #[serde(default = "default_fallback_condition_code")]
    pub fallback_condition_code: i32,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

fn default_max_hourly_items() -> u32 {
    24
}

fn default_fallback_condition_code() -> i32 {
    ConditionCode::CLEAR.value()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            units: default_units(),
            max_hourly_items: default_max_hourly_items(),
            fallback_condition_code: default_fallback_condition_code(),
        }
    }
}

impl RainOrShineConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides, e.g. RAINORSHINE__LOGGING__LEVEL
        builder = builder.add_source(
            Environment::with_prefix("RAINORSHINE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: RainOrShineConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rainorshine").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.display.units.is_empty() {
            self.display.units = default_units();
        }
        if self.display.max_hourly_items == 0 {
            self.display.max_hourly_items = default_max_hourly_items();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if !(1..=168).contains(&self.display.max_hourly_items) {
            return Err(RainOrShineError::config(
                "Hourly item count must be between 1 and 168",
            )
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(RainOrShineError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(RainOrShineError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        self.display
            .units
            .parse::<Units>()
            .map_err(|e| RainOrShineError::config(e.to_string()))?;

        Ok(())
    }

    /// Display units; validated on load, metric if somehow unparsable
    #[must_use]
    pub fn units(&self) -> Units {
        self.display.units.parse().unwrap_or_default()
    }

    #[must_use]
    pub fn fallback_code(&self) -> ConditionCode {
        ConditionCode(self.display.fallback_condition_code)
    }

    #[must_use]
    pub fn max_hourly_items(&self) -> usize {
        usize::try_from(self.display.max_hourly_items).unwrap_or(usize::MAX)
    }
}
