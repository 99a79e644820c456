//! Main application configuration
//!
//! Defines the configuration for the calculator front end, loaded from a TOML
//! file or from environment variables, and validated before use.

use crate::config::rating::RatingConfig;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub rating: RatingConfig,
    pub display: DisplaySettings,
}

/// Service-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Name used in log output
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// How engine numbers are shown to and read from a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Displayed deviation = engine deviation * scale
    pub deviation_scale: f64,
    /// Show the smoothstep-adjusted win chance instead of the raw one
    pub perceptual_probability: bool,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "glicko-calc".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            deviation_scale: 2.0,
            perceptual_probability: false,
        }
    }
}

fn parse_var<T, F>(lookup: &F, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| anyhow!("Invalid {} value: {}", name, raw)),
        None => Ok(None),
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_overrides(|name| env::var(name).ok())?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file; environment variables still
    /// override values from the file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.apply_overrides(|name| env::var(name).ok())?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Override settings from named variables, as read by `lookup`.
    ///
    /// `from_env` and `from_file` pass the process environment.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Service settings
        if let Some(name) = parse_var(&lookup, "SERVICE_NAME")? {
            self.service.name = name;
        }
        if let Some(log_level) = parse_var(&lookup, "LOG_LEVEL")? {
            self.service.log_level = log_level;
        }

        // Rating settings
        if let Some(rating) = parse_var(&lookup, "DEFAULT_RATING")? {
            self.rating.default_rating = rating;
        }
        if let Some(deviation) = parse_var(&lookup, "INITIAL_DEVIATION")? {
            self.rating.initial_deviation = deviation;
        }
        if let Some(deviation) = parse_var(&lookup, "MIN_DEVIATION")? {
            self.rating.min_deviation = deviation;
        }
        if let Some(c) = parse_var(&lookup, "DECAY_CONSTANT")? {
            self.rating.decay_constant = c;
        }

        // Display settings
        if let Some(scale) = parse_var(&lookup, "DEVIATION_SCALE")? {
            self.display.deviation_scale = scale;
        }
        if let Some(perceptual) = parse_var(&lookup, "PERCEPTUAL_PROBABILITY")? {
            self.display.perceptual_probability = perceptual;
        }

        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    config.rating.validate()?;

    if !(config.display.deviation_scale.is_finite() && config.display.deviation_scale > 0.0) {
        return Err(anyhow!("Deviation scale must be positive"));
    }

    Ok(())
}
