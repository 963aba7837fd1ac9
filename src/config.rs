//! Configuration management for the `skycast` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::SkycastError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `skycast` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkycastConfig {
    /// Weather API configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Default application settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Weather API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL for the geocoding API
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,
    /// Base URL for the forecast API
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_seconds: u32,
    /// Daily forecast horizon in days (0 disables the daily outlook)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
    /// Result count cap for geocoding searches
    #[serde(default = "default_max_results")]
    pub max_results: u8,
    /// Language for geocoding results
    #[serde(default = "default_language")]
    pub language: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Default application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Unit system applied when the caller does not choose one
    #[serde(default = "default_units")]
    pub units: String,
}

// Default value functions
fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com".to_string()
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com".to_string()
}

fn default_weather_timeout() -> u32 {
    30
}

fn default_forecast_days() -> u8 {
    3
}

fn default_max_results() -> u8 {
    10
}

fn default_language() -> String {
    "en".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            geocoding_base_url: default_geocoding_base_url(),
            forecast_base_url: default_forecast_base_url(),
            timeout_seconds: default_weather_timeout(),
            forecast_days: default_forecast_days(),
            max_results: default_max_results(),
            language: default_language(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            units: default_units(),
        }
    }
}

impl Default for SkycastConfig {
    fn default() -> Self {
        Self {
            weather: WeatherConfig::default(),
            logging: LoggingConfig::default(),
            defaults: DefaultsConfig::default(),
        }
    }
}

impl SkycastConfig {
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

        // Add environment variable overrides with SKYCAST_ prefix
        builder = builder.add_source(
            Environment::with_prefix("SKYCAST")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: SkycastConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("skycast").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.weather.timeout_seconds == 0 || self.weather.timeout_seconds > 300 {
            return Err(SkycastError::config(
                "Weather API timeout must be between 1 and 300 seconds",
            )
            .into());
        }

        if self.weather.forecast_days > 16 {
            return Err(SkycastError::config("Forecast horizon cannot exceed 16 days").into());
        }

        if self.weather.max_results == 0 || self.weather.max_results > 100 {
            return Err(
                SkycastError::config("Geocoding result cap must be between 1 and 100").into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(SkycastError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        for url in [
            &self.weather.geocoding_base_url,
            &self.weather.forecast_base_url,
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(SkycastError::config(
                    "Weather API base URLs must be valid HTTP or HTTPS URLs",
                )
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SkycastConfig::default();
        assert_eq!(
            config.weather.geocoding_base_url,
            "https://geocoding-api.open-meteo.com"
        );
        assert_eq!(
            config.weather.forecast_base_url,
            "https://api.open-meteo.com"
        );
        assert_eq!(config.weather.timeout_seconds, 30);
        assert_eq!(config.weather.forecast_days, 3);
        assert_eq!(config.weather.max_results, 10);
        assert_eq!(config.weather.language, "en");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.defaults.units, "metric");
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = SkycastConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = SkycastConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Invalid log level")
        );
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = SkycastConfig::default();
        config.weather.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout"));

        let mut config = SkycastConfig::default();
        config.weather.forecast_days = 20;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_base_urls() {
        let mut config = SkycastConfig::default();
        config.weather.forecast_base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_path_generation() {
        let path = SkycastConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("skycast"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
