use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::ConfigError;

/// Default KMA ultra-short-term observation endpoint
pub const DEFAULT_WEATHER_ENDPOINT: &str =
    "https://apis.data.go.kr/1360000/VilageFcstInfoService_2.0/getUltraSrtNcst";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream weather service settings
    #[serde(default)]
    pub weather: WeatherConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind the page server to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind the page server to
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Ultra-short-term observation endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// KMA grid X coordinate (default: Gwangmyeong, Gyeonggi-do)
    #[serde(default = "default_nx")]
    pub nx: u16,

    /// KMA grid Y coordinate
    #[serde(default = "default_ny")]
    pub ny: u16,

    /// Rows requested per page
    #[serde(default = "default_num_of_rows")]
    pub num_of_rows: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Skip TLS certificate verification for the weather endpoint.
    ///
    /// WARNING: the upstream certificate chain has historically failed
    /// verification, so this defaults to `true`. Whether verification should
    /// be re-enabled is up to the deployment owner.
    #[serde(default = "default_accept_invalid_certs")]
    pub accept_invalid_certs: bool,
}

fn default_endpoint() -> String {
    DEFAULT_WEATHER_ENDPOINT.to_string()
}

fn default_nx() -> u16 {
    57
}

fn default_ny() -> u16 {
    126
}

fn default_num_of_rows() -> u32 {
    100
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_accept_invalid_certs() -> bool {
    true
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            nx: default_nx(),
            ny: default_ny(),
            num_of_rows: default_num_of_rows(),
            timeout_secs: default_timeout_secs(),
            accept_invalid_certs: default_accept_invalid_certs(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location when `None`.
    ///
    /// A missing file at the default location yields defaults; nothing is
    /// written to disk. A missing file at an explicit path is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (config_path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_path()?, false),
        };

        if !config_path.exists() {
            if explicit {
                return Err(ConfigError::NotFound(config_path.display().to_string()).into());
            }
            tracing::info!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration, apply environment overrides, and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated(path: Option<&Path>) -> Result<(Self, ValidationResult)> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides()?;
        let validation = config.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()).into());
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Apply `DERMACAST_HOST` / `DERMACAST_PORT` overrides
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(
            std::env::var("DERMACAST_HOST").ok(),
            std::env::var("DERMACAST_PORT").ok(),
        )
    }

    fn apply_overrides(
        &mut self,
        host: Option<String>,
        port: Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = host.filter(|h| !h.trim().is_empty()) {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("DERMACAST_PORT: {}", port)))?;
        }
        Ok(())
    }

    /// Validate the configuration
    ///
    /// Returns a ValidationResult containing any errors or warnings.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(&self.weather.endpoint, "weather.endpoint", &mut result);

        if self.server.host.trim().is_empty() {
            result.add_error("server.host", "Host must not be empty");
        }
        if self.server.port == 0 {
            result.add_error("server.port", "Port cannot be 0");
        }

        if self.weather.timeout_secs == 0 {
            result.add_error("weather.timeout_secs", "Timeout must be greater than 0");
        } else if self.weather.timeout_secs > 60 {
            result.add_warning(
                "weather.timeout_secs",
                "Timeout is unusually long (>60s); page loads will block that long",
            );
        }

        if self.weather.num_of_rows == 0 {
            result.add_error("weather.num_of_rows", "Row count must be greater than 0");
        }

        if self.weather.nx == 0 || self.weather.ny == 0 {
            result.add_error("weather.nx/ny", "Grid coordinates must be positive");
        }

        if self.weather.accept_invalid_certs {
            result.add_warning(
                "weather.accept_invalid_certs",
                "TLS certificate verification is disabled for the weather endpoint",
            );
        }

        result
    }

    /// Validate a URL field
    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                } else if url.scheme() == "http" {
                    result.add_warning(field_name, "URL is not using https");
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Directory holding `config.toml` and `secrets.toml`
    pub fn config_dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Failed to get config directory")?
            .join("dermacast"))
    }

    /// Get the default path to the configuration file
    fn default_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_default_config() {
        let config = Config::default();
        let result = config.validate();
        // Default config should be valid (only warnings, no errors)
        assert!(result.is_valid(), "Default config should be valid: {:?}", result.errors);
    }

    #[test]
    fn test_default_weather_settings() {
        let weather = WeatherConfig::default();
        assert_eq!(weather.nx, 57);
        assert_eq!(weather.ny, 126);
        assert_eq!(weather.num_of_rows, 100);
        assert_eq!(weather.timeout_secs, 10);
        assert!(weather.accept_invalid_certs);
        assert_eq!(weather.endpoint, DEFAULT_WEATHER_ENDPOINT);
    }

    #[test]
    fn test_disabled_tls_verification_is_warning() {
        let result = Config::default().validate();
        assert!(result
            .warnings
            .iter()
            .any(|w| w.field == "weather.accept_invalid_certs"));
    }

    #[test]
    fn test_invalid_url() {
        let mut config = Config::default();
        config.weather.endpoint = "not-a-url".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "weather.endpoint"));
    }

    #[test]
    fn test_invalid_url_scheme() {
        let mut config = Config::default();
        config.weather.endpoint = "ftp://localhost:8080".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.message.contains("http or https")));
    }

    #[test]
    fn test_zero_timeout_is_error() {
        let mut config = Config::default();
        config.weather.timeout_secs = 0;
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "weather.timeout_secs"));
    }

    #[test]
    fn test_validation_result_error_summary() {
        let mut result = ValidationResult::default();
        result.add_error("field1", "error1");
        result.add_error("field2", "error2");
        let summary = result.error_summary();
        assert!(summary.contains("field1"));
        assert!(summary.contains("field2"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[weather]\nnx = 60\nny = 127\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.weather.nx, 60);
        assert_eq!(config.weather.ny, 127);
        assert_eq!(config.weather.timeout_secs, 10);
        assert_eq!(config.server.port, 8501);
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(Config::load(Some(&path)).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(Some("0.0.0.0".into()), Some("9000".into()))
            .unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);

        let err = config.apply_overrides(None, Some("http".into()));
        assert!(matches!(err, Err(ConfigError::Invalid(_))));
    }
}
