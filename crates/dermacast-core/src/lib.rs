pub mod config;
pub mod error;
pub mod secrets;

pub use config::{Config, ServerConfig, ValidationResult, WeatherConfig, DEFAULT_WEATHER_ENDPOINT};
pub use error::{AppError, ConfigError, NetworkError, WeatherError};
pub use secrets::{load_credential, ApiCredential, API_KEY_VAR};

use anyhow::Result;

/// Initialize logging for the application
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::info!("Dermacast core initialized");
    Ok(())
}
