//! Weather API credential loading.
//!
//! The key comes from the `WEATHER_API_KEY` environment variable, falling back
//! to a `secrets.toml` file next to `config.toml`. Absence is a fatal startup
//! condition.

use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;

/// Name of the environment variable / secrets key holding the credential
pub const API_KEY_VAR: &str = "WEATHER_API_KEY";

const SECRETS_FILE: &str = "secrets.toml";

/// Service key for the weather API. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredential(String);

impl ApiCredential {
    /// Wrap a raw key, rejecting blank values
    pub fn new(raw: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::MissingSetting(API_KEY_VAR.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiCredential(***)")
    }
}

#[derive(Debug, Deserialize)]
struct SecretsFile {
    #[serde(rename = "WEATHER_API_KEY")]
    weather_api_key: Option<String>,
}

/// Load the credential from the environment, then from `<config_dir>/secrets.toml`.
pub fn load_credential(config_dir: &Path) -> Result<ApiCredential, ConfigError> {
    resolve_credential(std::env::var(API_KEY_VAR).ok(), config_dir)
}

fn resolve_credential(
    env_value: Option<String>,
    config_dir: &Path,
) -> Result<ApiCredential, ConfigError> {
    if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
        tracing::debug!("Using weather API key from environment");
        return ApiCredential::new(value);
    }

    let path = config_dir.join(SECRETS_FILE);
    if !path.exists() {
        return Err(ConfigError::MissingSetting(API_KEY_VAR.to_string()));
    }

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| ConfigError::Invalid(format!("{}: {}", path.display(), e)))?;
    let secrets: SecretsFile =
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    tracing::debug!("Using weather API key from {}", path.display());
    secrets
        .weather_api_key
        .ok_or_else(|| ConfigError::MissingSetting(API_KEY_VAR.to_string()))
        .and_then(ApiCredential::new)
}
