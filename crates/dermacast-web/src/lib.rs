//! Dermacast web surface
//!
//! Serves the skin-protection page: each load or refresh resolves the current
//! observation window, fetches it, classifies it and renders recommendations.

pub mod advice;
pub mod error_mapping;
pub mod handlers;
pub mod page;
pub mod server;

pub use advice::{advise, Outcome, PageModel};
pub use handlers::{create_router, AppState};
pub use page::render_page;
pub use server::DermacastServer;

use std::sync::Arc;
use std::time::Duration;

use dermacast_core::{ApiCredential, AppError, Config, WeatherConfig};
use dermacast_weather::{ProviderConfig, WeatherProvider};

use crate::error_mapping::FetchErrorExt;

/// Build the weather provider from configuration and the loaded credential
pub fn build_provider(
    config: &WeatherConfig,
    credential: &ApiCredential,
) -> Result<WeatherProvider, AppError> {
    let provider_config = ProviderConfig {
        endpoint: config.endpoint.clone(),
        nx: config.nx,
        ny: config.ny,
        num_of_rows: config.num_of_rows,
        timeout: Duration::from_secs(config.timeout_secs),
        accept_invalid_certs: config.accept_invalid_certs,
    };

    WeatherProvider::new(provider_config, credential.expose()).map_err(|e| e.into_app_error())
}

/// Serve the page until shutdown
pub async fn run(config: Config, credential: ApiCredential) -> Result<(), AppError> {
    let provider = build_provider(&config.weather, &credential)?;
    tracing::info!(
        "Weather provider ready for grid {}/{} ({}s timeout)",
        config.weather.nx,
        config.weather.ny,
        config.weather.timeout_secs
    );

    let state = AppState::new(Arc::new(provider));
    DermacastServer::new(config.server, state).start().await
}
