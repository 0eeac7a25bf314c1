//! KMA ultra-short-term observation client.

use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

use crate::types::{FetchError, ObservationEnvelope};
use crate::window::ObservationWindow;

const MAX_ERROR_BODY: usize = 256;

/// Anything that can produce an observation envelope for a window
#[async_trait]
pub trait ObservationSource: Send + Sync {
    async fn fetch(&self, window: &ObservationWindow) -> Result<ObservationEnvelope, FetchError>;
}

/// Connection settings for [`WeatherProvider`]
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub endpoint: String,
    pub nx: u16,
    pub ny: u16,
    pub num_of_rows: u32,
    pub timeout: Duration,
    /// Skip TLS certificate verification. The upstream chain does not verify
    /// reliably; keeping this on is a trust decision, not an oversight.
    pub accept_invalid_certs: bool,
}

#[derive(Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    config: ProviderConfig,
    service_key: String,
}

impl std::fmt::Debug for WeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherProvider")
            .field("config", &self.config)
            .field("service_key", &"***")
            .finish()
    }
}

impl WeatherProvider {
    pub fn new(config: ProviderConfig, service_key: impl Into<String>) -> Result<Self, FetchError> {
        if config.accept_invalid_certs {
            tracing::warn!(
                "TLS certificate verification disabled for {}",
                config.endpoint
            );
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client: Arc::new(client),
            config,
            service_key: service_key.into(),
        })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn query_params(&self, window: &ObservationWindow) -> Vec<(&'static str, String)> {
        vec![
            ("serviceKey", self.service_key.clone()),
            ("pageNo", "1".to_string()),
            ("numOfRows", self.config.num_of_rows.to_string()),
            ("dataType", "JSON".to_string()),
            ("base_date", window.base_date.clone()),
            ("base_time", window.base_time.clone()),
            ("nx", self.config.nx.to_string()),
            ("ny", self.config.ny.to_string()),
        ]
    }
}

#[async_trait]
impl ObservationSource for WeatherProvider {
    #[instrument(skip(self), level = "info")]
    async fn fetch(&self, window: &ObservationWindow) -> Result<ObservationEnvelope, FetchError> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&self.query_params(window))
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;

        let status = response.status();
        let body = response.text().await.map_err(FetchError::from_reqwest)?;

        if !status.is_success() {
            tracing::warn!("Weather endpoint returned status {}", status);
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        // Key and quota errors come back as XML with a 200 status
        let raw: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| FetchError::NotJson(e.to_string()))?;
        let envelope = ObservationEnvelope::new(raw);

        // A non-"00" code still carries a parseable envelope; parsing finds no items
        if let Some(header) = envelope.header() {
            if !header.is_ok() {
                tracing::warn!(
                    "Weather service returned result code {} ({})",
                    header.result_code,
                    header.result_msg
                );
            }
        }

        tracing::debug!(
            "Fetched {} observation items",
            envelope.items().map_or(0, <[serde_json::Value]>::len)
        );
        Ok(envelope)
    }
}
