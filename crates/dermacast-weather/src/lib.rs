//! Weather observations for Dermacast
//!
//! Fetches the KMA ultra-short-term observation snapshot for one grid cell and
//! parses it into typed readings.

pub mod parse;
pub mod provider;
pub mod types;
pub mod window;

pub use parse::{parse_observations, ParsedObservations, PartialParseError};
pub use provider::{ObservationSource, ProviderConfig, WeatherProvider};
pub use types::*;
pub use window::{provider_now, resolve_window, ObservationWindow, PROVIDER_TZ, PUBLISH_MINUTE};
