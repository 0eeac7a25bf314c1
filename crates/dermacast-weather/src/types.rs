use serde::{Deserialize, Serialize};
use serde_json::Value;

/// KMA `resultCode` for a normal response
pub const RESULT_OK: &str = "00";

/// Observation categories reported by the ultra-short-term service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// `T1H`: air temperature (°C)
    Temperature,
    /// `REH`: relative humidity (%)
    Humidity,
    /// `UV`: UV index
    UvIndex,
    /// Any other code (`RN1`, `WSD`, `PTY`, ...). Carried but not classified.
    Other(String),
}

impl Category {
    /// Map a KMA category code
    pub fn from_code(code: &str) -> Self {
        match code {
            "T1H" => Self::Temperature,
            "REH" => Self::Humidity,
            "UV" => Self::UvIndex,
            other => Self::Other(other.to_string()),
        }
    }
}

/// One parsed reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub category: Category,
    pub value: f64,
}

impl Observation {
    pub fn new(category: Category, value: f64) -> Self {
        Self { category, value }
    }
}

/// `response.header` of the KMA envelope
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnvelopeHeader {
    #[serde(rename = "resultCode")]
    pub result_code: String,
    #[serde(rename = "resultMsg", default)]
    pub result_msg: String,
}

impl EnvelopeHeader {
    pub fn is_ok(&self) -> bool {
        self.result_code == RESULT_OK
    }
}

/// Parsed JSON body returned by the observation endpoint.
///
/// The body is kept as a raw value so item-level damage can be isolated
/// during parsing instead of failing deserialization as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationEnvelope {
    raw: Value,
}

impl ObservationEnvelope {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// `response.header`, if present and well-formed
    pub fn header(&self) -> Option<EnvelopeHeader> {
        self.raw
            .pointer("/response/header")
            .and_then(|h| serde_json::from_value(h.clone()).ok())
    }

    /// `response.body.items.item`, if present and an array.
    ///
    /// The service sends `"items": ""` when it has nothing to report.
    pub fn items(&self) -> Option<&[Value]> {
        self.raw
            .pointer("/response/body/items/item")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }
}

/// Weather fetch failures. Terminal for the current run.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP client could not be built: {0}")]
    Client(String),
    #[error("Request timed out")]
    Timeout,
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Unexpected HTTP status {status}")]
    Status { status: u16, body: String },
    #[error("Response was not valid JSON: {0}")]
    NotJson(String),
}

impl FetchError {
    /// Classify a reqwest failure
    pub fn from_reqwest(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_builder() {
            Self::Client(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}
