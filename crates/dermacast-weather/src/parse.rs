//! Envelope → observation parsing with per-item failure isolation.

use serde::Serialize;
use serde_json::Value;

use crate::types::{Category, Observation, ObservationEnvelope};

/// A single item that could not be turned into an [`Observation`]
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
pub enum PartialParseError {
    #[error("envelope has no item list")]
    NoItems,
    #[error("item {index} is not an object")]
    NotAnObject { index: usize },
    #[error("item {index} has no category")]
    MissingCategory { index: usize },
    #[error("item {index} ({category}) has no obsrValue")]
    MissingValue { index: usize, category: String },
    #[error("item {index} ({category}) has non-numeric obsrValue {raw:?}")]
    InvalidValue {
        index: usize,
        category: String,
        raw: String,
    },
}

/// Observations recovered from an envelope, plus the items that were skipped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedObservations {
    pub observations: Vec<Observation>,
    pub skipped: Vec<PartialParseError>,
}

impl ParsedObservations {
    pub fn is_degraded(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Parse every item of `envelope`, skipping the malformed ones.
pub fn parse_observations(envelope: &ObservationEnvelope) -> ParsedObservations {
    let Some(items) = envelope.items() else {
        tracing::warn!("Observation envelope has no item list");
        return ParsedObservations {
            observations: Vec::new(),
            skipped: vec![PartialParseError::NoItems],
        };
    };

    let mut parsed = ParsedObservations::default();
    for (index, item) in items.iter().enumerate() {
        match parse_item(index, item) {
            Ok(obs) => parsed.observations.push(obs),
            Err(e) => {
                tracing::debug!("Skipping observation item: {}", e);
                parsed.skipped.push(e);
            }
        }
    }

    if parsed.is_degraded() {
        tracing::warn!(
            "Skipped {} of {} observation items",
            parsed.skipped.len(),
            items.len()
        );
    }
    parsed
}

fn parse_item(index: usize, item: &Value) -> Result<Observation, PartialParseError> {
    let obj = item
        .as_object()
        .ok_or(PartialParseError::NotAnObject { index })?;

    let code = obj
        .get("category")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or(PartialParseError::MissingCategory { index })?;

    let raw = match obj.get("obsrValue") {
        None | Some(Value::Null) => {
            return Err(PartialParseError::MissingValue {
                index,
                category: code.to_string(),
            })
        }
        Some(v) => v,
    };

    let value = numeric_value(raw).ok_or_else(|| PartialParseError::InvalidValue {
        index,
        category: code.to_string(),
        raw: raw.to_string(),
    })?;

    Ok(Observation::new(Category::from_code(code), value))
}

/// `obsrValue` is documented as a string but numbers are accepted too
fn numeric_value(raw: &Value) -> Option<f64> {
    let value = match raw {
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        Value::Number(n) => n.as_f64()?,
        _ => return None,
    };
    value.is_finite().then_some(value)
}
