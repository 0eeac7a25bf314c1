//! Render model: one resolve → fetch → classify → lookup run.
//!
//! `advise` takes the clock instant and the observation source as explicit
//! inputs, so the whole flow is testable without a server.

use chrono::{DateTime, FixedOffset};
use chrono_tz::Tz;
use dermacast_skin::{classify, lookup, ConditionTag, RecommendationEntry};
use dermacast_weather::{parse_observations, resolve_window, ObservationSource, ObservationWindow};
use serde::Serialize;

use crate::error_mapping::FetchErrorExt;

pub const PAGE_TITLE: &str = "AI-Powered Skin Protection";
pub const LOADED_MESSAGE: &str = "Weather data loaded successfully.";
pub const NO_CONDITIONS_MESSAGE: &str = "No weather-related skin concerns detected right now.";

/// Everything the page needs to render one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageModel {
    pub title: String,
    pub window: ObservationWindow,
    pub fetched_at: DateTime<FixedOffset>,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Conditions {
        conditions: Vec<ConditionView>,
        recommendations: Vec<RecommendationView>,
    },
    NoConditions {
        message: String,
    },
    FetchFailed {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionView {
    pub tag: ConditionTag,
    pub label: String,
}

impl From<ConditionTag> for ConditionView {
    fn from(tag: ConditionTag) -> Self {
        Self {
            tag,
            label: tag.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationView {
    pub condition: String,
    pub ingredient: String,
    pub effect: String,
}

impl From<RecommendationEntry> for RecommendationView {
    fn from(entry: RecommendationEntry) -> Self {
        Self {
            condition: entry.condition.label().to_string(),
            ingredient: entry.ingredient.to_string(),
            effect: entry.effect.to_string(),
        }
    }
}

impl PageModel {
    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, Outcome::FetchFailed { .. })
    }

    pub fn recommendation_count(&self) -> usize {
        match &self.outcome {
            Outcome::Conditions {
                recommendations, ..
            } => recommendations.len(),
            _ => 0,
        }
    }
}

/// Run the full flow once against `source` at instant `now`.
pub async fn advise(source: &dyn ObservationSource, now: DateTime<Tz>) -> PageModel {
    let window = resolve_window(&now);
    tracing::info!(
        "Requesting observations for {} {}",
        window.base_date,
        window.base_time
    );

    let outcome = match source.fetch(&window).await {
        Err(e) => {
            tracing::warn!("Weather fetch failed: {}", e);
            let app_err = e.into_app_error();
            Outcome::FetchFailed {
                message: app_err.user_message().to_string(),
            }
        }
        Ok(envelope) => {
            let parsed = parse_observations(&envelope);
            let tags = classify(&parsed.observations);

            if tags.is_empty() {
                Outcome::NoConditions {
                    message: NO_CONDITIONS_MESSAGE.to_string(),
                }
            } else {
                Outcome::Conditions {
                    conditions: tags.iter().copied().map(ConditionView::from).collect(),
                    recommendations: lookup(&tags)
                        .into_iter()
                        .map(RecommendationView::from)
                        .collect(),
                }
            }
        }
    };

    PageModel {
        title: PAGE_TITLE.to_string(),
        window,
        fetched_at: now.fixed_offset(),
        outcome,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use chrono::TimeZone;
    use dermacast_weather::{FetchError, ObservationEnvelope, PROVIDER_TZ};
    use serde_json::{json, Value};
    use std::sync::Mutex;

    use super::*;

    /// Source returning a canned result and recording requested windows
    pub struct StubSource {
        result: fn() -> Result<ObservationEnvelope, FetchError>,
        pub seen: Mutex<Vec<ObservationWindow>>,
    }

    impl StubSource {
        pub fn new(result: fn() -> Result<ObservationEnvelope, FetchError>) -> Self {
            Self {
                result,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ObservationSource for StubSource {
        async fn fetch(
            &self,
            window: &ObservationWindow,
        ) -> Result<ObservationEnvelope, FetchError> {
            if let Ok(mut seen) = self.seen.lock() {
                seen.push(window.clone());
            }
            (self.result)()
        }
    }

    pub fn envelope(items: Value) -> ObservationEnvelope {
        ObservationEnvelope::new(json!({
            "response": {
                "header": {"resultCode": "00", "resultMsg": "NORMAL_SERVICE"},
                "body": {"items": {"item": items}}
            }
        }))
    }

    pub fn cold_dry() -> Result<ObservationEnvelope, FetchError> {
        Ok(envelope(json!([
            {"category": "T1H", "obsrValue": "5"},
            {"category": "REH", "obsrValue": "30"},
            {"category": "UV", "obsrValue": "2"}
        ])))
    }

    pub fn hot_humid_uv() -> Result<ObservationEnvelope, FetchError> {
        Ok(envelope(json!([
            {"category": "T1H", "obsrValue": "30"},
            {"category": "REH", "obsrValue": "80"},
            {"category": "UV", "obsrValue": "9"}
        ])))
    }

    pub fn mild() -> Result<ObservationEnvelope, FetchError> {
        Ok(envelope(json!([
            {"category": "T1H", "obsrValue": "20"},
            {"category": "REH", "obsrValue": "50"},
            {"category": "UV", "obsrValue": "3"}
        ])))
    }

    pub fn timed_out() -> Result<ObservationEnvelope, FetchError> {
        Err(FetchError::Timeout)
    }

    pub fn seoul_afternoon() -> DateTime<Tz> {
        PROVIDER_TZ
            .with_ymd_and_hms(2024, 6, 15, 14, 20, 0)
            .single()
            .unwrap()
    }
}
