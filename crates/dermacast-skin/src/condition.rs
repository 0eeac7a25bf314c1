use std::collections::BTreeSet;

use dermacast_weather::{Category, Observation};
use serde::{Deserialize, Serialize};

/// Below this temperature (°C) the air is cold
pub const COLD_BELOW_C: f64 = 10.0;
/// Above this temperature (°C) the air is hot
pub const HOT_ABOVE_C: f64 = 27.0;
/// Below this relative humidity (%) the air is dry
pub const DRY_BELOW_PCT: f64 = 40.0;
/// Above this relative humidity (%) the air is humid
pub const HUMID_ABOVE_PCT: f64 = 75.0;
/// Above this UV index exposure is strong
pub const HIGH_UV_ABOVE: f64 = 7.0;

/// Skin-relevant environmental condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionTag {
    Cold,
    Hot,
    Dry,
    Humid,
    HighUv,
}

/// Set of detected tags, iterated in declaration order
pub type ConditionSet = BTreeSet<ConditionTag>;

impl ConditionTag {
    pub const ALL: [ConditionTag; 5] = [
        Self::Cold,
        Self::Hot,
        Self::Dry,
        Self::Humid,
        Self::HighUv,
    ];

    /// Get a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cold => "Cold",
            Self::Hot => "Hot",
            Self::Dry => "Dry",
            Self::Humid => "Humid",
            Self::HighUv => "Strong UV",
        }
    }

    /// Stable identifier, matches the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cold => "cold",
            Self::Hot => "hot",
            Self::Dry => "dry",
            Self::Humid => "humid",
            Self::HighUv => "high_uv",
        }
    }

    /// Tag for a single reading, if it crosses a threshold.
    ///
    /// At most one tag per reading: the two bounds of each category never
    /// overlap.
    pub fn for_observation(obs: &Observation) -> Option<Self> {
        let v = obs.value;
        match obs.category {
            Category::Temperature if v < COLD_BELOW_C => Some(Self::Cold),
            Category::Temperature if v > HOT_ABOVE_C => Some(Self::Hot),
            Category::Humidity if v < DRY_BELOW_PCT => Some(Self::Dry),
            Category::Humidity if v > HUMID_ABOVE_PCT => Some(Self::Humid),
            Category::UvIndex if v > HIGH_UV_ABOVE => Some(Self::HighUv),
            _ => None,
        }
    }
}

impl std::fmt::Display for ConditionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a set of observations into condition tags.
pub fn classify(observations: &[Observation]) -> ConditionSet {
    let tags: ConditionSet = observations
        .iter()
        .filter_map(ConditionTag::for_observation)
        .collect();
    tracing::debug!("Classified {} observations into {:?}", observations.len(), tags);
    tags
}
