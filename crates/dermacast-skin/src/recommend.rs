//! Static ingredient recommendations keyed by condition.

use serde::Serialize;

use crate::condition::{ConditionSet, ConditionTag};

/// One row of the recommendation table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RecommendationEntry {
    pub condition: ConditionTag,
    pub ingredient: &'static str,
    pub effect: &'static str,
}

/// The recommendation table. Exactly one row per [`ConditionTag`].
pub const RECOMMENDATIONS: [RecommendationEntry; 5] = [
    RecommendationEntry {
        condition: ConditionTag::Cold,
        ingredient: "Ceramide",
        effect: "Moisturizes and strengthens the skin barrier",
    },
    RecommendationEntry {
        condition: ConditionTag::Hot,
        ingredient: "Salicylic Acid",
        effect: "Dissolves excess sebum in pores",
    },
    RecommendationEntry {
        condition: ConditionTag::Dry,
        ingredient: "Hyaluronic Acid",
        effect: "Retains moisture",
    },
    RecommendationEntry {
        condition: ConditionTag::Humid,
        ingredient: "Green Tea Extract",
        effect: "Anti-inflammatory, soothing",
    },
    RecommendationEntry {
        condition: ConditionTag::HighUv,
        ingredient: "Sunscreen SPF50+",
        effect: "Prevents photoaging",
    },
];

/// Recommendations for `tags`, in table order.
pub fn lookup(tags: &ConditionSet) -> Vec<RecommendationEntry> {
    lookup_in(&RECOMMENDATIONS, tags)
}

/// Rows of `table` whose condition is in `tags`, first occurrence kept for
/// duplicate rows, in table order.
pub fn lookup_in(table: &[RecommendationEntry], tags: &ConditionSet) -> Vec<RecommendationEntry> {
    let mut matched: Vec<RecommendationEntry> = Vec::new();
    for entry in table.iter().filter(|e| tags.contains(&e.condition)) {
        if !matched.contains(entry) {
            matched.push(*entry);
        }
    }
    matched
}
