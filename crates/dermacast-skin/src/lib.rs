//! Weather → skin condition classification and ingredient lookup.

pub mod condition;
pub mod recommend;

pub use condition::{classify, ConditionSet, ConditionTag};
pub use recommend::{lookup, lookup_in, RecommendationEntry, RECOMMENDATIONS};
