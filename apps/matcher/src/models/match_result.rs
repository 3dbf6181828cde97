use serde::{Deserialize, Serialize};

/// Outcome of scoring one candidate against one requirements text.
/// Computed per request and discarded; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Compatibility percentage in [0, 100]. Any visible keyword match is
    /// floored at the basic-match level.
    pub percentage: u32,
    pub reasoning: String,
}

/// One entry of a ranked batch response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub candidate_id: i64,
    pub name: String,
    pub percentage: u32,
    pub reasoning: String,
}
