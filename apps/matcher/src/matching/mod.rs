// Matching engine: keyword extraction, tiered scoring, reasoning bands,
// batch ranking. The pure compute path lives here; storage and transport
// stay with the callers.

pub mod keywords;
pub mod ranking;
pub mod reasoning;
pub mod scorer;
pub mod tiers;
