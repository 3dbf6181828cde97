//! Matching engine for parsed CV records: keyword extraction, tiered
//! percentage scoring, and batch ranking against free-text job requirements.
//!
//! Persistence and transport are external collaborators — this crate only
//! computes `{percentage, reasoning}` from a requirements string and a
//! candidate record.

pub mod config;
pub mod errors;
pub mod matching;
pub mod models;

pub use errors::MatchError;
pub use matching::ranking::rank_candidates;
pub use matching::scorer::{
    compute_keyword_match, KeywordMatchScorer, MatchScorer, ScoringConfig,
};
pub use models::candidate::{CandidateRecord, ExperienceEntry};
pub use models::match_result::{MatchResult, RankedCandidate};
