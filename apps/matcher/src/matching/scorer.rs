//! Match scoring — pluggable scorer that measures a candidate record
//! against free-text job requirements.
//!
//! Default: `KeywordMatchScorer` (pure-Rust, fast, deterministic, fully
//! testable). Callers hold an `Arc<dyn MatchScorer>`, so a semantic backend
//! can be swapped in without touching them.

use std::collections::HashSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::MatchError;
use crate::matching::keywords::{extract_keywords, is_important};
use crate::matching::reasoning::{reasoning_for, NO_MATCH_REASONING};
use crate::matching::tiers::{base_score, MatchRatios};
use crate::models::candidate::CandidateRecord;
use crate::models::match_result::MatchResult;

// ────────────────────────────────────────────────────────────────────────────
// Scoring configuration
// ────────────────────────────────────────────────────────────────────────────

/// Immutable scoring constants. Built once at startup; override in tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Bonus (fraction of 100) when the candidate's specialty appears
    /// verbatim, case-insensitively, in the requirements text.
    pub specialty_bonus: f64,
    /// Cap on the years-of-experience bonus (fraction of 100).
    pub experience_bonus_cap: f64,
    /// Years divisor feeding the experience bonus.
    pub experience_divisor: f64,
    /// Any visible match scores at least this much.
    pub match_floor: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            specialty_bonus: 0.15,
            experience_bonus_cap: 0.1,
            experience_divisor: 50.0,
            match_floor: 70,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The match scorer trait. Implement this to swap backends without touching
/// ranking or caller code.
#[async_trait]
pub trait MatchScorer: Send + Sync {
    async fn score(
        &self,
        requirements: &str,
        candidate: &CandidateRecord,
    ) -> Result<MatchResult, MatchError>;
}

/// Pure keyword-overlap scorer. No I/O, no shared state; every invocation
/// is independent, so it is safe to call concurrently across requests.
#[derive(Debug, Default)]
pub struct KeywordMatchScorer {
    config: ScoringConfig,
}

impl KeywordMatchScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl MatchScorer for KeywordMatchScorer {
    async fn score(
        &self,
        requirements: &str,
        candidate: &CandidateRecord,
    ) -> Result<MatchResult, MatchError> {
        Ok(compute_keyword_match(requirements, candidate, &self.config))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core keyword match algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Scores `candidate` against `requirements`.
///
/// Both texts are tokenized with the same keyword rule (duplicates kept).
/// Requirement keywords found verbatim in the candidate vocabulary are exact
/// matches; the rest match partially when a bidirectional substring test
/// succeeds against any candidate token. A tier table turns the match
/// ratios into a base score, specialty and experience bonuses are added,
/// and the result is clamped to 100 and floored at `match_floor`.
///
/// No overlap at all short-circuits to percentage 0 — the floor never
/// applies there, and empty or all-stopword requirements take this path,
/// so the ratio divisions are guarded.
pub fn compute_keyword_match(
    requirements: &str,
    candidate: &CandidateRecord,
    config: &ScoringConfig,
) -> MatchResult {
    let req_words = extract_keywords(requirements);
    let important_words: Vec<&str> = req_words
        .iter()
        .map(String::as_str)
        .filter(|w| is_important(w))
        .collect();

    let cv_text = candidate.profile_text();
    let cv_words = extract_keywords(&cv_text);
    let cv_vocab: HashSet<&str> = cv_words.iter().map(String::as_str).collect();

    let exact_matches: Vec<&str> = req_words
        .iter()
        .map(String::as_str)
        .filter(|w| cv_vocab.contains(w))
        .collect();
    let exact_vocab: HashSet<&str> = exact_matches.iter().copied().collect();

    let partial_matches: Vec<&str> = req_words
        .iter()
        .map(String::as_str)
        .filter(|w| !exact_vocab.contains(w))
        .filter(|w| {
            cv_words
                .iter()
                .any(|cv| cv.contains(*w) || w.contains(cv.as_str()))
        })
        .collect();

    let important_matches: Vec<&str> = important_words
        .iter()
        .copied()
        .filter(|w| exact_vocab.contains(w))
        .collect();

    let total_matches = exact_matches.len() + partial_matches.len();
    if total_matches == 0 {
        return MatchResult {
            percentage: 0,
            reasoning: NO_MATCH_REASONING.to_owned(),
        };
    }

    // total_matches > 0 implies req_words is non-empty.
    let req_count = req_words.len() as f64;
    let ratios = MatchRatios {
        exact: exact_matches.len() as f64 / req_count,
        partial: partial_matches.len() as f64 / req_count,
        important: important_matches.len() as f64 / important_words.len().max(1) as f64,
        total: total_matches as f64 / req_count,
    };

    let base = base_score(&ratios);
    let specialty = specialty_bonus(requirements, &candidate.professional_specialty, config);
    let experience = experience_bonus(candidate.total_years_experience, config);

    tracing::debug!(
        candidate = %candidate.name,
        exact = ?exact_matches,
        partial = ?partial_matches,
        important = ?important_matches,
        exact_ratio = ratios.exact,
        partial_ratio = ratios.partial,
        important_ratio = ratios.important,
        total_ratio = ratios.total,
        base,
        specialty_bonus = specialty,
        experience_bonus = experience,
        "keyword match computed"
    );

    let raw = base + specialty * 100.0 + experience * 100.0;
    let percentage = (raw.min(100.0).round() as u32).max(config.match_floor);

    MatchResult {
        percentage,
        reasoning: reasoning_for(percentage),
    }
}

/// `specialty_bonus` from the config when the candidate's specialty is a
/// non-empty case-insensitive substring of the requirements text.
fn specialty_bonus(requirements: &str, specialty: &str, config: &ScoringConfig) -> f64 {
    if !specialty.is_empty()
        && requirements
            .to_lowercase()
            .contains(&specialty.to_lowercase())
    {
        config.specialty_bonus
    } else {
        0.0
    }
}

/// Years-of-experience bonus, linear in years and capped.
fn experience_bonus(total_years: f64, config: &ScoringConfig) -> f64 {
    if total_years > 0.0 {
        (total_years / config.experience_divisor).min(config.experience_bonus_cap)
    } else {
        0.0
    }
}
