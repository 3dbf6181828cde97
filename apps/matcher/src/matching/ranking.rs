use crate::errors::MatchError;
use crate::matching::scorer::MatchScorer;
use crate::models::candidate::CandidateRecord;
use crate::models::match_result::RankedCandidate;

/// Scores every candidate against one requirements text and returns them
/// ranked by descending percentage. The sort is stable, so equal scores
/// keep their input order. Zero-match candidates stay in the list with
/// percentage 0; callers may filter.
pub async fn rank_candidates(
    scorer: &dyn MatchScorer,
    requirements: &str,
    candidates: &[CandidateRecord],
) -> Result<Vec<RankedCandidate>, MatchError> {
    let mut ranked = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let result = scorer.score(requirements, candidate).await?;
        ranked.push(RankedCandidate {
            candidate_id: candidate.id,
            name: candidate.name.clone(),
            percentage: result.percentage,
            reasoning: result.reasoning,
        });
    }

    ranked.sort_by(|a, b| b.percentage.cmp(&a.percentage));

    tracing::debug!(
        total_analyzed = candidates.len(),
        top = ranked.first().map(|m| m.percentage),
        "ranked candidates"
    );

    Ok(ranked)
}
