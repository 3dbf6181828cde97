use thiserror::Error;

/// Engine-level error type shared by scorer backends.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid candidate record: {0}")]
    InvalidCandidate(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
