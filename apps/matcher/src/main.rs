use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde_json::json;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use matcher::config::Config;
use matcher::matching::ranking::rank_candidates;
use matcher::matching::scorer::KeywordMatchScorer;
use matcher::models::candidate::CandidateRecord;

/// Scores a stored batch of candidate records against job requirements and
/// prints the ranked report as JSON.
///
/// Usage: `matcher <candidates.json> <requirements text...>`
#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let candidates_path: PathBuf = match args.next() {
        Some(path) => PathBuf::from(path),
        None => bail!("usage: matcher <candidates.json> <requirements text...>"),
    };
    let requirements = args.collect::<Vec<_>>().join(" ");
    if requirements.trim().is_empty() {
        bail!("usage: matcher <candidates.json> <requirements text...>");
    }

    info!("Starting matcher v{}", env!("CARGO_PKG_VERSION"));

    let raw = std::fs::read_to_string(&candidates_path)
        .with_context(|| format!("reading {}", candidates_path.display()))?;
    let candidates: Vec<CandidateRecord> =
        serde_json::from_str(&raw).context("parsing candidate records")?;
    info!("Loaded {} candidate records", candidates.len());

    let scorer = KeywordMatchScorer::default();
    let ranked = rank_candidates(&scorer, &requirements, &candidates).await?;

    let report = json!({
        "total_analyzed": candidates.len(),
        "matches": ranked,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
