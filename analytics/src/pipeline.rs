//! Run-level orchestration: one aggregation pass per fetched post set.

use tracing::{info, warn};

use socialscope_core::{AnalysisRun, CoreError, Post, SocialNetwork};

use crate::classify::PolarityScorer;
use crate::stats::StatsAggregator;

/// Run the aggregation pipeline once over a fetched post set.
///
/// A zero-post set surfaces as [`CoreError::EmptyResult`] — a reportable
/// business condition, not a system fault, and never retried here.
/// Unsupported networks fetch empty sequences, so they land on the same
/// condition as a genuinely empty search.
pub fn run(
    network: SocialNetwork,
    keyword: &str,
    posts: &[Post],
    scorer: &dyn PolarityScorer,
) -> Result<AnalysisRun, CoreError> {
    if posts.is_empty() {
        warn!("No posts on {} for '{}'", network, keyword);
        return Err(CoreError::EmptyResult {
            network,
            keyword: keyword.to_string(),
        });
    }

    info!(
        "Aggregating {} posts from {} for '{}'",
        posts.len(),
        network,
        keyword
    );
    let (counts, summary) = StatsAggregator::new(scorer).aggregate(posts)?;
    Ok(AnalysisRun::new(
        network,
        keyword.to_string(),
        counts,
        summary,
    ))
}
