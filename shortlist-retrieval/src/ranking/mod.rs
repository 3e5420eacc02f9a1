//! Balanced ranking: rescore → deduplicate → balance (or plain sort) → cap.

pub mod balance;
pub mod dedup;
pub mod scorer;

use tracing::{debug, warn};

use shortlist_core::models::{Candidate, QueryAnalysis};

/// The ranking entry point over raw search candidates.
pub struct RankingPipeline {
    min_results: usize,
}

impl RankingPipeline {
    pub fn new(min_results: usize) -> Self {
        Self { min_results }
    }

    /// Rescore, deduplicate, and size-bound candidates for one query.
    ///
    /// Cross-category balancing only applies when the analysis asked for it;
    /// otherwise this is a plain sort-and-truncate. A result shorter than
    /// `min_results` is a warning, never an error, and is never padded.
    pub fn rank_and_balance(
        &self,
        candidates: &[Candidate],
        analysis: &QueryAnalysis,
        k: usize,
    ) -> Vec<Candidate> {
        let rescored: Vec<Candidate> = candidates
            .iter()
            .map(|c| scorer::score(c, analysis))
            .collect();

        let mut unique = dedup::deduplicate(rescored);

        let ranked = if analysis.needs_balance {
            debug!("applying category balancing");
            balance::balance(unique, &analysis.weights, k)
        } else {
            unique.sort_by(|a, b| {
                b.score
                    .partial_cmp(&a.score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            unique.truncate(k);
            unique
        };

        if ranked.len() < self.min_results {
            warn!(
                results = ranked.len(),
                min_results = self.min_results,
                "fewer results than wanted"
            );
        }
        ranked
    }
}

impl Default for RankingPipeline {
    fn default() -> Self {
        Self::new(shortlist_core::constants::DEFAULT_MIN_RESULTS)
    }
}
