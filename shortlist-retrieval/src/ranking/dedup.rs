//! Candidate deduplication by assessment url.

use std::collections::HashSet;

use shortlist_core::models::Candidate;

/// Keep the first-seen candidate per distinct url, preserving input order.
///
/// Later duplicates are dropped regardless of score, so callers that want the
/// best duplicate to win must pre-sort by score. Idempotent.
pub fn deduplicate(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut seen: HashSet<String> = HashSet::with_capacity(candidates.len());
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.assessment.url.clone()))
        .collect()
}
