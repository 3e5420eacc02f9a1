//! Pure intent-aware rescoring of raw similarity candidates.

use shortlist_core::constants::{CATEGORY_BOOST_FACTOR, KEYWORD_BOOST_CAP, KEYWORD_BOOST_STEP};
use shortlist_core::models::{Candidate, QueryAnalysis};

/// Rescore one candidate against the query intent.
///
/// Two bounded multiplicative boosts compose on top of the raw similarity
/// score (order is irrelevant, both are `score *= factor`):
///
/// 1. Category boost: `1 + weight * 0.5` when the candidate's category has a
///    target share (up to 50%).
/// 2. Keyword overlap boost: `1 + min(overlap * 0.1, 0.3)` over the
///    intersection of the assessment's keywords with all matched skills
///    (up to 30%).
///
/// Pure: returns a new candidate, never mutates shared state.
pub fn score(candidate: &Candidate, analysis: &QueryAnalysis) -> Candidate {
    let mut score = candidate.score;

    let weight = analysis.weights.get(candidate.assessment.category);
    if weight > 0.0 {
        score *= 1.0 + weight * CATEGORY_BOOST_FACTOR;
    }

    let overlap = candidate
        .assessment
        .keywords
        .iter()
        .filter(|kw| analysis.matched_skills().any(|skill| skill == kw.as_str()))
        .count();
    if overlap > 0 {
        score *= 1.0 + (overlap as f64 * KEYWORD_BOOST_STEP).min(KEYWORD_BOOST_CAP);
    }

    candidate.with_score(score)
}
