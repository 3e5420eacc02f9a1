use std::sync::Arc;

use super::Assessment;

/// An assessment paired with a transient relevance score.
///
/// Produced by search and ranking stages, recomputed per request, never
/// persisted. The `Arc` points into the index's catalog snapshot, so scoring
/// the same assessment across concurrent requests never interferes.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub assessment: Arc<Assessment>,
    pub score: f64,
}

impl Candidate {
    pub fn new(assessment: Arc<Assessment>, score: f64) -> Self {
        Self { assessment, score }
    }

    /// Same candidate with a different score. Scoring is pure: the input
    /// candidate is left untouched.
    pub fn with_score(&self, score: f64) -> Self {
        Self {
            assessment: Arc::clone(&self.assessment),
            score,
        }
    }
}
