use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Candidate;

/// One recommended assessment, ready for a result consumer.
///
/// Scores are post-boost and may exceed 1.0 (bounded by ~1.5 after both
/// multiplicative boosts); consumers must not assume a closed [0, 1] range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub url: String,
    pub score: f64,
}

impl From<&Candidate> for Recommendation {
    fn from(candidate: &Candidate) -> Self {
        Self {
            name: candidate.assessment.name.clone(),
            url: candidate.assessment.url.clone(),
            score: candidate.score,
        }
    }
}

/// A full answer for one query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub query: String,
    pub recommendations: Vec<Recommendation>,
    pub generated_at: DateTime<Utc>,
}

impl RecommendationSet {
    pub fn new(query: impl Into<String>, recommendations: Vec<Recommendation>) -> Self {
        Self {
            query: query.into(),
            recommendations,
            generated_at: Utc::now(),
        }
    }
}
