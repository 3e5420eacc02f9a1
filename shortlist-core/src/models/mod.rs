//! Data model for the recommendation engine.

mod analysis;
mod assessment;
mod candidate;
mod recommendation;

pub use analysis::{CategoryWeights, QueryAnalysis};
pub use assessment::{Assessment, Category};
pub use candidate::Candidate;
pub use recommendation::{Recommendation, RecommendationSet};
