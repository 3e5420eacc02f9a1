//! # shortlist-core
//!
//! Foundation crate for the shortlist assessment recommendation engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use catalog::Catalog;
pub use config::RecommenderConfig;
pub use errors::{ShortlistError, ShortlistResult};
pub use models::{Assessment, Candidate, Category, CategoryWeights, QueryAnalysis, Recommendation};
