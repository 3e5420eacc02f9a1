//! # shortlist-retrieval
//!
//! Query-intent analysis, balanced ranking, and the orchestrating
//! recommendation engine: query → embed → index search → analyze →
//! rank-and-balance → recommendations.

pub mod analyzer;
pub mod engine;
pub mod eval;
pub mod ranking;

pub use analyzer::QueryAnalyzer;
pub use engine::RecommendationEngine;
