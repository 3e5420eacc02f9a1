//! Engine configuration.
//!
//! All fields default to the reference deployment values in [`crate::constants`],
//! so an empty TOML document is a valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ShortlistResult;

/// Similarity index configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Fixed embedding dimension for the process lifetime.
    pub dimension: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            dimension: constants::DEFAULT_EMBEDDING_DIMENSION,
        }
    }
}

/// Retrieval and ranking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Candidates pulled from the index before ranking.
    pub retrieve_k: usize,
    /// Final recommendations returned per query.
    pub top_k: usize,
    /// Below this many results a warning is emitted.
    pub min_results: usize,
    /// Candidates handed to the optional reranker.
    pub rerank_top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            retrieve_k: constants::DEFAULT_RETRIEVE_K,
            top_k: constants::DEFAULT_TOP_K,
            min_results: constants::DEFAULT_MIN_RESULTS,
            rerank_top_k: constants::DEFAULT_RERANK_TOP_K,
        }
    }
}

/// Top-level configuration for the recommendation engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    pub index: IndexConfig,
    pub retrieval: RetrievalConfig,
}

impl RecommenderConfig {
    /// Parse from a TOML document. Missing sections and fields take defaults.
    pub fn from_toml_str(raw: &str) -> ShortlistResult<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Load from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ShortlistResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}
