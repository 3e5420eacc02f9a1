//! Workspace-wide defaults and tuning constants.
//!
//! Values mirror the reference deployment: a catalog in the low thousands of
//! entries embedded with a 384-dimension sentence model.

/// Embedding dimension produced by the default sentence model.
pub const DEFAULT_EMBEDDING_DIMENSION: usize = 384;

/// Candidates pulled from the index before ranking.
pub const DEFAULT_RETRIEVE_K: usize = 50;

/// Final recommendations returned to the caller.
pub const DEFAULT_TOP_K: usize = 10;

/// Below this many results the engine emits a warning (never an error).
pub const DEFAULT_MIN_RESULTS: usize = 5;

/// Candidates handed to the optional reranker collaborator.
pub const DEFAULT_RERANK_TOP_K: usize = 20;

/// Cap on keywords kept per assessment.
pub const MAX_KEYWORDS: usize = 20;

/// A category with any signal at all is never targeted below this share.
pub const CATEGORY_WEIGHT_FLOOR: f64 = 0.3;

/// Category-match boost ceiling: `1 + weight * CATEGORY_BOOST_FACTOR`.
pub const CATEGORY_BOOST_FACTOR: f64 = 0.5;

/// Per-keyword-overlap boost increment.
pub const KEYWORD_BOOST_STEP: f64 = 0.1;

/// Keyword-overlap boost ceiling.
pub const KEYWORD_BOOST_CAP: f64 = 0.3;
