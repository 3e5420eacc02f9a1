//! Error taxonomy for the shortlist workspace.
//!
//! Structural errors (dimension mismatches, invalid catalog entries) abort the
//! current request with a clear diagnostic. Data-sparsity conditions (empty
//! index, fewer results than wanted) degrade gracefully and are never errors.

mod catalog_error;
mod index_error;

pub use catalog_error::CatalogError;
pub use index_error::IndexError;

/// Top-level error type. Subsystem errors convert in via `#[from]`.
#[derive(Debug, thiserror::Error)]
pub enum ShortlistError {
    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The embedding collaborator failed. Fatal for the single request: a
    /// zero/garbage vector must never reach the index.
    #[error("embedding failed: {reason}")]
    Embedding { reason: String },

    /// The optional reranker collaborator failed. Callers fall back to the
    /// engine's own ranking rather than surfacing this to users.
    #[error("reranker failed: {reason}")]
    Rerank { reason: String },

    /// Empty query text is caller error, distinguishable from a request that
    /// legitimately produced zero recommendations.
    #[error("query text is empty")]
    EmptyQuery,

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Workspace-wide result alias.
pub type ShortlistResult<T> = Result<T, ShortlistError>;
