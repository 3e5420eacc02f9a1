//! Trait seams for external collaborators.

mod catalog;
mod embedding;
mod reranker;

pub use catalog::ICatalogSource;
pub use embedding::IEmbeddingProvider;
pub use reranker::IReranker;
