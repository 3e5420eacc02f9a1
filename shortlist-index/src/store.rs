//! The shared, rebuildable vector store.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, info};

use shortlist_core::config::IndexConfig;
use shortlist_core::errors::{IndexError, ShortlistResult};
use shortlist_core::models::{Assessment, Candidate};

use crate::flat::FlatIndex;

/// Similarity index over the embedded catalog.
///
/// The only shared mutable resource in the engine. Readers-writer discipline:
/// any number of concurrent [`search`](Self::search) calls, one exclusive
/// [`build`](Self::build). A rebuild constructs the new index off-lock and
/// swaps it in as a single assignment, so in-flight searches observe either
/// the old or the new contents, never a torn state.
pub struct VectorStore {
    dimension: usize,
    inner: RwLock<FlatIndex>,
}

impl VectorStore {
    /// Create an empty store with a fixed dimension for its lifetime.
    pub fn new(dimension: usize) -> Self {
        info!(dimension, "initialized vector store");
        Self {
            dimension,
            inner: RwLock::new(FlatIndex::default()),
        }
    }

    pub fn with_config(config: &IndexConfig) -> Self {
        Self::new(config.dimension)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of indexed entries.
    ///
    /// Swap-only writes keep the inner index consistent even if a writer
    /// panicked, so a poisoned lock is safe to read through here.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace the index contents atomically.
    ///
    /// `assessments` and `embeddings` are parallel sequences; a length
    /// disagreement or any vector of the wrong dimension is rejected before
    /// anything is replaced. Prior contents survive a failed build untouched.
    pub fn build(
        &self,
        assessments: Vec<Assessment>,
        embeddings: Vec<Vec<f32>>,
    ) -> ShortlistResult<()> {
        if assessments.len() != embeddings.len() {
            return Err(IndexError::LengthMismatch {
                items: assessments.len(),
                vectors: embeddings.len(),
            }
            .into());
        }
        for vector in &embeddings {
            if vector.len() != self.dimension {
                return Err(IndexError::DimensionMismatch {
                    expected: self.dimension,
                    actual: vector.len(),
                }
                .into());
            }
        }

        let count = assessments.len();
        let entries = assessments
            .into_iter()
            .map(Arc::new)
            .zip(embeddings)
            .collect();
        let rebuilt = FlatIndex::new(entries);

        let mut guard = self.inner.write().map_err(|_| IndexError::Poisoned)?;
        *guard = rebuilt;
        drop(guard);

        info!(count, dimension = self.dimension, "rebuilt vector store");
        Ok(())
    }

    /// Return up to `k` candidates by descending similarity score.
    ///
    /// An empty index yields zero candidates, not an error. Fewer than `k`
    /// candidates come back when the index holds fewer entries.
    pub fn search(&self, query: &[f32], k: usize) -> ShortlistResult<Vec<Candidate>> {
        if query.len() != self.dimension {
            return Err(IndexError::DimensionMismatch {
                expected: self.dimension,
                actual: query.len(),
            }
            .into());
        }

        let guard = self.inner.read().map_err(|_| IndexError::Poisoned)?;
        if guard.len() == 0 {
            debug!("search on empty index");
            return Ok(Vec::new());
        }
        let hits = guard.search(query, k);
        drop(guard);

        debug!(k, hits = hits.len(), "vector search complete");
        Ok(hits)
    }
}
