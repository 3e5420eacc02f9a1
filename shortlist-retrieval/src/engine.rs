//! RecommendationEngine: orchestrates the full per-query pipeline.
//!
//! analyze intent → embed query → index search → optional rerank →
//! rank-and-balance → recommendations.

use std::sync::Arc;

use tracing::{debug, info, warn};

use shortlist_core::catalog::Catalog;
use shortlist_core::config::RecommenderConfig;
use shortlist_core::errors::{ShortlistError, ShortlistResult};
use shortlist_core::models::{Candidate, Recommendation, RecommendationSet};
use shortlist_core::traits::{IEmbeddingProvider, IReranker};
use shortlist_index::VectorStore;

use crate::analyzer::QueryAnalyzer;
use crate::ranking::RankingPipeline;

/// The end-to-end recommendation engine.
///
/// Owns the vector store (the only shared mutable state, rebuilt wholesale by
/// [`index_catalog`](Self::index_catalog)); everything else is recomputed per
/// request, so concurrent `recommend` calls need no coordination beyond the
/// store's own readers-writer discipline.
pub struct RecommendationEngine {
    embedder: Arc<dyn IEmbeddingProvider>,
    /// Optional reranking collaborator. The engine falls back to its own
    /// ranking when this is absent or fails.
    reranker: Option<Arc<dyn IReranker>>,
    store: VectorStore,
    ranking: RankingPipeline,
    config: RecommenderConfig,
}

impl RecommendationEngine {
    pub fn new(embedder: Arc<dyn IEmbeddingProvider>, config: RecommenderConfig) -> Self {
        let store = VectorStore::with_config(&config.index);
        let ranking = RankingPipeline::new(config.retrieval.min_results);
        info!(
            embedder = embedder.name(),
            dimension = config.index.dimension,
            retrieve_k = config.retrieval.retrieve_k,
            top_k = config.retrieval.top_k,
            "recommendation engine initialized"
        );
        Self {
            embedder,
            reranker: None,
            store,
            ranking,
            config,
        }
    }

    /// Inject the optional reranking collaborator at construction time.
    pub fn with_reranker(mut self, reranker: Arc<dyn IReranker>) -> Self {
        info!(reranker = reranker.name(), "reranker enabled");
        self.reranker = Some(reranker);
        self
    }

    /// Embed the catalog and rebuild the index atomically.
    ///
    /// An embedding failure aborts the rebuild; the previous index contents
    /// stay live.
    pub fn index_catalog(&self, catalog: Catalog) -> ShortlistResult<()> {
        let texts: Vec<String> = catalog.iter().map(|a| a.embedding_text()).collect();
        let embeddings = self.embedder.embed_batch(&texts)?;
        self.store.build(catalog.into_entries(), embeddings)?;
        info!(indexed = self.store.len(), "catalog indexed");
        Ok(())
    }

    /// Number of indexed assessments.
    pub fn indexed_len(&self) -> usize {
        self.store.len()
    }

    /// Recommend with the configured `top_k`, wrapped as a full answer.
    pub fn recommend(&self, query: &str) -> ShortlistResult<RecommendationSet> {
        let recommendations = self.recommend_top_k(query, self.config.retrieval.top_k)?;
        Ok(RecommendationSet::new(query, recommendations))
    }

    /// Recommend up to `top_k` assessments for a free-text hiring query.
    ///
    /// Empty query text is a caller error. A legitimate query that matches
    /// nothing returns an empty list.
    pub fn recommend_top_k(
        &self,
        query: &str,
        top_k: usize,
    ) -> ShortlistResult<Vec<Recommendation>> {
        if query.trim().is_empty() {
            return Err(ShortlistError::EmptyQuery);
        }

        let analysis = QueryAnalyzer::analyze(query);

        let query_vector = self.embedder.embed(query)?;

        let candidates = self
            .store
            .search(&query_vector, self.config.retrieval.retrieve_k)?;
        debug!(candidates = candidates.len(), "retrieved candidates");
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let candidates = self.apply_reranker(query, candidates);

        let ranked = self.ranking.rank_and_balance(&candidates, &analysis, top_k);
        info!(
            results = ranked.len(),
            top_k,
            needs_balance = analysis.needs_balance,
            "recommendation complete"
        );

        Ok(ranked.iter().map(Recommendation::from).collect())
    }

    /// Run the optional reranker, keeping the original candidates on any
    /// failure or empty answer.
    fn apply_reranker(&self, query: &str, candidates: Vec<Candidate>) -> Vec<Candidate> {
        let Some(reranker) = &self.reranker else {
            return candidates;
        };
        match reranker.rerank(query, &candidates, self.config.retrieval.rerank_top_k) {
            Ok(reranked) if !reranked.is_empty() => {
                debug!(
                    reranker = reranker.name(),
                    reranked = reranked.len(),
                    "reranker applied"
                );
                reranked
            }
            Ok(_) => {
                warn!(
                    reranker = reranker.name(),
                    "reranker returned nothing, keeping original ranking"
                );
                candidates
            }
            Err(error) => {
                warn!(
                    reranker = reranker.name(),
                    %error,
                    "reranker failed, keeping original ranking"
                );
                candidates
            }
        }
    }
}
