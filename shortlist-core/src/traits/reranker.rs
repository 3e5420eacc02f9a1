use crate::errors::ShortlistResult;
use crate::models::Candidate;

/// Optional reranking collaborator (e.g. a hosted LLM).
///
/// Given a query and ranked candidates, may return a reordered or rescored
/// subset of up to `top_k` entries. The engine's correctness never depends on
/// this collaborator: when absent or failing, the engine keeps its own
/// ranking. Implementations apply their own timeout policy; the core has no
/// blocking calls of its own.
pub trait IReranker: Send + Sync {
    fn rerank(
        &self,
        query: &str,
        candidates: &[Candidate],
        top_k: usize,
    ) -> ShortlistResult<Vec<Candidate>>;

    /// Human-readable name, for logging.
    fn name(&self) -> &str;
}
