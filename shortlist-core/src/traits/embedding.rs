use crate::errors::ShortlistResult;

/// Embedding generation provider.
///
/// Must be deterministic enough that repeated calls with the same text give
/// stable rankings. Failures must surface as errors, never as a silent zero
/// vector: a zero vector is indistinguishable from a legitimately
/// maximally-dissimilar result and corrupts ranking.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of `dimensions()` floats.
    fn embed(&self, text: &str) -> ShortlistResult<Vec<f32>>;

    /// Embed a batch of texts, one vector per input, input order.
    fn embed_batch(&self, texts: &[String]) -> ShortlistResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name, for logging.
    fn name(&self) -> &str;
}
