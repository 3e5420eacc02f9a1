//! Deterministic embedding providers for tests.

use shortlist_core::errors::{ShortlistError, ShortlistResult};
use shortlist_core::traits::IEmbeddingProvider;

/// Domain tokens, one axis each. Tokens outside this list contribute nothing.
const VOCAB: &[&str] = &[
    "java",
    "python",
    "sql",
    "javascript",
    "coding",
    "programming",
    "database",
    "cloud",
    "devops",
    "numerical",
    "verbal",
    "reasoning",
    "cognitive",
    "leadership",
    "communication",
    "teamwork",
    "collaboration",
    "personality",
    "sales",
    "management",
];

/// One-axis-per-token embedder.
///
/// Lowercases, splits on non-alphanumeric characters, sets axis `i` to 1.0
/// when `VOCAB[i]` is among the tokens (set semantics), then L2-normalizes.
/// Text without any vocabulary token embeds as the zero vector, which sits at
/// equal distance from every unit vector, useful for no-signal scenarios.
///
/// Identical token sets embed identically, so an exact-overlap item scores
/// `exp(0) = 1.0` against its query.
pub struct StubEmbedder;

impl StubEmbedder {
    pub const DIMENSION: usize = VOCAB.len();
}

impl IEmbeddingProvider for StubEmbedder {
    fn embed(&self, text: &str) -> ShortlistResult<Vec<f32>> {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .collect();

        let mut vector = vec![0.0_f32; VOCAB.len()];
        for (axis, word) in VOCAB.iter().enumerate() {
            if tokens.iter().any(|t| t == word) {
                vector[axis] = 1.0;
            }
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in &mut vector {
                *x /= norm;
            }
        }
        Ok(vector)
    }

    fn dimensions(&self) -> usize {
        Self::DIMENSION
    }

    fn name(&self) -> &str {
        "stub-vocab"
    }
}

/// Always fails. Exercises the embedding-failure path.
pub struct FailingEmbedder;

impl IEmbeddingProvider for FailingEmbedder {
    fn embed(&self, _text: &str) -> ShortlistResult<Vec<f32>> {
        Err(ShortlistError::Embedding {
            reason: "provider unavailable".to_string(),
        })
    }

    fn dimensions(&self) -> usize {
        StubEmbedder::DIMENSION
    }

    fn name(&self) -> &str {
        "failing"
    }
}
