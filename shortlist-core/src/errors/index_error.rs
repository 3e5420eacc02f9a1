/// Similarity index errors.
///
/// Vector length disagreements are rejected at the boundary, never silently
/// truncated or padded. An empty index is not an error: `search` on an empty
/// index returns zero candidates.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("dimension mismatch: index expects {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("build mismatch: {items} assessments but {vectors} vectors")]
    LengthMismatch { items: usize, vectors: usize },

    /// A writer panicked while holding the index lock.
    #[error("index lock poisoned")]
    Poisoned,
}
