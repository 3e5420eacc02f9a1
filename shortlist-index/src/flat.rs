//! Flat linear-scan index over embedded assessments.

use std::sync::Arc;

use shortlist_core::models::{Assessment, Candidate};

/// One snapshot of embedded catalog entries. Owned exclusively by the store;
/// replaced wholesale on rebuild, never patched.
#[derive(Debug, Default)]
pub(crate) struct FlatIndex {
    entries: Vec<(Arc<Assessment>, Vec<f32>)>,
}

impl FlatIndex {
    pub(crate) fn new(entries: Vec<(Arc<Assessment>, Vec<f32>)>) -> Self {
        Self { entries }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Scan all entries and return up to `k` candidates by descending score.
    ///
    /// Score is `exp(-d)` over squared L2 distance `d`: in (0, 1], strictly
    /// decreasing in distance, 1.0 for an exact match. The sort is stable, so
    /// distance ties keep insertion order.
    pub(crate) fn search(&self, query: &[f32], k: usize) -> Vec<Candidate> {
        let mut hits: Vec<Candidate> = self
            .entries
            .iter()
            .map(|(assessment, vector)| {
                let d = squared_distance(query, vector);
                Candidate::new(Arc::clone(assessment), (-d).exp())
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits.truncate(k);
        hits
    }
}

fn squared_distance(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let diff = (*x - *y) as f64;
            diff * diff
        })
        .sum()
}
