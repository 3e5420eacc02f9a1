//! Offline evaluation metrics over predicted vs. relevant url lists.

use std::collections::{HashMap, HashSet};

use tracing::warn;

/// Recall@K: fraction of relevant urls present in the top-K predictions.
///
/// Returns 0.0 when there are no relevant urls.
pub fn recall_at_k(predicted: &[String], relevant: &[String], k: usize) -> f64 {
    if relevant.is_empty() {
        return 0.0;
    }
    let top_k: HashSet<&str> = predicted.iter().take(k).map(String::as_str).collect();
    let relevant_set: HashSet<&str> = relevant.iter().map(String::as_str).collect();
    let matches = top_k.intersection(&relevant_set).count();
    matches as f64 / relevant_set.len() as f64
}

/// Precision@K: fraction of the top-K predictions that are relevant.
pub fn precision_at_k(predicted: &[String], relevant: &[String], k: usize) -> f64 {
    if k == 0 {
        return 0.0;
    }
    let top_k: HashSet<&str> = predicted.iter().take(k).map(String::as_str).collect();
    let relevant_set: HashSet<&str> = relevant.iter().map(String::as_str).collect();
    top_k.intersection(&relevant_set).count() as f64 / k as f64
}

/// Mean Recall@K across queries, plus the per-query breakdown.
///
/// Queries missing from `predictions` score 0.0 (with a warning) rather than
/// being skipped, so sparse prediction sets are penalized.
pub fn mean_recall_at_k(
    predictions: &HashMap<String, Vec<String>>,
    ground_truth: &HashMap<String, Vec<String>>,
    k: usize,
) -> (f64, HashMap<String, f64>) {
    let mut per_query: HashMap<String, f64> = HashMap::new();

    for (query, relevant) in ground_truth {
        let recall = match predictions.get(query) {
            Some(predicted) => recall_at_k(predicted, relevant, k),
            None => {
                warn!(query = %query, "no predictions for query");
                0.0
            }
        };
        per_query.insert(query.clone(), recall);
    }

    let mean = if per_query.is_empty() {
        0.0
    } else {
        per_query.values().sum::<f64>() / per_query.len() as f64
    };
    (mean, per_query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn recall_counts_matches_within_top_k() {
        let predicted = urls(&["a", "b", "c", "d"]);
        let relevant = urls(&["b", "d", "x"]);
        // Top-3 contains b only; d sits at rank 4.
        assert!((recall_at_k(&predicted, &relevant, 3) - 1.0 / 3.0).abs() < 1e-12);
        assert!((recall_at_k(&predicted, &relevant, 4) - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn recall_with_no_relevant_urls_is_zero() {
        assert_eq!(recall_at_k(&urls(&["a"]), &[], 10), 0.0);
    }

    #[test]
    fn precision_divides_by_k() {
        let predicted = urls(&["a", "b", "c", "d"]);
        let relevant = urls(&["a", "c"]);
        assert!((precision_at_k(&predicted, &relevant, 4) - 0.5).abs() < 1e-12);
        assert_eq!(precision_at_k(&predicted, &relevant, 0), 0.0);
    }

    #[test]
    fn mean_recall_penalizes_missing_queries() {
        let mut predictions = HashMap::new();
        predictions.insert("q1".to_string(), urls(&["a", "b"]));
        let mut ground_truth = HashMap::new();
        ground_truth.insert("q1".to_string(), urls(&["a"]));
        ground_truth.insert("q2".to_string(), urls(&["z"]));

        let (mean, per_query) = mean_recall_at_k(&predictions, &ground_truth, 10);
        assert!((per_query["q1"] - 1.0).abs() < 1e-12);
        assert_eq!(per_query["q2"], 0.0);
        assert!((mean - 0.5).abs() < 1e-12);
    }
}
