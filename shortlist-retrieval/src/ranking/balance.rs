//! Category-aware quota balancing of scored candidates.

use std::collections::HashMap;

use tracing::debug;

use shortlist_core::models::{Candidate, Category, CategoryWeights};

/// Reconcile scores with per-category target shares into at most `k` results.
///
/// 1. Partition by category; sort each partition by score descending.
/// 2. Quota per targeted category = `floor(k * weight)`. Any gap between the
///    quota sum and `k` goes to the largest-weight category (deterministic
///    tie-break via [`CategoryWeights::largest`]).
/// 3. Take `min(quota, available)` from each targeted partition.
/// 4. If still short of `k`, fill from untargeted/zero-target categories by
///    score descending, then from the leftovers of targeted categories whose
///    quota was already met.
/// 5. Re-sort the combined selection by score descending and truncate to `k`.
pub fn balance(candidates: Vec<Candidate>, weights: &CategoryWeights, k: usize) -> Vec<Candidate> {
    let mut by_category: HashMap<Category, Vec<Candidate>> = HashMap::new();
    for candidate in candidates {
        by_category
            .entry(candidate.assessment.category)
            .or_default()
            .push(candidate);
    }
    for partition in by_category.values_mut() {
        sort_by_score(partition);
    }

    let mut quotas: Vec<(Category, usize)> = weights
        .iter()
        .map(|(category, weight)| (category, (k as f64 * weight).floor() as usize))
        .collect();
    let quota_sum: usize = quotas.iter().map(|(_, n)| n).sum();
    if quota_sum < k {
        let largest = weights.largest();
        for (category, quota) in &mut quotas {
            if *category == largest {
                *quota += k - quota_sum;
                break;
            }
        }
    }

    let mut selected: Vec<Candidate> = Vec::with_capacity(k);
    for (category, quota) in &quotas {
        if let Some(partition) = by_category.get_mut(category) {
            let take = (*quota).min(partition.len());
            selected.extend(partition.drain(..take));
        }
    }

    if selected.len() < k {
        // Untargeted categories first (the original fill rule), then leftovers
        // from targeted categories so available candidates are not stranded
        // below k.
        let targeted: Vec<Category> = quotas
            .iter()
            .filter(|(_, quota)| *quota > 0)
            .map(|(category, _)| *category)
            .collect();

        let mut untargeted: Vec<Candidate> = Vec::new();
        let mut leftovers: Vec<Candidate> = Vec::new();
        for (category, partition) in by_category.drain() {
            if targeted.contains(&category) {
                leftovers.extend(partition);
            } else {
                untargeted.extend(partition);
            }
        }
        sort_by_score(&mut untargeted);
        sort_by_score(&mut leftovers);

        for candidate in untargeted.into_iter().chain(leftovers) {
            if selected.len() == k {
                break;
            }
            selected.push(candidate);
        }
    }

    sort_by_score(&mut selected);
    selected.truncate(k);
    debug!(selected = selected.len(), k, "balanced selection");
    selected
}

fn sort_by_score(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
