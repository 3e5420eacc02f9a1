//! Property tests for the ranking stages and the search path.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use shortlist_core::config::IndexConfig;
use shortlist_core::models::{Assessment, Candidate, Category, CategoryWeights, QueryAnalysis};
use shortlist_index::VectorStore;
use shortlist_retrieval::ranking::{balance, dedup, scorer, RankingPipeline};

fn assessment(id: usize, category: Category) -> Assessment {
    Assessment {
        url: format!("https://example.com/catalog/{id}"),
        name: format!("Assessment {id}"),
        description: None,
        category,
        duration: None,
        remote_support: None,
        adaptive_support: None,
        keywords: vec![],
    }
}

fn category_strategy() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Knowledge),
        Just(Category::Behavioral),
        Just(Category::Cognitive),
        Just(Category::Unknown),
    ]
}

fn candidate_strategy() -> impl Strategy<Value = Candidate> {
    (0usize..40, category_strategy(), 0.0f64..1.0).prop_map(|(id, category, score)| {
        Candidate::new(Arc::new(assessment(id, category)), score)
    })
}

fn candidates_strategy() -> impl Strategy<Value = Vec<Candidate>> {
    prop::collection::vec(candidate_strategy(), 0..60)
}

fn analysis_strategy() -> impl Strategy<Value = QueryAnalysis> {
    (0.3f64..=0.7, any::<bool>()).prop_map(|(knowledge, needs_balance)| QueryAnalysis {
        technical_skills: vec!["java".to_string()],
        behavioral_skills: vec!["teamwork".to_string()],
        weights: CategoryWeights {
            knowledge,
            behavioral: 1.0 - knowledge,
        },
        needs_balance,
    })
}

fn urls(candidates: &[Candidate]) -> Vec<String> {
    candidates
        .iter()
        .map(|c| c.assessment.url.clone())
        .collect()
}

fn is_sorted_desc(candidates: &[Candidate]) -> bool {
    candidates.windows(2).all(|pair| pair[0].score >= pair[1].score)
}

proptest! {
    #[test]
    fn dedup_output_has_unique_urls(candidates in candidates_strategy()) {
        let unique = dedup::deduplicate(candidates);
        let mut seen = HashSet::new();
        prop_assert!(unique.iter().all(|c| seen.insert(c.assessment.url.clone())));
    }

    #[test]
    fn dedup_is_idempotent(candidates in candidates_strategy()) {
        let once = dedup::deduplicate(candidates);
        let expected = urls(&once);
        let twice = dedup::deduplicate(once);
        prop_assert_eq!(urls(&twice), expected);
    }

    #[test]
    fn balance_is_bounded_and_sorted(
        candidates in candidates_strategy(),
        knowledge in 0.3f64..=0.7,
        k in 0usize..20,
    ) {
        let weights = CategoryWeights { knowledge, behavioral: 1.0 - knowledge };
        let input_urls: HashSet<String> = urls(&candidates).into_iter().collect();
        let balanced = balance::balance(candidates, &weights, k);

        prop_assert!(balanced.len() <= k);
        prop_assert!(is_sorted_desc(&balanced));
        prop_assert!(balanced.iter().all(|c| input_urls.contains(&c.assessment.url)));
    }

    #[test]
    fn balance_never_drops_below_supply(
        candidates in candidates_strategy(),
        knowledge in 0.3f64..=0.7,
        k in 1usize..20,
    ) {
        let weights = CategoryWeights { knowledge, behavioral: 1.0 - knowledge };
        let unique = dedup::deduplicate(candidates);
        let supply = unique.len();
        let balanced = balance::balance(unique, &weights, k);
        // Balancing redistributes; it must not shrink the answer while
        // candidates remain available.
        prop_assert_eq!(balanced.len(), k.min(supply));
    }

    #[test]
    fn scoring_only_boosts(candidate in candidate_strategy(), analysis in analysis_strategy()) {
        let scored = scorer::score(&candidate, &analysis);
        prop_assert!(scored.score >= candidate.score);
        // Category boost caps at 1.5x, keyword boost at 1.3x.
        prop_assert!(scored.score <= candidate.score * 1.5 * 1.3 + f64::EPSILON);
    }

    #[test]
    fn pipeline_output_is_bounded_sorted_and_unique(
        candidates in candidates_strategy(),
        analysis in analysis_strategy(),
        k in 0usize..20,
    ) {
        let ranked = RankingPipeline::new(1).rank_and_balance(&candidates, &analysis, k);

        prop_assert!(ranked.len() <= k);
        prop_assert!(is_sorted_desc(&ranked));
        let mut seen = HashSet::new();
        prop_assert!(ranked.iter().all(|c| seen.insert(c.assessment.url.clone())));
    }

    #[test]
    fn search_scores_are_normalized_and_ordered(
        vectors in prop::collection::vec(prop::collection::vec(-1.0f32..1.0, 4), 1..30),
        query in prop::collection::vec(-1.0f32..1.0, 4),
        k in 1usize..40,
    ) {
        let store = VectorStore::with_config(&IndexConfig { dimension: 4 });
        let entries: Vec<Assessment> = (0..vectors.len())
            .map(|id| assessment(id, Category::Unknown))
            .collect();
        let total = vectors.len();
        store.build(entries, vectors).unwrap();

        let results = store.search(&query, k).unwrap();
        prop_assert_eq!(results.len(), k.min(total));
        prop_assert!(is_sorted_desc(&results));
        prop_assert!(results.iter().all(|c| c.score > 0.0 && c.score <= 1.0));
    }
}
