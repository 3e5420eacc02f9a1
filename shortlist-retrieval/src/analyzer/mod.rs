//! Query-intent analysis: skill extraction and category weight derivation.

pub mod vocab;

use tracing::debug;

use shortlist_core::constants::CATEGORY_WEIGHT_FLOOR;
use shortlist_core::models::{CategoryWeights, QueryAnalysis};

/// Pure analyzer over free-text hiring queries. No I/O, no state.
pub struct QueryAnalyzer;

impl QueryAnalyzer {
    /// Analyze one query.
    ///
    /// Lowercases the text and matches both vocabularies by substring
    /// containment. Empty text yields the zero-signal defaults (an even
    /// Knowledge/Behavioral split, no balancing).
    pub fn analyze(text: &str) -> QueryAnalysis {
        let lowered = text.to_lowercase();

        let technical_skills = match_vocabulary(&lowered, vocab::TECHNICAL_SKILLS);
        let behavioral_skills = match_vocabulary(&lowered, vocab::BEHAVIORAL_SKILLS);

        let weights = derive_weights(technical_skills.len(), behavioral_skills.len());
        let needs_balance = !technical_skills.is_empty() && !behavioral_skills.is_empty();

        let analysis = QueryAnalysis {
            technical_skills,
            behavioral_skills,
            weights,
            needs_balance,
        };
        debug!(
            technical = analysis.technical_skills.len(),
            behavioral = analysis.behavioral_skills.len(),
            needs_balance,
            "query analyzed"
        );
        analysis
    }
}

/// Distinct vocabulary phrases contained in the query, ordered by their first
/// occurrence in the query text.
fn match_vocabulary(lowered_query: &str, vocabulary: &[&str]) -> Vec<String> {
    let mut matched: Vec<(usize, &str)> = vocabulary
        .iter()
        .filter_map(|phrase| lowered_query.find(phrase).map(|pos| (pos, *phrase)))
        .collect();
    matched.sort_by_key(|(pos, _)| *pos);
    matched
        .into_iter()
        .map(|(_, phrase)| phrase.to_string())
        .collect()
}

/// Derive category target shares from match counts.
///
/// Zero signal on both sides gives an even split. Otherwise shares are
/// proportional to counts, with a floor: a category that matched at all is
/// clamped up to 30% (and the other side down to 70%). A category with zero
/// matches keeps a zero share: no signal means no target. The clamp can fire
/// at most once since the raw shares sum to 1.
fn derive_weights(technical: usize, behavioral: usize) -> CategoryWeights {
    let total = technical + behavioral;
    if total == 0 {
        return CategoryWeights::balanced();
    }

    let mut knowledge = technical as f64 / total as f64;
    let mut behavioral_w = behavioral as f64 / total as f64;

    if knowledge > 0.0 && knowledge < CATEGORY_WEIGHT_FLOOR {
        knowledge = CATEGORY_WEIGHT_FLOOR;
        behavioral_w = 1.0 - CATEGORY_WEIGHT_FLOOR;
    } else if behavioral_w > 0.0 && behavioral_w < CATEGORY_WEIGHT_FLOOR {
        behavioral_w = CATEGORY_WEIGHT_FLOOR;
        knowledge = 1.0 - CATEGORY_WEIGHT_FLOOR;
    }

    CategoryWeights {
        knowledge,
        behavioral: behavioral_w,
    }
}
