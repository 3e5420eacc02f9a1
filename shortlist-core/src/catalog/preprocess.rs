//! Catalog text normalization and enrichment.
//!
//! Runs at ingestion time, before entries are handed to [`super::Catalog`]:
//! whitespace/punctuation cleanup, keyword extraction, and a keyword-count
//! heuristic for entries the source left unclassified.

use std::sync::OnceLock;

use regex::Regex;

use crate::constants::MAX_KEYWORDS;
use crate::models::{Assessment, Category};

/// Indicators of knowledge/ability tests.
const KNOWLEDGE_KEYWORDS: &[&str] = &[
    "programming",
    "language",
    "skill",
    "knowledge",
    "test",
    "reasoning",
    "logical",
    "numerical",
    "verbal",
    "literacy",
    "java",
    "python",
    "sql",
    "javascript",
    "c++",
    "coding",
];

/// Indicators of personality/behavioral tests.
const PERSONALITY_KEYWORDS: &[&str] = &[
    "personality",
    "behavior",
    "behavioral",
    "people",
    "leadership",
    "culture",
    "fit",
    "trait",
    "emotional",
    "intelligence",
    "iq",
    "teamwork",
    "collaboration",
    "communication",
];

/// Short function words excluded from keyword extraction.
const STOPWORDS: &[&str] = &[
    "the", "and", "for", "that", "this", "from", "with", "you", "are", "can", "has", "your", "not",
];

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static regex"))
}

fn strip_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\s\-\.,]").expect("static regex"))
}

fn split_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s\-,\.]+").expect("static regex"))
}

/// Collapse whitespace and strip special characters, keeping basic punctuation.
pub fn clean_text(text: &str) -> String {
    let collapsed = whitespace_re().replace_all(text.trim(), " ");
    strip_re().replace_all(&collapsed, "").into_owned()
}

/// Extract normalized lowercase keywords, order-preserving, capped at 20.
///
/// Tokens of three characters or fewer and common function words are dropped;
/// later duplicates are removed.
pub fn extract_keywords(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    let mut keywords = Vec::new();
    for token in split_re().split(&lowered) {
        if token.len() <= 3 || STOPWORDS.contains(&token) {
            continue;
        }
        if !keywords.iter().any(|k| k == token) {
            keywords.push(token.to_string());
        }
        if keywords.len() == MAX_KEYWORDS {
            break;
        }
    }
    keywords
}

/// Infer a category from name and description when the source left one out.
///
/// Counts vocabulary hits for each side; the larger count wins. On a tie,
/// reasoning/cognitive wording classifies as Cognitive, otherwise Unknown.
pub fn infer_category(name: &str, description: &str) -> Category {
    let combined = format!("{} {}", name, description).to_lowercase();

    let personality = PERSONALITY_KEYWORDS
        .iter()
        .filter(|kw| combined.contains(*kw))
        .count();
    let knowledge = KNOWLEDGE_KEYWORDS
        .iter()
        .filter(|kw| combined.contains(*kw))
        .count();

    if personality > knowledge {
        Category::Behavioral
    } else if knowledge > personality {
        Category::Knowledge
    } else if combined.contains("reasoning") || combined.contains("cognitive") {
        Category::Cognitive
    } else {
        Category::Unknown
    }
}

/// Normalize one assessment in place: clean text fields, classify if
/// unclassified, and extract keywords if the source supplied none.
pub fn prepare(mut assessment: Assessment) -> Assessment {
    assessment.name = clean_text(&assessment.name);
    assessment.description = assessment
        .description
        .map(|d| clean_text(&d))
        .filter(|d| !d.is_empty());

    if assessment.category == Category::Unknown {
        assessment.category = infer_category(
            &assessment.name,
            assessment.description.as_deref().unwrap_or(""),
        );
    }

    if assessment.keywords.is_empty() {
        let text = format!(
            "{} {}",
            assessment.name,
            assessment.description.as_deref().unwrap_or("")
        );
        assessment.keywords = extract_keywords(&text);
    } else {
        for kw in &mut assessment.keywords {
            *kw = kw.to_lowercase();
        }
        assessment.keywords.truncate(MAX_KEYWORDS);
    }

    assessment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_collapses_whitespace_and_strips_specials() {
        assert_eq!(
            clean_text("  Verify  G+ \tability   test!  "),
            "Verify G ability test"
        );
    }

    #[test]
    fn extract_keywords_filters_and_dedupes() {
        let kws = extract_keywords("The Java test for Java developers, with coding.");
        assert_eq!(kws, vec!["java", "test", "developers", "coding"]);
    }

    #[test]
    fn extract_keywords_caps_at_twenty() {
        let text = (0..40)
            .map(|i| format!("keyword{:02}", i))
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(extract_keywords(&text).len(), MAX_KEYWORDS);
    }

    #[test]
    fn infer_category_prefers_majority_vocabulary() {
        assert_eq!(
            infer_category("Java Programming Test", "Core coding knowledge"),
            Category::Knowledge
        );
        assert_eq!(
            infer_category("Workplace Personality", "Teamwork and leadership traits"),
            Category::Behavioral
        );
        assert_eq!(
            infer_category("Cognitive Exercise", "Abstract puzzles"),
            Category::Cognitive
        );
        assert_eq!(infer_category("Untitled", ""), Category::Unknown);
    }

    #[test]
    fn prepare_fills_category_and_keywords() {
        let prepared = prepare(Assessment {
            url: "https://example.com/java".to_string(),
            name: "Java  Programming   Test".to_string(),
            description: Some("Assess core Java coding skills.".to_string()),
            category: Category::Unknown,
            duration: None,
            remote_support: None,
            adaptive_support: None,
            keywords: vec![],
        });
        assert_eq!(prepared.name, "Java Programming Test");
        assert_eq!(prepared.category, Category::Knowledge);
        assert!(prepared.keywords.contains(&"java".to_string()));
        assert!(prepared.keywords.len() <= MAX_KEYWORDS);
    }
}
