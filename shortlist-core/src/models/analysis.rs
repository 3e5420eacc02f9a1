use serde::{Deserialize, Serialize};

use super::Category;

/// Per-category target shares for one query, in [0, 1].
///
/// A fixed-shape struct rather than an open map so iteration order is
/// deterministic: Knowledge first, then Behavioral. Cognitive and Unknown
/// never receive an explicit target share; they compete for fill slots only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeights {
    pub knowledge: f64,
    pub behavioral: f64,
}

impl CategoryWeights {
    /// Zero-signal default: an even split.
    pub fn balanced() -> Self {
        Self {
            knowledge: 0.5,
            behavioral: 0.5,
        }
    }

    /// Target share for a category. Untargeted categories get 0.
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Knowledge => self.knowledge,
            Category::Behavioral => self.behavioral,
            Category::Cognitive | Category::Unknown => 0.0,
        }
    }

    /// Targeted categories in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> {
        [
            (Category::Knowledge, self.knowledge),
            (Category::Behavioral, self.behavioral),
        ]
        .into_iter()
    }

    /// The category with the largest share. Ties resolve to Knowledge, the
    /// first category in iteration order.
    pub fn largest(&self) -> Category {
        if self.behavioral > self.knowledge {
            Category::Behavioral
        } else {
            Category::Knowledge
        }
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self::balanced()
    }
}

/// Result of analyzing one query. Ephemeral: recomputed per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryAnalysis {
    /// Technical vocabulary matches, deduplicated, vocabulary order.
    pub technical_skills: Vec<String>,
    /// Behavioral vocabulary matches, deduplicated, vocabulary order.
    pub behavioral_skills: Vec<String>,
    pub weights: CategoryWeights,
    /// True iff at least one technical and one behavioral skill matched.
    pub needs_balance: bool,
}

impl QueryAnalysis {
    /// All matched skills, technical first.
    pub fn matched_skills(&self) -> impl Iterator<Item = &str> {
        self.technical_skills
            .iter()
            .chain(self.behavioral_skills.iter())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untargeted_categories_have_zero_share() {
        let w = CategoryWeights::balanced();
        assert_eq!(w.get(Category::Cognitive), 0.0);
        assert_eq!(w.get(Category::Unknown), 0.0);
    }

    #[test]
    fn largest_breaks_ties_toward_knowledge() {
        assert_eq!(CategoryWeights::balanced().largest(), Category::Knowledge);
        let w = CategoryWeights {
            knowledge: 0.3,
            behavioral: 0.7,
        };
        assert_eq!(w.largest(), Category::Behavioral);
    }

    #[test]
    fn iteration_order_is_knowledge_then_behavioral() {
        let order: Vec<Category> = CategoryWeights::balanced()
            .iter()
            .map(|(c, _)| c)
            .collect();
        assert_eq!(order, vec![Category::Knowledge, Category::Behavioral]);
    }
}
