use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;

/// Coarse classification of a catalog entry.
///
/// `Knowledge` covers technical/ability tests (the catalog's "K" code),
/// `Behavioral` covers personality/soft-skill tests ("P"). Entries the
/// ingestion step could not classify stay `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Knowledge,
    Behavioral,
    Cognitive,
    #[default]
    Unknown,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Knowledge => "knowledge",
            Category::Behavioral => "behavioral",
            Category::Cognitive => "cognitive",
            Category::Unknown => "unknown",
        }
    }
}

/// A catalog entry. Immutable once loaded; the catalog is rebuilt wholesale,
/// never patched in place.
///
/// The canonical catalog url doubles as the stable identifier and dedup key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    /// Canonical catalog url. Non-empty and unique across the catalog.
    pub url: String,
    /// Display name. Non-empty.
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub remote_support: Option<bool>,
    #[serde(default)]
    pub adaptive_support: Option<bool>,
    /// Normalized lowercase tokens extracted at ingestion, capped at 20.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Assessment {
    /// Reject entries that must never enter the index.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.url.trim().is_empty() {
            return Err(CatalogError::EmptyUrl);
        }
        if self.name.trim().is_empty() {
            return Err(CatalogError::EmptyName {
                url: self.url.clone(),
            });
        }
        Ok(())
    }

    /// The text handed to the embedding collaborator: name plus description.
    pub fn embedding_text(&self) -> String {
        match &self.description {
            Some(desc) if !desc.is_empty() => format!("{}. {}", self.name, desc),
            _ => format!("{}.", self.name),
        }
    }
}

/// Identity comparison only (entity pattern): two assessments are the same
/// entry iff they share a url. Use field comparison explicitly where content
/// equality matters.
impl PartialEq for Assessment {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Eq for Assessment {}
