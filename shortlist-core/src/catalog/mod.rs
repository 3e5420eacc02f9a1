//! The validated, immutable assessment catalog.

pub mod preprocess;

use std::collections::HashSet;

use crate::errors::{CatalogError, ShortlistResult};
use crate::models::Assessment;

/// Immutable-per-build set of catalog entries.
///
/// The single source of truth for assessment identity. Construction validates
/// every entry (non-empty url and name, unique urls); nothing invalid reaches
/// the index. Loaded once per process or full reload, never partially mutated.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<Assessment>,
}

impl Catalog {
    pub fn new(entries: Vec<Assessment>) -> ShortlistResult<Self> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(entries.len());
        for entry in &entries {
            entry.validate()?;
            if !seen.insert(entry.url.as_str()) {
                return Err(CatalogError::DuplicateUrl {
                    url: entry.url.clone(),
                }
                .into());
            }
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Assessment> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[Assessment] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Assessment> {
        self.entries
    }
}
