use crate::catalog::Catalog;
use crate::errors::ShortlistResult;

/// Supplies the immutable catalog used to build the index.
///
/// Implementations own ingestion (scraping, files, databases, all outside
/// this core) and must hand over entries that pass [`Catalog`] validation:
/// unique urls, non-empty names.
pub trait ICatalogSource: Send + Sync {
    fn load(&self) -> ShortlistResult<Catalog>;
}
