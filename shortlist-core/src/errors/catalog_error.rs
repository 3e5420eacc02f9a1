/// Catalog validation errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("assessment has empty url")]
    EmptyUrl,

    #[error("assessment '{url}' has empty name")]
    EmptyName { url: String },

    #[error("duplicate assessment url '{url}'")]
    DuplicateUrl { url: String },
}
