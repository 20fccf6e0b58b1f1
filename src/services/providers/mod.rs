/// Catalog provider abstraction
///
/// One provider operation backs the whole picker: a single discover query
/// against the external catalog. Keeping it behind a trait lets tests swap
/// the network client for a canned catalog.
use crate::{
    error::AppResult,
    models::{CatalogItem, MediaKind, QueryFilters},
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Trait for media catalog providers
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Execute one discover query for the given kind, filters, and page
    ///
    /// Returns the raw result list in catalog order; selection happens in
    /// the picker, not here. A non-success upstream response is an error,
    /// an empty result list is not.
    async fn discover(
        &self,
        kind: MediaKind,
        filters: &QueryFilters,
        page: u32,
    ) -> AppResult<Vec<CatalogItem>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
