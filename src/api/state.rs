use std::sync::Arc;

use crate::services::providers::CatalogProvider;

/// Shared application state
///
/// Per-request entities are all ephemeral; the only shared pieces are the
/// provider handle and a couple of render-time settings.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn CatalogProvider>,
    pub image_base: String,
    pub alternate_count: usize,
}

impl AppState {
    pub fn new(
        provider: Arc<dyn CatalogProvider>,
        image_base: String,
        alternate_count: usize,
    ) -> Self {
        Self {
            provider,
            image_base,
            alternate_count,
        }
    }
}
