use rand::seq::IndexedRandom;
use rand::Rng;

use crate::error::AppResult;
use crate::models::{CatalogItem, Industry, MediaKind, Mood, PickResult};
use crate::services::filters::resolve_filters;
use crate::services::providers::CatalogProvider;

/// Highest discover page the picker will roll
///
/// Popularity-sorted results thin out quickly; five pages keeps picks
/// recognizable while still varying between requests.
pub const MAX_DISCOVER_PAGE: u32 = 5;

/// Rolls the discover page, uniform in `[1, MAX_DISCOVER_PAGE]`
pub fn random_page() -> u32 {
    rand::rng().random_range(1..=MAX_DISCOVER_PAGE)
}

/// Uniform primary pick; `None` when the catalog returned nothing
pub fn pick_primary(items: &[CatalogItem]) -> Option<&CatalogItem> {
    items.choose(&mut rand::rng())
}

/// Uniform sample of alternates, excluding the primary, without replacement
///
/// Returns `min(max_count, remaining)` items; empty when nothing remains
/// after excluding the primary.
pub fn pick_alternates(items: &[CatalogItem], primary_id: u64, max_count: usize) -> Vec<CatalogItem> {
    let remaining: Vec<&CatalogItem> = items.iter().filter(|i| i.id != primary_id).collect();
    remaining
        .choose_multiple(&mut rand::rng(), max_count.min(remaining.len()))
        .map(|item| (*item).clone())
        .collect()
}

/// Runs the full flow: resolve filters, roll a page, discover, select
///
/// `Ok(None)` means the query succeeded but matched nothing; the caller
/// surfaces that as a soft "try a different combination" outcome.
pub async fn pick_for_mood(
    provider: &dyn CatalogProvider,
    kind: MediaKind,
    mood: Mood,
    industry: Industry,
    max_alternates: usize,
) -> AppResult<Option<PickResult>> {
    let filters = resolve_filters(kind, mood, industry);
    let page = random_page();

    tracing::debug!(
        ?kind,
        ?mood,
        ?industry,
        page,
        directives = filters.len(),
        "Resolved discover filters"
    );

    let items = provider.discover(kind, &filters, page).await?;

    let Some(primary) = pick_primary(&items) else {
        tracing::info!(?kind, ?mood, ?industry, "Discover returned no titles");
        return Ok(None);
    };
    let primary = primary.clone();
    let alternates = pick_alternates(&items, primary.id, max_alternates);

    Ok(Some(PickResult { primary, alternates }))
}
