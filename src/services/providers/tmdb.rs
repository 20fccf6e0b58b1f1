/// TMDB discover provider
///
/// Issues a single GET against `/discover/movie` or `/discover/tv` with the
/// resolved filter directives on top of fixed defaults (popularity-sorted,
/// adult content excluded, configured locale). The credential rides as a
/// query parameter and is never logged.
use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{CatalogItem, MediaKind, QueryFilters},
    services::providers::CatalogProvider,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(12);

pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_base: String,
    language: String,
}

impl TmdbProvider {
    /// Creates a provider with the fixed request timeout baked into the client
    pub fn new(api_key: String, api_base: String, language: String) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_base,
            language,
        })
    }

    fn discover_path(kind: MediaKind) -> &'static str {
        match kind {
            MediaKind::Movie => "discover/movie",
            MediaKind::Series => "discover/tv",
        }
    }
}

/// Discover endpoint response envelope
#[derive(Debug, Deserialize)]
struct DiscoverResponse {
    #[serde(default)]
    results: Vec<CatalogItem>,
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbProvider {
    async fn discover(
        &self,
        kind: MediaKind,
        filters: &QueryFilters,
        page: u32,
    ) -> AppResult<Vec<CatalogItem>> {
        let url = format!("{}/{}", self.api_base, Self::discover_path(kind));
        let page_str = page.to_string();

        let mut params: Vec<(&str, &str)> = vec![
            ("api_key", self.api_key.as_str()),
            ("language", self.language.as_str()),
            ("sort_by", "popularity.desc"),
            ("include_adult", "false"),
            ("page", page_str.as_str()),
        ];
        params.extend(filters.pairs());

        let response = self.http_client.get(&url).query(&params).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Catalog(format!(
                "TMDB discover returned status {}: {}",
                status, body
            )));
        }

        let discover: DiscoverResponse = response.json().await?;

        tracing::info!(
            ?kind,
            page,
            results = discover.results.len(),
            provider = "tmdb",
            "Discover completed"
        );

        Ok(discover.results)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
