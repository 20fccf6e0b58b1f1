use std::sync::Arc;

use axum_test::TestServer;
use mockall::mock;

use moodpick_api::api::{create_router, AppState};
use moodpick_api::error::{AppError, AppResult};
use moodpick_api::models::{CatalogItem, MediaKind, QueryFilters};
use moodpick_api::services::providers::CatalogProvider;

mock! {
    pub Catalog {}

    #[async_trait::async_trait]
    impl CatalogProvider for Catalog {
        async fn discover(
            &self,
            kind: MediaKind,
            filters: &QueryFilters,
            page: u32,
        ) -> AppResult<Vec<CatalogItem>>;

        fn name(&self) -> &'static str;
    }
}

fn catalog_item(id: u64, title: &str) -> CatalogItem {
    CatalogItem {
        id,
        title: Some(title.to_string()),
        name: None,
        release_date: Some("2019-05-30".to_string()),
        first_air_date: None,
        vote_average: Some(7.2),
        overview: Some("An overview.".to_string()),
        poster_path: Some(format!("/poster-{}.jpg", id)),
    }
}

fn create_test_server(provider: MockCatalog) -> TestServer {
    let state = AppState::new(
        Arc::new(provider),
        "https://image.tmdb.org/t/p".to_string(),
        3,
    );
    TestServer::new(create_router(state)).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(MockCatalog::new());
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_list_moods() {
    let server = create_test_server(MockCatalog::new());

    let response = server.get("/api/v1/moods").await;
    response.assert_status_ok();

    let moods: Vec<String> = response.json();
    assert_eq!(moods.len(), 10);
    assert!(moods.contains(&"Spooky".to_string()));
    assert!(moods.contains(&"Short & Sweet (≤100 min)".to_string()));
}

#[tokio::test]
async fn test_list_industries() {
    let server = create_test_server(MockCatalog::new());

    let response = server.get("/api/v1/industries").await;
    response.assert_status_ok();

    let industries: Vec<String> = response.json();
    assert_eq!(industries.len(), 7);
    assert!(industries.contains(&"Nollywood".to_string()));
}

#[tokio::test]
async fn test_pick_happy_path() {
    let mut provider = MockCatalog::new();
    provider.expect_discover().returning(|_, _, _| {
        Ok(vec![
            catalog_item(1, "First"),
            catalog_item(2, "Second"),
            catalog_item(3, "Third"),
            catalog_item(4, "Fourth"),
            catalog_item(5, "Fifth"),
        ])
    });

    let server = create_test_server(provider);
    let response = server
        .get("/api/v1/pick")
        .add_query_param("kind", "movie")
        .add_query_param("mood", "Spooky")
        .add_query_param("industry", "Any")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    let primary_id = body["primary"]["id"].as_u64().unwrap();
    assert!((1..=5).contains(&primary_id));
    assert_eq!(body["primary"]["year"], "2019");
    assert_eq!(
        body["primary"]["poster_url"].as_str().unwrap(),
        format!("https://image.tmdb.org/t/p/w500/poster-{}.jpg", primary_id)
    );

    let alternates = body["alternates"].as_array().unwrap();
    assert_eq!(alternates.len(), 3);
    assert!(alternates
        .iter()
        .all(|a| a["id"].as_u64().unwrap() != primary_id));
}

#[tokio::test]
async fn test_pick_forwards_resolved_filters() {
    let mut provider = MockCatalog::new();
    provider
        .expect_discover()
        .withf(|kind, filters, page| {
            *kind == MediaKind::Movie
                && filters.get("with_genres") == Some("27,53")
                && filters.get("with_origin_country").is_none()
                && (1..=5).contains(page)
        })
        .returning(|_, _, _| Ok(vec![catalog_item(9, "Scary")]));

    let server = create_test_server(provider);
    let response = server
        .get("/api/v1/pick")
        .add_query_param("kind", "movie")
        .add_query_param("mood", "Spooky")
        .add_query_param("industry", "Any")
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_pick_empty_results_is_soft_404() {
    let mut provider = MockCatalog::new();
    provider.expect_discover().returning(|_, _, _| Ok(vec![]));

    let server = create_test_server(provider);
    let response = server
        .get("/api/v1/pick")
        .add_query_param("kind", "series")
        .add_query_param("mood", "Rom-Com")
        .add_query_param("industry", "Nollywood")
        .await;

    response.assert_status(axum::http::StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("different mood"));
}

#[tokio::test]
async fn test_pick_catalog_failure_is_502() {
    let mut provider = MockCatalog::new();
    provider
        .expect_discover()
        .returning(|_, _, _| Err(AppError::Catalog("TMDB discover returned status 503".into())));

    let server = create_test_server(provider);
    let response = server
        .get("/api/v1/pick")
        .add_query_param("kind", "movie")
        .add_query_param("mood", "Anything")
        .add_query_param("industry", "Any")
        .await;

    response.assert_status(axum::http::StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_pick_rejects_unknown_mood_label() {
    let server = create_test_server(MockCatalog::new());
    let response = server
        .get("/api/v1/pick")
        .add_query_param("kind", "movie")
        .add_query_param("mood", "Melancholy")
        .add_query_param("industry", "Any")
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_pick_single_result_has_no_alternates() {
    let mut provider = MockCatalog::new();
    provider
        .expect_discover()
        .returning(|_, _, _| Ok(vec![catalog_item(42, "Only One")]));

    let server = create_test_server(provider);
    let response = server
        .get("/api/v1/pick")
        .add_query_param("kind", "movie")
        .add_query_param("mood", "Cozy")
        .add_query_param("industry", "French")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["primary"]["id"], 42);
    assert_eq!(body["primary"]["title"], "Only One");
    assert!(body["alternates"].as_array().unwrap().is_empty());
}
