use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::models::{poster_url, CatalogItem, Industry, MediaKind, Mood, PickResult};
use crate::services::picker;

use super::AppState;

/// Poster size token used for rendered URLs
const POSTER_SIZE: &str = "w500";

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct PickQuery {
    pub kind: MediaKind,
    pub mood: Mood,
    pub industry: Industry,
}

/// One display-ready title entry
#[derive(Debug, Serialize)]
pub struct TitleEntry {
    pub id: u64,
    pub title: String,
    pub year: String,
    pub rating: Option<f32>,
    pub overview: String,
    pub poster_url: Option<String>,
}

impl TitleEntry {
    fn from_item(item: &CatalogItem, kind: MediaKind, image_base: &str) -> Self {
        let card = item.describe(kind);
        Self {
            id: item.id,
            title: card.title,
            year: card.year,
            rating: card.rating,
            overview: card.overview,
            poster_url: poster_url(image_base, POSTER_SIZE, item.poster_path.as_deref()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PickResponse {
    pub primary: TitleEntry,
    pub alternates: Vec<TitleEntry>,
}

impl PickResponse {
    fn from_result(result: &PickResult, kind: MediaKind, image_base: &str) -> Self {
        Self {
            primary: TitleEntry::from_item(&result.primary, kind, image_base),
            alternates: result
                .alternates
                .iter()
                .map(|item| TitleEntry::from_item(item, kind, image_base))
                .collect(),
        }
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// List the mood labels (UI dropdown source)
pub async fn get_moods() -> Json<Vec<Mood>> {
    Json(Mood::ALL.to_vec())
}

/// List the industry labels
pub async fn get_industries() -> Json<Vec<Industry>> {
    Json(Industry::ALL.to_vec())
}

/// Run the full picker flow for one (kind, mood, industry) selection
///
/// 404 means the query succeeded but matched nothing; the client surfaces
/// that as a "try a different combination" message and may retry at will.
pub async fn pick(
    State(state): State<AppState>,
    Query(params): Query<PickQuery>,
) -> AppResult<Json<PickResponse>> {
    let outcome = picker::pick_for_mood(
        state.provider.as_ref(),
        params.kind,
        params.mood,
        params.industry,
        state.alternate_count,
    )
    .await?;

    match outcome {
        Some(result) => Ok(Json(PickResponse::from_result(
            &result,
            params.kind,
            &state.image_base,
        ))),
        None => Err(AppError::NotFound(
            "No titles matched that combination. Try a different mood or industry.".to_string(),
        )),
    }
}
