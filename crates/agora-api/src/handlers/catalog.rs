//! Catalog handlers
//!
//! Read-only reference data.

use agora_service::dto::{to_responses, DegreeResponse, PageResponse, TagResponse};
use agora_service::CatalogService;
use axum::{extract::State, Json};

use crate::response::ApiResult;
use crate::state::AppState;

/// GET /tags
pub async fn list_tags(State(state): State<AppState>) -> ApiResult<Json<Vec<TagResponse>>> {
    let service = CatalogService::new(state.service_context());
    Ok(Json(to_responses(service.list_tags().await?)))
}

/// GET /pages
pub async fn list_pages(State(state): State<AppState>) -> ApiResult<Json<Vec<PageResponse>>> {
    let service = CatalogService::new(state.service_context());
    Ok(Json(to_responses(service.list_pages().await?)))
}

/// GET /degrees
pub async fn list_degrees(State(state): State<AppState>) -> ApiResult<Json<Vec<DegreeResponse>>> {
    let service = CatalogService::new(state.service_context());
    Ok(Json(to_responses(service.list_degrees().await?)))
}
