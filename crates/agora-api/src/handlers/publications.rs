//! Publication handlers
//!
//! Endpoints for the publication lifecycle and listings.

use agora_service::dto::{
    to_responses, CreatePublicationRequest, PublicationResponse, TagResponse,
    UpdatePublicationRequest,
};
use agora_service::{PublicationService, ServiceError};
use axum::{extract::State, Json};
use uuid::Uuid;

use crate::extractors::{AuthUser, ParsedPath, TagFilter, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a publication authored by the caller
///
/// POST /publications
///
/// A `user_id` in the body is accepted only when it names the caller.
pub async fn create_publication(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePublicationRequest>,
) -> ApiResult<Created<PublicationResponse>> {
    if request.user_id.is_some_and(|id| id != auth.user_id) {
        return Err(ServiceError::permission_denied("publications are authored by the caller").into());
    }

    let service = PublicationService::new(state.service_context());
    let publication = service
        .create(request.into_new_publication(auth.user_id))
        .await?;
    Ok(Created(publication.into()))
}

/// List every publication
///
/// GET /publications
pub async fn list_publications(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<PublicationResponse>>> {
    let service = PublicationService::new(state.service_context());
    Ok(Json(to_responses(service.all().await?)))
}

/// Get a single publication
///
/// GET /publications/{publication_id}
pub async fn get_publication(
    State(state): State<AppState>,
    ParsedPath(publication_id): ParsedPath<Uuid>,
) -> ApiResult<Json<PublicationResponse>> {
    let service = PublicationService::new(state.service_context());
    let publication = service
        .by_id(publication_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Publication", publication_id.to_string()))?;
    Ok(Json(publication.into()))
}

/// Replace a publication owned by the caller
///
/// PUT /publications/{publication_id}
pub async fn update_publication(
    State(state): State<AppState>,
    auth: AuthUser,
    ParsedPath(publication_id): ParsedPath<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdatePublicationRequest>,
) -> ApiResult<Json<PublicationResponse>> {
    let service = PublicationService::new(state.service_context());
    let publication = service
        .update(publication_id, auth.user_id, request.into())
        .await?;
    Ok(Json(publication.into()))
}

/// Delete a publication owned by the caller
///
/// DELETE /publications/{publication_id}
pub async fn delete_publication(
    State(state): State<AppState>,
    auth: AuthUser,
    ParsedPath(publication_id): ParsedPath<Uuid>,
) -> ApiResult<NoContent> {
    let service = PublicationService::new(state.service_context());
    if !service.delete(publication_id, auth.user_id).await? {
        return Err(ServiceError::not_found("Publication", publication_id.to_string()).into());
    }
    Ok(NoContent)
}

/// Publications on a page
///
/// GET /publications/by-page/{page_id}
pub async fn list_by_page(
    State(state): State<AppState>,
    ParsedPath(page_id): ParsedPath<i32>,
) -> ApiResult<Json<Vec<PublicationResponse>>> {
    let service = PublicationService::new(state.service_context());
    Ok(Json(to_responses(service.by_page(page_id).await?)))
}

/// Publications written by a user
///
/// GET /publications/by-user/{user_id}
pub async fn list_by_user(
    State(state): State<AppState>,
    ParsedPath(user_id): ParsedPath<Uuid>,
) -> ApiResult<Json<Vec<PublicationResponse>>> {
    let service = PublicationService::new(state.service_context());
    Ok(Json(to_responses(service.by_user(user_id).await?)))
}

/// Publications carrying any of the given tags
///
/// GET /publications/by-tags?tag_ids=1&tag_ids=2
pub async fn list_by_tags(
    State(state): State<AppState>,
    TagFilter(tag_ids): TagFilter,
) -> ApiResult<Json<Vec<PublicationResponse>>> {
    let service = PublicationService::new(state.service_context());
    Ok(Json(to_responses(service.by_tags(&tag_ids).await?)))
}

/// Tags attached to a publication
///
/// GET /publications/{publication_id}/tags
pub async fn list_publication_tags(
    State(state): State<AppState>,
    ParsedPath(publication_id): ParsedPath<Uuid>,
) -> ApiResult<Json<Vec<TagResponse>>> {
    let service = PublicationService::new(state.service_context());
    Ok(Json(to_responses(service.tags_of(publication_id).await?)))
}
