//! Reaction handlers
//!
//! Endpoints for toggling and inspecting likes/dislikes.

use agora_core::entities::{ReactionKind, ReactionStatus};
use agora_service::dto::{to_responses, PublicationResponse, ReactionStatusResponse, ToggleReactionRequest};
use agora_service::{PublicationService, ReactionService};
use axum::{extract::State, Json};
use uuid::Uuid;

use crate::extractors::{ParsedPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Toggle a like or dislike; responds with the state after the toggle
///
/// POST /reactions/toggle
pub async fn toggle_reaction(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ToggleReactionRequest>,
) -> ApiResult<Json<ReactionStatusResponse>> {
    let service = ReactionService::new(state.service_context());
    let reaction = service
        .toggle(request.id_user, request.id_publication, request.kind)
        .await?;
    Ok(Json(ReactionStatus::from(reaction.as_ref()).into()))
}

/// Current reaction of a user on a publication
///
/// GET /reactions/{user_id}/{publication_id}
pub async fn get_reaction(
    State(state): State<AppState>,
    ParsedPath((user_id, publication_id)): ParsedPath<(Uuid, Uuid)>,
) -> ApiResult<Json<ReactionStatusResponse>> {
    let service = ReactionService::new(state.service_context());
    Ok(Json(service.check(user_id, publication_id).await?.into()))
}

/// Publications a user liked or disliked
///
/// GET /users/{user_id}/reactions/{kind}
pub async fn list_reacted_publications(
    State(state): State<AppState>,
    ParsedPath((user_id, kind)): ParsedPath<(Uuid, ReactionKind)>,
) -> ApiResult<Json<Vec<PublicationResponse>>> {
    let service = PublicationService::new(state.service_context());
    Ok(Json(to_responses(service.by_user_reaction(user_id, kind).await?)))
}
