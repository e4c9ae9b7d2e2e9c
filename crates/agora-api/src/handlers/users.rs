//! User handlers
//!
//! Endpoints for user accounts.

use agora_service::dto::{CreateUserRequest, UpdateUserRequest, UserProfileResponse, UserResponse};
use agora_service::UserService;
use axum::{extract::State, Json};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a user
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<UserResponse>> {
    let service = UserService::new(state.service_context());
    let user = service.create(request.into()).await?;
    Ok(Created(user.into()))
}

/// Get the caller's profile
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserProfileResponse>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.get_profile(auth.user_id).await?.into()))
}

/// Update the caller's account
///
/// PATCH /users/@me
pub async fn update_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let user = service.update(auth.user_id, request.into()).await?;
    Ok(Json(user.into()))
}

/// Delete the caller's account and everything it owns
///
/// DELETE /users/@me
pub async fn delete_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.delete(auth.user_id).await?;
    Ok(NoContent)
}
