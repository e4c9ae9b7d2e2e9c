//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; bodies also implement `Validate`.

use agora_core::entities::ReactionKind;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

// ============================================================================
// Publication Requests
// ============================================================================

/// Create publication request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePublicationRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    pub content: String,

    pub page_id: i32,

    /// Author of the publication. The caller is the author; when present this
    /// must name the caller.
    #[serde(default)]
    pub user_id: Option<Uuid>,

    #[serde(default, alias = "tags")]
    pub tag_ids: Vec<i32>,
}

/// Full replacement of a publication's editable fields
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePublicationRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    pub content: String,

    pub page_id: i32,

    #[serde(default, alias = "tags")]
    pub tag_ids: Vec<i32>,
}

/// `?tag_ids=1&tag_ids=2`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagFilterQuery {
    #[serde(default)]
    pub tag_ids: Vec<i32>,
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// Toggle a like or dislike
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ToggleReactionRequest {
    pub id_user: Uuid,

    pub id_publication: Uuid,

    #[serde(rename = "type")]
    pub kind: ReactionKind,
}

// ============================================================================
// User Requests
// ============================================================================

/// Create user request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[serde(alias = "lastName")]
    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub mail: String,

    #[validate(length(max = 2000, message = "Bio must be at most 2000 characters"))]
    pub bio: Option<String>,

    /// Already hashed by the authentication layer
    pub password_hash: Option<String>,

    #[serde(alias = "degreeId")]
    pub degree_id: i32,
}

/// Update current user request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[serde(alias = "lastName")]
    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: Option<String>,

    #[validate(length(max = 2000, message = "Bio must be at most 2000 characters"))]
    pub bio: Option<String>,

    #[serde(alias = "degreeId")]
    pub degree_id: Option<i32>,
}
