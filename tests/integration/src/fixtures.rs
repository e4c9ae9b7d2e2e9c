//! Test fixtures and data generators
//!
//! Request bodies the tests send and the response shapes they read back.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Requests
// ============================================================================

/// Create user request
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub last_name: String,
    pub mail: String,
    pub bio: Option<String>,
    pub degree_id: i32,
}

impl CreateUserRequest {
    pub fn unique(degree_id: i32) -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Marie{suffix}"),
            last_name: "Curie".to_string(),
            mail: format!("marie{suffix}@example.com"),
            bio: None,
            degree_id,
        }
    }
}

/// Create publication request
#[derive(Debug, Clone, Serialize)]
pub struct CreatePublicationRequest {
    pub title: String,
    pub content: String,
    pub page_id: i32,
    pub user_id: Uuid,
    pub tag_ids: Vec<i32>,
}

impl CreatePublicationRequest {
    pub fn new(user_id: Uuid, page_id: i32, tag_ids: Vec<i32>) -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Publication {suffix}"),
            content: "On radioactivity".to_string(),
            page_id,
            user_id,
            tag_ids,
        }
    }
}

/// Update publication request
#[derive(Debug, Clone, Serialize)]
pub struct UpdatePublicationRequest {
    pub title: String,
    pub content: String,
    pub page_id: i32,
    pub tag_ids: Vec<i32>,
}

/// Toggle reaction request
#[derive(Debug, Clone, Serialize)]
pub struct ToggleReactionRequest {
    pub id_user: Uuid,
    pub id_publication: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ToggleReactionRequest {
    pub fn like(user_id: Uuid, publication_id: Uuid) -> Self {
        Self::new(user_id, publication_id, "like")
    }

    pub fn dislike(user_id: Uuid, publication_id: Uuid) -> Self {
        Self::new(user_id, publication_id, "dislike")
    }

    fn new(user_id: Uuid, publication_id: Uuid, kind: &str) -> Self {
        Self {
            id_user: user_id,
            id_publication: publication_id,
            kind: kind.to_string(),
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub last_name: String,
    pub mail: String,
    pub bio: Option<String>,
    pub degree_id: i32,
}

/// Profile response
#[derive(Debug, Deserialize)]
pub struct UserProfileResponse {
    pub name: String,
    pub last_name: String,
    pub mail: String,
    pub bio: Option<String>,
    pub degree_title: Option<String>,
}

/// Publication response
#[derive(Debug, Deserialize)]
pub struct PublicationResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub user_id: Uuid,
    pub user: AuthorResponse,
    pub page_id: i32,
    pub page: PageResponse,
    pub tag_ids: Vec<i32>,
    pub tags: Vec<TagResponse>,
    pub likes_count: i64,
    pub dislikes_count: i64,
}

/// Author embedded in a publication
#[derive(Debug, Deserialize)]
pub struct AuthorResponse {
    pub name: String,
    pub last_name: String,
    pub mail: String,
    pub degree_id: i32,
}

/// Page response
#[derive(Debug, Deserialize)]
pub struct PageResponse {
    pub id: i32,
    pub url: String,
}

/// Reaction status response
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct ReactionStatusResponse {
    pub exists: bool,
    pub reaction_type: Option<String>,
}

/// Tag response
#[derive(Debug, Deserialize)]
pub struct TagResponse {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
