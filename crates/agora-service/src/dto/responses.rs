//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use agora_core::entities::ReactionKind;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

// ============================================================================
// Publication Responses
// ============================================================================

/// Publication with its like/dislike counts and the rows it references
#[derive(Debug, Clone, Serialize)]
pub struct PublicationResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
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
#[derive(Debug, Clone, Serialize)]
pub struct AuthorResponse {
    pub name: String,
    pub last_name: String,
    pub mail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub degree_id: i32,
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// Whether the caller has reacted, and how
#[derive(Debug, Clone, Serialize)]
pub struct ReactionStatusResponse {
    pub exists: bool,
    pub reaction_type: Option<ReactionKind>,
}

// ============================================================================
// User Responses
// ============================================================================

/// User account; the password hash is never serialized
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub last_name: String,
    pub mail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub degree_id: i32,
}

/// Public profile
#[derive(Debug, Clone, Serialize)]
pub struct UserProfileResponse {
    pub name: String,
    pub last_name: String,
    pub mail: String,
    pub bio: Option<String>,
    pub degree_title: Option<String>,
}

// ============================================================================
// Catalog Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct TagResponse {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageResponse {
    pub id: i32,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DegreeResponse {
    pub id: i32,
    pub title: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
