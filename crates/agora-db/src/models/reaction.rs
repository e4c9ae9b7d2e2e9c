//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub user_id: Uuid,
    pub publication_id: Uuid,
    pub kind: String,
    pub reacted_at: DateTime<Utc>,
}

/// Per-publication like/dislike totals (from grouped query)
#[derive(Debug, Clone, FromRow)]
pub struct ReactionCountModel {
    pub publication_id: Uuid,
    pub likes: i64,
    pub dislikes: i64,
}
