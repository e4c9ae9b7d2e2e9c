//! Publication database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Publication row joined with its aggregated tag ids
#[derive(Debug, Clone, FromRow)]
pub struct PublicationModel {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub user_id: Uuid,
    pub page_id: i32,
    /// `ARRAY(SELECT tag_id FROM publication_tags ...)`
    pub tag_ids: Vec<i32>,
}
