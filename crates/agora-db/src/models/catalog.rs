//! Reference data models

use sqlx::FromRow;

/// Database model for degrees table
#[derive(Debug, Clone, FromRow)]
pub struct DegreeModel {
    pub id: i32,
    pub title: String,
}

/// Database model for pages table
#[derive(Debug, Clone, FromRow)]
pub struct PageModel {
    pub id: i32,
    pub url: String,
}

/// Database model for tags table
#[derive(Debug, Clone, FromRow)]
pub struct TagModel {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
}
