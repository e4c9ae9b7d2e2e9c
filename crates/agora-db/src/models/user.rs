//! User database model

use sqlx::FromRow;
use uuid::Uuid;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: Uuid,
    pub name: String,
    pub last_name: String,
    pub bio: Option<String>,
    pub mail: String,
    pub password_hash: Option<String>,
    pub degree_id: i32,
}
