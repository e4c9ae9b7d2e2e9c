//! User entity - represents an author account

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User account. Password hashing happens upstream; only the hash is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub last_name: String,
    pub bio: Option<String>,
    pub mail: String,
    pub password_hash: Option<String>,
    pub degree_id: i32,
}

impl User {
    /// Create a new User with a freshly generated id
    pub fn new(name: String, last_name: String, mail: String, degree_id: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            last_name,
            bio: None,
            mail,
            password_hash: None,
            degree_id,
        }
    }

    /// Builder-style setter for the bio
    pub fn with_bio(mut self, bio: Option<String>) -> Self {
        self.bio = bio;
        self
    }

    /// Builder-style setter for the password hash
    pub fn with_password_hash(mut self, password_hash: Option<String>) -> Self {
        self.password_hash = password_hash;
        self
    }
}

/// Public profile view of a user, with the degree title resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub last_name: String,
    pub mail: String,
    pub bio: Option<String>,
    pub degree_title: Option<String>,
}

impl UserProfile {
    pub fn new(user: &User, degree_title: Option<String>) -> Self {
        Self {
            name: user.name.clone(),
            last_name: user.last_name.clone(),
            mail: user.mail.clone(),
            bio: user.bio.clone(),
            degree_title,
        }
    }
}

/// Author fields embedded in publication views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSummary {
    pub name: String,
    pub last_name: String,
    pub mail: String,
    pub bio: Option<String>,
    pub degree_id: i32,
}

impl From<&User> for AuthorSummary {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            last_name: user.last_name.clone(),
            mail: user.mail.clone(),
            bio: user.bio.clone(),
            degree_id: user.degree_id,
        }
    }
}
