//! Reference data - degrees, pages and tags

use serde::{Deserialize, Serialize};

/// Academic degree a user belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degree {
    pub id: i32,
    pub title: String,
}

/// Page a publication is posted on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: i32,
    pub url: String,
}

/// Tag that can be attached to publications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
}
