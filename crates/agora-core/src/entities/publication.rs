//! Publication entity - a post authored by a user on a page

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::catalog::{Page, Tag};
use super::reaction::ReactionCounts;
use super::user::AuthorSummary;

/// Publication entity
///
/// Like/dislike counts are derived and never stored here; see [`AnnotatedPublication`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub user_id: Uuid,
    pub page_id: i32,
    /// Attached tag ids, ascending and unique
    pub tag_ids: Vec<i32>,
}

/// Input for creating a publication
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPublication {
    pub title: String,
    pub content: String,
    pub user_id: Uuid,
    pub page_id: i32,
    pub tag_ids: Vec<i32>,
}

/// Replacement values for an update. The tag set is replaced as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationChanges {
    pub title: String,
    pub content: String,
    pub page_id: i32,
    pub tag_ids: Vec<i32>,
}

impl Publication {
    /// Create a new Publication stamped with the current time
    pub fn new(input: NewPublication) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            content: input.content,
            created_at: Utc::now(),
            user_id: input.user_id,
            page_id: input.page_id,
            tag_ids: normalize_tag_ids(&input.tag_ids),
        }
    }

    /// Check if the given user authored this publication
    #[inline]
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    /// Apply an update in place. Id, author and creation time never change.
    pub fn apply(&mut self, changes: PublicationChanges) {
        self.title = changes.title;
        self.content = changes.content;
        self.page_id = changes.page_id;
        self.tag_ids = normalize_tag_ids(&changes.tag_ids);
    }
}

/// Sort and deduplicate a list of tag ids
pub fn normalize_tag_ids(tag_ids: &[i32]) -> Vec<i32> {
    let mut ids = tag_ids.to_vec();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// A publication together with its current reaction counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedPublication {
    #[serde(flatten)]
    pub publication: Publication,
    #[serde(flatten)]
    pub counts: ReactionCounts,
}

impl AnnotatedPublication {
    pub fn new(publication: Publication, counts: ReactionCounts) -> Self {
        Self {
            publication,
            counts,
        }
    }
}

/// An annotated publication with the rows it references resolved: its author,
/// its page and its tags (ordered like `publication.tag_ids`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationDetails {
    #[serde(flatten)]
    pub publication: Publication,
    #[serde(flatten)]
    pub counts: ReactionCounts,
    #[serde(rename = "user")]
    pub author: AuthorSummary,
    pub page: Page,
    pub tags: Vec<Tag>,
}
