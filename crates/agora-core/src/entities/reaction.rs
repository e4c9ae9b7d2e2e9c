//! Reaction entity - a user's like or dislike on a publication

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reaction kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    /// Stored / wire representation
    pub fn as_str(self) -> &'static str {
        match self {
            ReactionKind::Like => "like",
            ReactionKind::Dislike => "dislike",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is neither `like` nor `dislike`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid reaction kind: {0}")]
pub struct ReactionKindParseError(pub String);

impl FromStr for ReactionKind {
    type Err = ReactionKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(ReactionKind::Like),
            "dislike" => Ok(ReactionKind::Dislike),
            other => Err(ReactionKindParseError(other.to_string())),
        }
    }
}

/// Reaction entity. At most one exists per (user, publication) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub user_id: Uuid,
    pub publication_id: Uuid,
    pub kind: ReactionKind,
    /// Time of the last change
    pub reacted_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(user_id: Uuid, publication_id: Uuid, kind: ReactionKind) -> Self {
        Self {
            user_id,
            publication_id,
            kind,
            reacted_at: Utc::now(),
        }
    }

    /// Switch to another kind, refreshing the timestamp
    pub fn switch_to(&mut self, kind: ReactionKind) {
        self.kind = kind;
        self.reacted_at = Utc::now();
    }
}

/// What a toggle has to do given the current state of the pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    /// No reaction yet: insert one
    Create,
    /// Same kind submitted again: delete it
    Remove,
    /// Different kind submitted: update in place
    Replace,
}

impl ToggleAction {
    /// Decide the transition for `requested` when the pair currently holds `existing`
    pub fn plan(existing: Option<ReactionKind>, requested: ReactionKind) -> Self {
        match existing {
            None => ToggleAction::Create,
            Some(current) if current == requested => ToggleAction::Remove,
            Some(_) => ToggleAction::Replace,
        }
    }
}

/// Like/dislike totals for one publication
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionCounts {
    #[serde(rename = "likes_count")]
    pub likes: i64,
    #[serde(rename = "dislikes_count")]
    pub dislikes: i64,
}

impl ReactionCounts {
    pub fn total(&self) -> i64 {
        self.likes + self.dislikes
    }
}

/// Result of a reaction lookup for a (user, publication) pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionStatus {
    pub exists: bool,
    #[serde(rename = "reaction_type")]
    pub kind: Option<ReactionKind>,
}

impl From<Option<&Reaction>> for ReactionStatus {
    fn from(reaction: Option<&Reaction>) -> Self {
        Self {
            exists: reaction.is_some(),
            kind: reaction.map(|r| r.kind),
        }
    }
}
