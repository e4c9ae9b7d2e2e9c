//! Table contents of the in-memory store

use std::collections::{BTreeMap, BTreeSet, HashMap};

use uuid::Uuid;

use agora_core::entities::{Degree, Page, Publication, Reaction, Tag, User};
use agora_core::error::DomainError;

/// Snapshot of every table. Cloned at `begin`, written back at `commit`.
#[derive(Debug, Clone, Default)]
pub struct MemoryState {
    pub(super) users: HashMap<Uuid, User>,
    pub(super) degrees: BTreeMap<i32, Degree>,
    pub(super) pages: BTreeMap<i32, Page>,
    pub(super) tags: BTreeMap<i32, Tag>,
    /// Insertion order; `tag_ids` is left empty and filled from `publication_tags`
    pub(super) publications: Vec<Publication>,
    pub(super) publication_tags: BTreeSet<(Uuid, i32)>,
    pub(super) reactions: HashMap<(Uuid, Uuid), Reaction>,
    pub(super) next_degree_id: i32,
    pub(super) next_page_id: i32,
    pub(super) next_tag_id: i32,
}

impl MemoryState {
    pub(super) fn publication_index(&self, id: Uuid) -> Option<usize> {
        self.publications.iter().position(|p| p.id == id)
    }

    /// Row with its tag ids attached
    pub(super) fn hydrate(&self, publication: &Publication) -> Publication {
        let mut publication = publication.clone();
        publication.tag_ids = self
            .publication_tags
            .range((publication.id, i32::MIN)..=(publication.id, i32::MAX))
            .map(|(_, tag_id)| *tag_id)
            .collect();
        publication
    }

    /// Rows matching `filter`, ordered by creation time then id
    pub(super) fn select_publications<F>(&self, filter: F) -> Vec<Publication>
    where
        F: Fn(&Publication) -> bool,
    {
        let mut rows: Vec<Publication> = self
            .publications
            .iter()
            .filter(|p| filter(p))
            .map(|p| self.hydrate(p))
            .collect();
        rows.sort_by_key(|p| (p.created_at, p.id));
        rows
    }

    // Foreign keys are checked the way the relational schema would.

    pub(super) fn ensure_user(&self, id: Uuid) -> Result<(), DomainError> {
        if self.users.contains_key(&id) {
            Ok(())
        } else {
            Err(fk_violation("user", id))
        }
    }

    pub(super) fn ensure_publication(&self, id: Uuid) -> Result<(), DomainError> {
        if self.publication_index(id).is_some() {
            Ok(())
        } else {
            Err(fk_violation("publication", id))
        }
    }

    pub(super) fn ensure_page(&self, id: i32) -> Result<(), DomainError> {
        if self.pages.contains_key(&id) {
            Ok(())
        } else {
            Err(fk_violation("page", id))
        }
    }

    pub(super) fn ensure_degree(&self, id: i32) -> Result<(), DomainError> {
        if self.degrees.contains_key(&id) {
            Ok(())
        } else {
            Err(fk_violation("degree", id))
        }
    }

    pub(super) fn ensure_tag(&self, id: i32) -> Result<(), DomainError> {
        if self.tags.contains_key(&id) {
            Ok(())
        } else {
            Err(fk_violation("tag", id))
        }
    }

    /// Rows still pointing at a publication
    pub(super) fn publication_is_referenced(&self, id: Uuid) -> bool {
        self.reactions.keys().any(|(_, publication_id)| *publication_id == id)
            || self.publication_tags.iter().any(|(publication_id, _)| *publication_id == id)
    }

    /// Rows still pointing at a user
    pub(super) fn user_is_referenced(&self, id: Uuid) -> bool {
        self.reactions.keys().any(|(user_id, _)| *user_id == id)
            || self.publications.iter().any(|p| p.user_id == id)
    }
}

fn fk_violation(table: &str, key: impl std::fmt::Display) -> DomainError {
    DomainError::ConstraintViolation(format!("foreign key to {table} {key} not satisfied"))
}

pub(super) fn still_referenced(table: &str, key: impl std::fmt::Display) -> DomainError {
    DomainError::ConstraintViolation(format!("{table} {key} is still referenced"))
}

pub(super) fn duplicate_key(table: &str) -> DomainError {
    DomainError::ConstraintViolation(format!("duplicate key in {table}"))
}
