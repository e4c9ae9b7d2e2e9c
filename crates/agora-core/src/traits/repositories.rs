//! Repository traits (ports) - define the interface for data access
//!
//! Every repository is borrowed from a [`UnitOfWork`], so all reads and writes of
//! one operation run inside the same transaction. The domain layer defines what it
//! needs, and the infrastructure layer provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{
    Degree, Page, Publication, Reaction, ReactionCounts, ReactionKind, Tag, User,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Database / Unit of Work
// ============================================================================

/// Factory for transactional handles
#[async_trait]
pub trait Database: Send + Sync {
    /// Open a new transaction
    async fn begin(&self) -> RepoResult<Box<dyn UnitOfWork>>;

    /// Verify the store is reachable
    async fn ping(&self) -> RepoResult<()>;
}

/// A single open transaction.
///
/// Dropping a handle without calling [`UnitOfWork::commit`] rolls back every write
/// made through it.
#[async_trait]
pub trait UnitOfWork: Send {
    fn users(&mut self) -> Box<dyn UserRepository + '_>;

    fn degrees(&mut self) -> Box<dyn DegreeRepository + '_>;

    fn pages(&mut self) -> Box<dyn PageRepository + '_>;

    fn tags(&mut self) -> Box<dyn TagRepository + '_>;

    fn publications(&mut self) -> Box<dyn PublicationRepository + '_>;

    fn reactions(&mut self) -> Box<dyn ReactionRepository + '_>;

    /// Make every write of this transaction durable
    async fn commit(self: Box<Self>) -> RepoResult<()>;

    /// Discard every write of this transaction
    async fn rollback(self: Box<Self>) -> RepoResult<()>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send {
    /// Find user by ID
    async fn find_by_id(&mut self, id: Uuid) -> RepoResult<Option<User>>;

    /// Users with any of the given ids; missing ids are skipped
    async fn find_by_ids(&mut self, ids: &[Uuid]) -> RepoResult<Vec<User>>;

    /// Lock the user row until the transaction ends.
    /// Returns `false` when the user does not exist.
    async fn lock(&mut self, id: Uuid) -> RepoResult<bool>;

    /// Check if email is already taken
    async fn email_exists(&mut self, mail: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&mut self, user: &User) -> RepoResult<()>;

    /// Update an existing user
    async fn update(&mut self, user: &User) -> RepoResult<()>;

    /// Delete the user row. Owned rows must already be gone.
    async fn delete(&mut self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Reference data
// ============================================================================

#[async_trait]
pub trait DegreeRepository: Send {
    async fn find_by_id(&mut self, id: i32) -> RepoResult<Option<Degree>>;

    async fn find_all(&mut self) -> RepoResult<Vec<Degree>>;

    /// Insert a degree and return it with its assigned id
    async fn create(&mut self, title: &str) -> RepoResult<Degree>;
}

#[async_trait]
pub trait PageRepository: Send {
    async fn find_by_id(&mut self, id: i32) -> RepoResult<Option<Page>>;

    /// Pages with any of the given ids, ordered by id
    async fn find_by_ids(&mut self, ids: &[i32]) -> RepoResult<Vec<Page>>;

    async fn find_all(&mut self) -> RepoResult<Vec<Page>>;

    /// Insert a page and return it with its assigned id
    async fn create(&mut self, url: &str) -> RepoResult<Page>;
}

#[async_trait]
pub trait TagRepository: Send {
    async fn find_all(&mut self) -> RepoResult<Vec<Tag>>;

    /// Tags with any of the given ids, ordered by id
    async fn find_by_ids(&mut self, ids: &[i32]) -> RepoResult<Vec<Tag>>;

    /// Return the subset of `ids` that exist
    async fn find_existing_ids(&mut self, ids: &[i32]) -> RepoResult<Vec<i32>>;

    /// Tags attached to a publication, ordered by id
    async fn find_by_publication(&mut self, publication_id: Uuid) -> RepoResult<Vec<Tag>>;

    /// Insert a tag and return it with its assigned id
    async fn create(&mut self, title: Option<&str>, description: Option<&str>)
        -> RepoResult<Tag>;
}

// ============================================================================
// Publication Repository
// ============================================================================

/// Listing queries are ordered by creation time, then id.
#[async_trait]
pub trait PublicationRepository: Send {
    /// Find publication by ID
    async fn find_by_id(&mut self, id: Uuid) -> RepoResult<Option<Publication>>;

    /// Check if a publication exists
    async fn exists(&mut self, id: Uuid) -> RepoResult<bool>;

    async fn find_all(&mut self) -> RepoResult<Vec<Publication>>;

    async fn find_by_page(&mut self, page_id: i32) -> RepoResult<Vec<Publication>>;

    async fn find_by_user(&mut self, user_id: Uuid) -> RepoResult<Vec<Publication>>;

    /// Publications carrying at least one of `tag_ids`, each returned once
    async fn find_by_tags(&mut self, tag_ids: &[i32]) -> RepoResult<Vec<Publication>>;

    /// Publications the user reacted to with `kind`, ordered by reaction time
    async fn find_by_user_reaction(
        &mut self,
        user_id: Uuid,
        kind: ReactionKind,
    ) -> RepoResult<Vec<Publication>>;

    /// Insert the publication row only. Tags go through [`Self::add_tags`].
    async fn create(&mut self, publication: &Publication) -> RepoResult<()>;

    /// Update title, content and page
    async fn update(&mut self, publication: &Publication) -> RepoResult<()>;

    /// Delete the publication row. Reactions and tags must already be gone.
    async fn delete(&mut self, id: Uuid) -> RepoResult<()>;

    /// Attach tags to a publication
    async fn add_tags(&mut self, publication_id: Uuid, tag_ids: &[i32]) -> RepoResult<()>;

    /// Remove every tag association of a publication
    async fn clear_tags(&mut self, publication_id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send {
    /// Find the reaction of a user on a publication
    async fn find(&mut self, user_id: Uuid, publication_id: Uuid)
        -> RepoResult<Option<Reaction>>;

    /// Insert a new reaction
    async fn create(&mut self, reaction: &Reaction) -> RepoResult<()>;

    /// Overwrite kind and timestamp of an existing reaction
    async fn update(&mut self, reaction: &Reaction) -> RepoResult<()>;

    /// Remove the reaction of a user on a publication
    async fn delete(&mut self, user_id: Uuid, publication_id: Uuid) -> RepoResult<()>;

    /// Remove every reaction on a publication
    async fn delete_by_publication(&mut self, publication_id: Uuid) -> RepoResult<u64>;

    /// Remove every reaction made by a user
    async fn delete_by_user(&mut self, user_id: Uuid) -> RepoResult<u64>;

    /// Like/dislike totals for the given publications.
    /// Publications without reactions are omitted.
    async fn count_by_publications(
        &mut self,
        publication_ids: &[Uuid],
    ) -> RepoResult<Vec<(Uuid, ReactionCounts)>>;
}
