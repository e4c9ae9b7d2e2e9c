//! Publication service
//!
//! Publication lifecycle (create, update, delete) with tag validation,
//! ownership checks and explicit cascading cleanup, plus the read paths.
//! Every read returns publications annotated with reaction counts; the facade
//! also resolves each one's author, page and tags.

use agora_core::entities::{
    normalize_tag_ids, AnnotatedPublication, NewPublication, Publication, PublicationChanges,
    PublicationDetails, ReactionKind, Tag,
};
use agora_core::error::DomainError;
use agora_core::traits::UnitOfWork;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::aggregation::{annotate_counts, annotate_one};
use super::context::ServiceContext;
use super::details::{resolve_details, resolve_one};
use super::error::ServiceResult;

/// Maximum title length in characters
pub const MAX_TITLE_LENGTH: usize = 255;

/// Publication service
pub struct PublicationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PublicationService<'a> {
    /// Create a new PublicationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a publication with its tags in one transaction
    pub async fn create(&self, input: NewPublication) -> ServiceResult<PublicationDetails> {
        let mut tx = self.ctx.begin().await?;
        let created = create(tx.as_mut(), input).await?;
        let details = resolve_one(tx.as_mut(), created).await?;
        tx.commit().await?;
        Ok(details)
    }

    /// Replace an owned publication in one transaction
    pub async fn update(
        &self,
        publication_id: Uuid,
        user_id: Uuid,
        changes: PublicationChanges,
    ) -> ServiceResult<PublicationDetails> {
        let mut tx = self.ctx.begin().await?;
        let updated = update(tx.as_mut(), publication_id, user_id, changes).await?;
        let details = resolve_one(tx.as_mut(), updated).await?;
        tx.commit().await?;
        Ok(details)
    }

    /// Delete an owned publication and everything attached to it.
    /// `Ok(false)` when it does not exist.
    pub async fn delete(&self, publication_id: Uuid, user_id: Uuid) -> ServiceResult<bool> {
        let mut tx = self.ctx.begin().await?;
        let deleted = delete(tx.as_mut(), publication_id, user_id).await?;
        tx.commit().await?;
        Ok(deleted)
    }

    /// Look up one publication
    pub async fn by_id(&self, publication_id: Uuid) -> ServiceResult<Option<PublicationDetails>> {
        let mut tx = self.ctx.begin().await?;
        let found = by_id(tx.as_mut(), publication_id).await?;
        match found {
            Some(annotated) => Ok(Some(resolve_one(tx.as_mut(), annotated).await?)),
            None => Ok(None),
        }
    }

    /// Every publication
    pub async fn all(&self) -> ServiceResult<Vec<PublicationDetails>> {
        let mut tx = self.ctx.begin().await?;
        let found = all(tx.as_mut()).await?;
        let details = resolve_details(tx.as_mut(), found).await?;
        Ok(details)
    }

    /// Publications posted on a page
    pub async fn by_page(&self, page_id: i32) -> ServiceResult<Vec<PublicationDetails>> {
        let mut tx = self.ctx.begin().await?;
        let found = by_page(tx.as_mut(), page_id).await?;
        let details = resolve_details(tx.as_mut(), found).await?;
        Ok(details)
    }

    /// Publications written by a user
    pub async fn by_user(&self, user_id: Uuid) -> ServiceResult<Vec<PublicationDetails>> {
        let mut tx = self.ctx.begin().await?;
        let found = by_user(tx.as_mut(), user_id).await?;
        let details = resolve_details(tx.as_mut(), found).await?;
        Ok(details)
    }

    /// Publications carrying any of the given tags
    pub async fn by_tags(&self, tag_ids: &[i32]) -> ServiceResult<Vec<PublicationDetails>> {
        let mut tx = self.ctx.begin().await?;
        let found = by_tags(tx.as_mut(), tag_ids).await?;
        let details = resolve_details(tx.as_mut(), found).await?;
        Ok(details)
    }

    /// Publications the user liked or disliked, by reaction time
    pub async fn by_user_reaction(
        &self,
        user_id: Uuid,
        kind: ReactionKind,
    ) -> ServiceResult<Vec<PublicationDetails>> {
        let mut tx = self.ctx.begin().await?;
        let found = by_user_reaction(tx.as_mut(), user_id, kind).await?;
        let details = resolve_details(tx.as_mut(), found).await?;
        Ok(details)
    }

    /// Tags attached to a publication
    pub async fn tags_of(&self, publication_id: Uuid) -> ServiceResult<Vec<Tag>> {
        let mut tx = self.ctx.begin().await?;
        let tags = tags_of(tx.as_mut(), publication_id).await?;
        Ok(tags)
    }
}

// ============================================================================
// Validation helpers
// ============================================================================

fn validate_title(title: &str) -> ServiceResult<()> {
    let length = title.chars().count();
    if length == 0 || length > MAX_TITLE_LENGTH {
        return Err(DomainError::ValidationError(format!(
            "title must be 1-{MAX_TITLE_LENGTH} characters"
        ))
        .into());
    }
    Ok(())
}

/// Deduplicate `tag_ids` and check every one exists
async fn validate_tags(tx: &mut dyn UnitOfWork, tag_ids: &[i32]) -> ServiceResult<Vec<i32>> {
    let requested = normalize_tag_ids(tag_ids);
    if requested.is_empty() {
        return Ok(requested);
    }

    let existing = tx.tags().find_existing_ids(&requested).await?;
    let missing: Vec<i32> = requested
        .iter()
        .copied()
        .filter(|id| existing.binary_search(id).is_err())
        .collect();

    if !missing.is_empty() {
        return Err(DomainError::InvalidTags(missing).into());
    }
    Ok(requested)
}

async fn ensure_page(tx: &mut dyn UnitOfWork, page_id: i32) -> ServiceResult<()> {
    if tx.pages().find_by_id(page_id).await?.is_none() {
        return Err(DomainError::UnknownPage(page_id).into());
    }
    Ok(())
}

/// Delete a publication with its reactions and tag associations, in FK order
pub(crate) async fn delete_cascade(tx: &mut dyn UnitOfWork, publication_id: Uuid) -> ServiceResult<()> {
    let reactions = tx.reactions().delete_by_publication(publication_id).await?;
    tx.publications().clear_tags(publication_id).await?;
    tx.publications().delete(publication_id).await?;
    info!(%publication_id, reactions, "Publication deleted");
    Ok(())
}

// ============================================================================
// Lifecycle
// ============================================================================

/// Create a publication and attach its tags inside the caller's transaction
#[instrument(skip(tx, input), fields(user_id = %input.user_id, page_id = input.page_id))]
pub async fn create(
    tx: &mut dyn UnitOfWork,
    input: NewPublication,
) -> ServiceResult<AnnotatedPublication> {
    validate_title(&input.title)?;
    let tag_ids = validate_tags(tx, &input.tag_ids).await?;
    ensure_page(tx, input.page_id).await?;
    if tx.users().find_by_id(input.user_id).await?.is_none() {
        return Err(DomainError::UnknownUser(input.user_id).into());
    }

    let publication = Publication::new(NewPublication { tag_ids, ..input });
    tx.publications().create(&publication).await?;
    tx.publications()
        .add_tags(publication.id, &publication.tag_ids)
        .await?;

    info!(publication_id = %publication.id, tags = publication.tag_ids.len(), "Publication created");

    // Freshly created: nobody has reacted yet
    Ok(AnnotatedPublication::new(publication, Default::default()))
}

/// Replace title, content, page and the whole tag set of an owned publication
#[instrument(skip(tx, changes))]
pub async fn update(
    tx: &mut dyn UnitOfWork,
    publication_id: Uuid,
    user_id: Uuid,
    changes: PublicationChanges,
) -> ServiceResult<AnnotatedPublication> {
    let mut publication = tx
        .publications()
        .find_by_id(publication_id)
        .await?
        .ok_or(DomainError::PublicationNotFound(publication_id))?;

    if !publication.is_owned_by(user_id) {
        warn!(%publication_id, %user_id, "Update rejected: not the owner");
        return Err(DomainError::NotPublicationOwner.into());
    }

    validate_title(&changes.title)?;
    let tag_ids = validate_tags(tx, &changes.tag_ids).await?;
    ensure_page(tx, changes.page_id).await?;

    publication.apply(PublicationChanges { tag_ids, ..changes });
    tx.publications().update(&publication).await?;
    tx.publications().clear_tags(publication_id).await?;
    tx.publications()
        .add_tags(publication_id, &publication.tag_ids)
        .await?;

    info!(%publication_id, "Publication updated");

    annotate_one(tx, publication).await
}

/// Delete an owned publication. `Ok(false)` when it does not exist.
#[instrument(skip(tx))]
pub async fn delete(
    tx: &mut dyn UnitOfWork,
    publication_id: Uuid,
    user_id: Uuid,
) -> ServiceResult<bool> {
    let Some(publication) = tx.publications().find_by_id(publication_id).await? else {
        return Ok(false);
    };

    if !publication.is_owned_by(user_id) {
        warn!(%publication_id, %user_id, "Delete rejected: not the owner");
        return Err(DomainError::NotPublicationOwner.into());
    }

    delete_cascade(tx, publication_id).await?;
    Ok(true)
}

// ============================================================================
// Queries
// ============================================================================

#[instrument(skip(tx))]
pub async fn by_id(
    tx: &mut dyn UnitOfWork,
    publication_id: Uuid,
) -> ServiceResult<Option<AnnotatedPublication>> {
    let found = tx.publications().find_by_id(publication_id).await?;
    match found {
        Some(publication) => Ok(Some(annotate_one(tx, publication).await?)),
        None => Ok(None),
    }
}

#[instrument(skip(tx))]
pub async fn all(tx: &mut dyn UnitOfWork) -> ServiceResult<Vec<AnnotatedPublication>> {
    let publications = tx.publications().find_all().await?;
    annotate_counts(tx, publications).await
}

#[instrument(skip(tx))]
pub async fn by_page(tx: &mut dyn UnitOfWork, page_id: i32) -> ServiceResult<Vec<AnnotatedPublication>> {
    let publications = tx.publications().find_by_page(page_id).await?;
    annotate_counts(tx, publications).await
}

#[instrument(skip(tx))]
pub async fn by_user(tx: &mut dyn UnitOfWork, user_id: Uuid) -> ServiceResult<Vec<AnnotatedPublication>> {
    let publications = tx.publications().find_by_user(user_id).await?;
    annotate_counts(tx, publications).await
}

/// Publications carrying any of the given tags, each at most once
#[instrument(skip(tx))]
pub async fn by_tags(
    tx: &mut dyn UnitOfWork,
    tag_ids: &[i32],
) -> ServiceResult<Vec<AnnotatedPublication>> {
    let tag_ids = normalize_tag_ids(tag_ids);
    if tag_ids.is_empty() {
        return Err(DomainError::EmptyTagFilter.into());
    }
    let publications = tx.publications().find_by_tags(&tag_ids).await?;
    annotate_counts(tx, publications).await
}

/// Publications the user reacted to with `kind`, most recent reaction last
#[instrument(skip(tx))]
pub async fn by_user_reaction(
    tx: &mut dyn UnitOfWork,
    user_id: Uuid,
    kind: ReactionKind,
) -> ServiceResult<Vec<AnnotatedPublication>> {
    let publications = tx.publications().find_by_user_reaction(user_id, kind).await?;
    annotate_counts(tx, publications).await
}

#[instrument(skip(tx))]
pub async fn tags_of(tx: &mut dyn UnitOfWork, publication_id: Uuid) -> ServiceResult<Vec<Tag>> {
    if !tx.publications().exists(publication_id).await? {
        return Err(DomainError::PublicationNotFound(publication_id).into());
    }
    Ok(tx.tags().find_by_publication(publication_id).await?)
}
