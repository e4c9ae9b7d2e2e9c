//! Reaction service
//!
//! Maintains at most one like/dislike per (user, publication) pair.
//! Submitting the current kind again removes it; submitting the other kind
//! switches it in place.

use agora_core::entities::{Reaction, ReactionKind, ReactionStatus, ToggleAction};
use agora_core::error::DomainError;
use agora_core::traits::UnitOfWork;
use tracing::{info, instrument};
use uuid::Uuid;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle a reaction in its own transaction
    pub async fn toggle(
        &self,
        user_id: Uuid,
        publication_id: Uuid,
        kind: ReactionKind,
    ) -> ServiceResult<Option<Reaction>> {
        let mut tx = self.ctx.begin().await?;
        let reaction = toggle(tx.as_mut(), user_id, publication_id, kind).await?;
        tx.commit().await?;
        Ok(reaction)
    }

    /// Look up the reaction of a user on a publication
    pub async fn check(&self, user_id: Uuid, publication_id: Uuid) -> ServiceResult<ReactionStatus> {
        let mut tx = self.ctx.begin().await?;
        let status = check(tx.as_mut(), user_id, publication_id).await?;
        Ok(status)
    }
}

/// Apply a like/dislike toggle inside the caller's transaction.
///
/// Returns the reaction now stored for the pair, or `None` when the toggle
/// removed it. Exactly one write happens per call.
///
/// # Errors
/// `UnknownUser` / `UnknownPublication` when either side of the pair is missing.
#[instrument(skip(tx))]
pub async fn toggle(
    tx: &mut dyn UnitOfWork,
    user_id: Uuid,
    publication_id: Uuid,
    kind: ReactionKind,
) -> ServiceResult<Option<Reaction>> {
    // The row lock serializes concurrent toggles by the same user
    if !tx.users().lock(user_id).await? {
        return Err(DomainError::UnknownUser(user_id).into());
    }
    if !tx.publications().exists(publication_id).await? {
        return Err(DomainError::UnknownPublication(publication_id).into());
    }

    let existing = tx.reactions().find(user_id, publication_id).await?;

    match (ToggleAction::plan(existing.as_ref().map(|r| r.kind), kind), existing) {
        (ToggleAction::Create, _) => {
            let reaction = Reaction::new(user_id, publication_id, kind);
            tx.reactions().create(&reaction).await?;
            info!(%user_id, %publication_id, %kind, "Reaction added");
            Ok(Some(reaction))
        }
        (ToggleAction::Remove, _) => {
            tx.reactions().delete(user_id, publication_id).await?;
            info!(%user_id, %publication_id, %kind, "Reaction removed");
            Ok(None)
        }
        (ToggleAction::Replace, Some(mut reaction)) => {
            reaction.switch_to(kind);
            tx.reactions().update(&reaction).await?;
            info!(%user_id, %publication_id, %kind, "Reaction switched");
            Ok(Some(reaction))
        }
        (ToggleAction::Replace, None) => Err(DomainError::InternalError(
            "replace planned without an existing reaction".to_string(),
        )
        .into()),
    }
}

/// Report whether a reaction exists for the pair and its kind
#[instrument(skip(tx))]
pub async fn check(
    tx: &mut dyn UnitOfWork,
    user_id: Uuid,
    publication_id: Uuid,
) -> ServiceResult<ReactionStatus> {
    let reaction = tx.reactions().find(user_id, publication_id).await?;
    Ok(ReactionStatus::from(reaction.as_ref()))
}
