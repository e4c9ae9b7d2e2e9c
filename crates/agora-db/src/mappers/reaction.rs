//! Reaction entity <-> model mapper

use agora_core::entities::{Reaction, ReactionCounts, ReactionKind};
use agora_core::error::DomainError;
use uuid::Uuid;

use crate::models::{ReactionCountModel, ReactionModel};

/// Convert ReactionModel to Reaction entity
///
/// Fails only if the `kind` column holds a value the check constraint should have rejected.
impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        let kind = model
            .kind
            .parse::<ReactionKind>()
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(Reaction {
            user_id: model.user_id,
            publication_id: model.publication_id,
            kind,
            reacted_at: model.reacted_at,
        })
    }
}

/// Convert grouped count rows into (publication id, counts) pairs
pub fn counts_from_models(models: Vec<ReactionCountModel>) -> Vec<(Uuid, ReactionCounts)> {
    models
        .into_iter()
        .map(|m| {
            (
                m.publication_id,
                ReactionCounts {
                    likes: m.likes,
                    dislikes: m.dislikes,
                },
            )
        })
        .collect()
}
