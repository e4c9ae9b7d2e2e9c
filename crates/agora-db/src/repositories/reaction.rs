//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgConnection;
use tracing::instrument;
use uuid::Uuid;

use agora_core::entities::{Reaction, ReactionCounts};
use agora_core::traits::{ReactionRepository, RepoResult};

use crate::mappers::counts_from_models;
use crate::models::{ReactionCountModel, ReactionModel};

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionRepository, bound to one transaction
pub struct PgReactionRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> PgReactionRepository<'c> {
    /// Create a new PgReactionRepository
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository<'_> {
    #[instrument(skip(self))]
    async fn find(&mut self, user_id: Uuid, publication_id: Uuid) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT user_id, publication_id, kind, reacted_at
            FROM reactions
            WHERE user_id = $1 AND publication_id = $2
            "#,
        )
        .bind(user_id)
        .bind(publication_id)
        .fetch_optional(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        result.map(Reaction::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn create(&mut self, reaction: &Reaction) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO reactions (user_id, publication_id, kind, reacted_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(reaction.user_id)
        .bind(reaction.publication_id)
        .bind(reaction.kind.as_str())
        .bind(reaction.reacted_at)
        .execute(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&mut self, reaction: &Reaction) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE reactions SET kind = $3, reacted_at = $4
            WHERE user_id = $1 AND publication_id = $2
            "#,
        )
        .bind(reaction.user_id)
        .bind(reaction.publication_id)
        .bind(reaction.kind.as_str())
        .bind(reaction.reacted_at)
        .execute(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&mut self, user_id: Uuid, publication_id: Uuid) -> RepoResult<()> {
        sqlx::query(
            r#"
            DELETE FROM reactions WHERE user_id = $1 AND publication_id = $2
            "#,
        )
        .bind(user_id)
        .bind(publication_id)
        .execute(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_publication(&mut self, publication_id: Uuid) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM reactions WHERE publication_id = $1")
            .bind(publication_id)
            .execute(&mut *self.conn)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete_by_user(&mut self, user_id: Uuid) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM reactions WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *self.conn)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self, publication_ids), fields(count = publication_ids.len()))]
    async fn count_by_publications(
        &mut self,
        publication_ids: &[Uuid],
    ) -> RepoResult<Vec<(Uuid, ReactionCounts)>> {
        if publication_ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, ReactionCountModel>(
            r#"
            SELECT publication_id,
                   COUNT(*) FILTER (WHERE kind = 'like') AS likes,
                   COUNT(*) FILTER (WHERE kind = 'dislike') AS dislikes
            FROM reactions
            WHERE publication_id = ANY($1)
            GROUP BY publication_id
            "#,
        )
        .bind(publication_ids)
        .fetch_all(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        Ok(counts_from_models(results))
    }
}
