//! PostgreSQL implementation of PublicationRepository

use async_trait::async_trait;
use sqlx::PgConnection;
use tracing::instrument;
use uuid::Uuid;

use agora_core::entities::{Publication, ReactionKind};
use agora_core::error::DomainError;
use agora_core::traits::{PublicationRepository, RepoResult};

use crate::models::PublicationModel;

use super::error::map_db_error;

/// Column list shared by every publication query; tag ids are folded into one array.
macro_rules! select_publications {
    () => {
        r"
        SELECT p.id, p.title, p.content, p.created_at, p.user_id, p.page_id,
               ARRAY(
                   SELECT pt.tag_id FROM publication_tags pt
                   WHERE pt.publication_id = p.id
                   ORDER BY pt.tag_id
               ) AS tag_ids
        FROM publications p
        "
    };
}

/// PostgreSQL implementation of PublicationRepository, bound to one transaction
pub struct PgPublicationRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> PgPublicationRepository<'c> {
    /// Create a new PgPublicationRepository
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    async fn fetch_list(
        &mut self,
        query: sqlx::query::QueryAs<'_, sqlx::Postgres, PublicationModel, sqlx::postgres::PgArguments>,
    ) -> RepoResult<Vec<Publication>> {
        let results = query
            .fetch_all(&mut *self.conn)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Publication::from).collect())
    }
}

#[async_trait]
impl PublicationRepository for PgPublicationRepository<'_> {
    #[instrument(skip(self))]
    async fn find_by_id(&mut self, id: Uuid) -> RepoResult<Option<Publication>> {
        let result = sqlx::query_as::<_, PublicationModel>(concat!(
            select_publications!(),
            "WHERE p.id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Publication::from))
    }

    #[instrument(skip(self))]
    async fn exists(&mut self, id: Uuid) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM publications WHERE id = $1)")
            .bind(id)
            .fetch_one(&mut *self.conn)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_all(&mut self) -> RepoResult<Vec<Publication>> {
        let query = sqlx::query_as::<_, PublicationModel>(concat!(
            select_publications!(),
            "ORDER BY p.created_at, p.id"
        ));
        self.fetch_list(query).await
    }

    #[instrument(skip(self))]
    async fn find_by_page(&mut self, page_id: i32) -> RepoResult<Vec<Publication>> {
        let query = sqlx::query_as::<_, PublicationModel>(concat!(
            select_publications!(),
            "WHERE p.page_id = $1 ORDER BY p.created_at, p.id"
        ))
        .bind(page_id);
        self.fetch_list(query).await
    }

    #[instrument(skip(self))]
    async fn find_by_user(&mut self, user_id: Uuid) -> RepoResult<Vec<Publication>> {
        let query = sqlx::query_as::<_, PublicationModel>(concat!(
            select_publications!(),
            "WHERE p.user_id = $1 ORDER BY p.created_at, p.id"
        ))
        .bind(user_id);
        self.fetch_list(query).await
    }

    #[instrument(skip(self))]
    async fn find_by_tags(&mut self, tag_ids: &[i32]) -> RepoResult<Vec<Publication>> {
        // EXISTS keeps each publication to a single row regardless of how many tags match
        let query = sqlx::query_as::<_, PublicationModel>(concat!(
            select_publications!(),
            r"
            WHERE EXISTS (
                SELECT 1 FROM publication_tags pt
                WHERE pt.publication_id = p.id AND pt.tag_id = ANY($1)
            )
            ORDER BY p.created_at, p.id
            "
        ))
        .bind(tag_ids);
        self.fetch_list(query).await
    }

    #[instrument(skip(self))]
    async fn find_by_user_reaction(
        &mut self,
        user_id: Uuid,
        kind: ReactionKind,
    ) -> RepoResult<Vec<Publication>> {
        let query = sqlx::query_as::<_, PublicationModel>(concat!(
            select_publications!(),
            r"
            INNER JOIN reactions r ON r.publication_id = p.id
            WHERE r.user_id = $1 AND r.kind = $2
            ORDER BY r.reacted_at, p.id
            "
        ))
        .bind(user_id)
        .bind(kind.as_str());
        self.fetch_list(query).await
    }

    #[instrument(skip(self, publication), fields(publication_id = %publication.id))]
    async fn create(&mut self, publication: &Publication) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO publications (id, title, content, created_at, user_id, page_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(publication.id)
        .bind(&publication.title)
        .bind(&publication.content)
        .bind(publication.created_at)
        .bind(publication.user_id)
        .bind(publication.page_id)
        .execute(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, publication), fields(publication_id = %publication.id))]
    async fn update(&mut self, publication: &Publication) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE publications
            SET title = $2, content = $3, page_id = $4
            WHERE id = $1
            ",
        )
        .bind(publication.id)
        .bind(&publication.title)
        .bind(&publication.content)
        .bind(publication.page_id)
        .execute(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PublicationNotFound(publication.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&mut self, id: Uuid) -> RepoResult<()> {
        sqlx::query("DELETE FROM publications WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn add_tags(&mut self, publication_id: Uuid, tag_ids: &[i32]) -> RepoResult<()> {
        if tag_ids.is_empty() {
            return Ok(());
        }

        sqlx::query(
            r"
            INSERT INTO publication_tags (publication_id, tag_id)
            SELECT $1, tag_id FROM UNNEST($2::int4[]) AS tag_id
            ",
        )
        .bind(publication_id)
        .bind(tag_ids)
        .execute(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn clear_tags(&mut self, publication_id: Uuid) -> RepoResult<()> {
        sqlx::query("DELETE FROM publication_tags WHERE publication_id = $1")
            .bind(publication_id)
            .execute(&mut *self.conn)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
