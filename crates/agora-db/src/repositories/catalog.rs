//! PostgreSQL implementations of the reference data repositories

use async_trait::async_trait;
use sqlx::PgConnection;
use tracing::instrument;
use uuid::Uuid;

use agora_core::entities::{Degree, Page, Tag};
use agora_core::traits::{DegreeRepository, PageRepository, RepoResult, TagRepository};

use crate::models::{DegreeModel, PageModel, TagModel};

use super::error::map_db_error;

// ============================================================================
// Degrees
// ============================================================================

pub struct PgDegreeRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> PgDegreeRepository<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl DegreeRepository for PgDegreeRepository<'_> {
    #[instrument(skip(self))]
    async fn find_by_id(&mut self, id: i32) -> RepoResult<Option<Degree>> {
        let result = sqlx::query_as::<_, DegreeModel>("SELECT id, title FROM degrees WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Degree::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&mut self) -> RepoResult<Vec<Degree>> {
        let results = sqlx::query_as::<_, DegreeModel>("SELECT id, title FROM degrees ORDER BY id")
            .fetch_all(&mut *self.conn)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Degree::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&mut self, title: &str) -> RepoResult<Degree> {
        let model = sqlx::query_as::<_, DegreeModel>(
            "INSERT INTO degrees (title) VALUES ($1) RETURNING id, title",
        )
        .bind(title)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        Ok(model.into())
    }
}

// ============================================================================
// Pages
// ============================================================================

pub struct PgPageRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> PgPageRepository<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl PageRepository for PgPageRepository<'_> {
    #[instrument(skip(self))]
    async fn find_by_id(&mut self, id: i32) -> RepoResult<Option<Page>> {
        let result = sqlx::query_as::<_, PageModel>("SELECT id, url FROM pages WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Page::from))
    }

    #[instrument(skip(self))]
    async fn find_by_ids(&mut self, ids: &[i32]) -> RepoResult<Vec<Page>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let results =
            sqlx::query_as::<_, PageModel>("SELECT id, url FROM pages WHERE id = ANY($1) ORDER BY id")
                .bind(ids)
                .fetch_all(&mut *self.conn)
                .await
                .map_err(map_db_error)?;

        Ok(results.into_iter().map(Page::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_all(&mut self) -> RepoResult<Vec<Page>> {
        let results = sqlx::query_as::<_, PageModel>("SELECT id, url FROM pages ORDER BY id")
            .fetch_all(&mut *self.conn)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Page::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&mut self, url: &str) -> RepoResult<Page> {
        let model =
            sqlx::query_as::<_, PageModel>("INSERT INTO pages (url) VALUES ($1) RETURNING id, url")
                .bind(url)
                .fetch_one(&mut *self.conn)
                .await
                .map_err(map_db_error)?;

        Ok(model.into())
    }
}

// ============================================================================
// Tags
// ============================================================================

pub struct PgTagRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> PgTagRepository<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl TagRepository for PgTagRepository<'_> {
    #[instrument(skip(self))]
    async fn find_all(&mut self) -> RepoResult<Vec<Tag>> {
        let results =
            sqlx::query_as::<_, TagModel>("SELECT id, title, description FROM tags ORDER BY id")
                .fetch_all(&mut *self.conn)
                .await
                .map_err(map_db_error)?;

        Ok(results.into_iter().map(Tag::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_ids(&mut self, ids: &[i32]) -> RepoResult<Vec<Tag>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, TagModel>(
            "SELECT id, title, description FROM tags WHERE id = ANY($1) ORDER BY id",
        )
        .bind(ids)
        .fetch_all(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Tag::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_existing_ids(&mut self, ids: &[i32]) -> RepoResult<Vec<i32>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_scalar::<_, i32>(
            "SELECT id FROM tags WHERE id = ANY($1) ORDER BY id",
        )
        .bind(ids)
        .fetch_all(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        Ok(results)
    }

    #[instrument(skip(self))]
    async fn find_by_publication(&mut self, publication_id: Uuid) -> RepoResult<Vec<Tag>> {
        let results = sqlx::query_as::<_, TagModel>(
            r"
            SELECT t.id, t.title, t.description
            FROM tags t
            INNER JOIN publication_tags pt ON pt.tag_id = t.id
            WHERE pt.publication_id = $1
            ORDER BY t.id
            ",
        )
        .bind(publication_id)
        .fetch_all(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Tag::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&mut self, title: Option<&str>, description: Option<&str>) -> RepoResult<Tag> {
        let model = sqlx::query_as::<_, TagModel>(
            "INSERT INTO tags (title, description) VALUES ($1, $2) RETURNING id, title, description",
        )
        .bind(title)
        .bind(description)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        Ok(model.into())
    }
}
