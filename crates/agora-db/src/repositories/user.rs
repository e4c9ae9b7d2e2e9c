//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgConnection;
use tracing::instrument;
use uuid::Uuid;

use agora_core::entities::User;
use agora_core::error::DomainError;
use agora_core::traits::{RepoResult, UserRepository};

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of UserRepository, bound to one transaction
pub struct PgUserRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> PgUserRepository<'c> {
    /// Create a new PgUserRepository
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository<'_> {
    #[instrument(skip(self))]
    async fn find_by_id(&mut self, id: Uuid) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, last_name, bio, mail, password_hash, degree_id
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(&mut self, ids: &[Uuid]) -> RepoResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, last_name, bio, mail, password_hash, degree_id
            FROM users
            WHERE id = ANY($1)
            ",
        )
        .bind(ids)
        .fetch_all(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn lock(&mut self, id: Uuid) -> RepoResult<bool> {
        // NO KEY UPDATE leaves foreign-key checks from other transactions unblocked
        let result = sqlx::query_scalar::<_, Uuid>(
            r"
            SELECT id FROM users WHERE id = $1 FOR NO KEY UPDATE
            ",
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        Ok(result.is_some())
    }

    #[instrument(skip(self))]
    async fn email_exists(&mut self, mail: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE mail = $1)
            ",
        )
        .bind(mail)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn create(&mut self, user: &User) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (id, name, last_name, bio, mail, password_hash, degree_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.last_name)
        .bind(&user.bio)
        .bind(&user.mail)
        .bind(&user.password_hash)
        .bind(user.degree_id)
        .execute(&mut *self.conn)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn update(&mut self, user: &User) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET name = $2, last_name = $3, bio = $4, degree_id = $5
            WHERE id = $1
            ",
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.last_name)
        .bind(&user.bio)
        .bind(user.degree_id)
        .execute(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(user.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&mut self, id: Uuid) -> RepoResult<()> {
        sqlx::query(
            r"
            DELETE FROM users WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&mut *self.conn)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
