//! PostgreSQL implementation of the Database / UnitOfWork ports

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

use agora_core::traits::{
    Database, DegreeRepository, PageRepository, PublicationRepository, ReactionRepository,
    RepoResult, TagRepository, UnitOfWork, UserRepository,
};

use super::catalog::{PgDegreeRepository, PgPageRepository, PgTagRepository};
use super::error::map_db_error;
use super::publication::PgPublicationRepository;
use super::reaction::PgReactionRepository;
use super::user::PgUserRepository;

/// Transaction factory backed by a connection pool
#[derive(Clone)]
pub struct PgDatabase {
    pool: PgPool,
}

impl PgDatabase {
    /// Create a new PgDatabase
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Database for PgDatabase {
    #[instrument(skip(self))]
    async fn begin(&self) -> RepoResult<Box<dyn UnitOfWork>> {
        let tx = self.pool.begin().await.map_err(map_db_error)?;
        Ok(Box::new(PgUnitOfWork { tx }))
    }

    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}

/// One pooled connection inside an open transaction.
///
/// sqlx rolls the transaction back when it is dropped uncommitted.
pub struct PgUnitOfWork {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    fn users(&mut self) -> Box<dyn UserRepository + '_> {
        Box::new(PgUserRepository::new(&mut self.tx))
    }

    fn degrees(&mut self) -> Box<dyn DegreeRepository + '_> {
        Box::new(PgDegreeRepository::new(&mut self.tx))
    }

    fn pages(&mut self) -> Box<dyn PageRepository + '_> {
        Box::new(PgPageRepository::new(&mut self.tx))
    }

    fn tags(&mut self) -> Box<dyn TagRepository + '_> {
        Box::new(PgTagRepository::new(&mut self.tx))
    }

    fn publications(&mut self) -> Box<dyn PublicationRepository + '_> {
        Box::new(PgPublicationRepository::new(&mut self.tx))
    }

    fn reactions(&mut self) -> Box<dyn ReactionRepository + '_> {
        Box::new(PgReactionRepository::new(&mut self.tx))
    }

    #[instrument(skip(self))]
    async fn commit(self: Box<Self>) -> RepoResult<()> {
        self.tx.commit().await.map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn rollback(self: Box<Self>) -> RepoResult<()> {
        self.tx.rollback().await.map_err(map_db_error)
    }
}
