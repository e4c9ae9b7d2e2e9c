//! In-memory implementation of the store ports
//!
//! Used by service and HTTP tests and for running the API without PostgreSQL.
//! Transactions are serialized: `begin` takes an exclusive lock on the shared
//! state and works on a private copy that `commit` writes back. Dropping the
//! handle discards the copy, which is the rollback.

mod repositories;
mod state;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};

use agora_core::traits::{
    Database, DegreeRepository, PageRepository, PublicationRepository, ReactionRepository,
    RepoResult, TagRepository, UnitOfWork, UserRepository,
};

pub use repositories::{
    MemoryDegreeRepository, MemoryPageRepository, MemoryPublicationRepository,
    MemoryReactionRepository, MemoryTagRepository, MemoryUserRepository,
};
pub use state::MemoryState;

/// Transaction factory over shared in-process tables
#[derive(Clone, Default)]
pub struct MemoryDatabase {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryDatabase {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Database for MemoryDatabase {
    async fn begin(&self) -> RepoResult<Box<dyn UnitOfWork>> {
        let guard = Arc::clone(&self.state).lock_owned().await;
        let working = guard.clone();
        Ok(Box::new(MemoryUnitOfWork { guard, working }))
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}

/// Exclusive handle on the store with a private working copy
pub struct MemoryUnitOfWork {
    guard: OwnedMutexGuard<MemoryState>,
    working: MemoryState,
}

#[async_trait]
impl UnitOfWork for MemoryUnitOfWork {
    fn users(&mut self) -> Box<dyn UserRepository + '_> {
        Box::new(MemoryUserRepository {
            state: &mut self.working,
        })
    }

    fn degrees(&mut self) -> Box<dyn DegreeRepository + '_> {
        Box::new(MemoryDegreeRepository {
            state: &mut self.working,
        })
    }

    fn pages(&mut self) -> Box<dyn PageRepository + '_> {
        Box::new(MemoryPageRepository {
            state: &mut self.working,
        })
    }

    fn tags(&mut self) -> Box<dyn TagRepository + '_> {
        Box::new(MemoryTagRepository {
            state: &mut self.working,
        })
    }

    fn publications(&mut self) -> Box<dyn PublicationRepository + '_> {
        Box::new(MemoryPublicationRepository {
            state: &mut self.working,
        })
    }

    fn reactions(&mut self) -> Box<dyn ReactionRepository + '_> {
        Box::new(MemoryReactionRepository {
            state: &mut self.working,
        })
    }

    async fn commit(self: Box<Self>) -> RepoResult<()> {
        let Self { mut guard, working } = *self;
        *guard = working;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> RepoResult<()> {
        Ok(())
    }
}
