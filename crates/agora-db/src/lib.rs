//! # agora-db
//!
//! Database layer implementing the store ports of `agora-core`.
//!
//! ## Overview
//!
//! - Connection pool management and migrations (`pool`)
//! - Database models with SQLx `FromRow` derives (`models`)
//! - Entity ↔ Model mappers (`mappers`)
//! - PostgreSQL repositories bound to one transaction, handed out by
//!   [`PgDatabase`] (`repositories`)
//! - An in-memory store with the same transactional behaviour (`memory`)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use agora_core::traits::Database;
//! use agora_db::{create_pool, DatabaseConfig, PgDatabase};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     let db = PgDatabase::new(pool);
//!
//!     let mut tx = db.begin().await?;
//!     let tags = tx.tags().find_all().await?;
//!     tx.commit().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::MemoryDatabase;
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgDatabase, PgDegreeRepository, PgPageRepository, PgPublicationRepository,
    PgReactionRepository, PgTagRepository, PgUnitOfWork, PgUserRepository,
};
