//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in agora-core.
//! Every repository borrows the connection of one open transaction; obtain them
//! through [`PgDatabase::begin`](agora_core::traits::Database::begin).

mod catalog;
mod error;
mod publication;
mod reaction;
mod unit_of_work;
mod user;

pub use catalog::{PgDegreeRepository, PgPageRepository, PgTagRepository};
pub use error::{map_db_error, map_unique_violation};
pub use publication::PgPublicationRepository;
pub use reaction::PgReactionRepository;
pub use unit_of_work::{PgDatabase, PgUnitOfWork};
pub use user::PgUserRepository;
