//! Entity to model mappers
//!
//! This module provides conversions between domain entities (agora-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `TryFrom` where a column holds a constrained value (reaction kind)

mod catalog;
mod publication;
mod reaction;
mod user;

pub use reaction::counts_from_models;
