//! Business logic services
//!
//! Each operation exists twice: a free function that runs inside a caller's
//! transaction, and a method on a service facade that opens and commits its
//! own.

pub mod aggregation;
pub mod catalog;
pub mod context;
pub mod details;
pub mod error;
pub mod publication;
pub mod reaction;
pub mod user;

#[cfg(test)]
mod testing;

pub use catalog::CatalogService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use publication::PublicationService;
pub use reaction::ReactionService;
pub use user::{NewUser, UserChanges, UserService};
