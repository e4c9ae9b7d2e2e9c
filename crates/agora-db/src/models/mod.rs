//! Database models - SQLx-compatible structs for PostgreSQL tables

mod catalog;
mod publication;
mod reaction;
mod user;

pub use catalog::{DegreeModel, PageModel, TagModel};
pub use publication::PublicationModel;
pub use reaction::{ReactionCountModel, ReactionModel};
pub use user::UserModel;
