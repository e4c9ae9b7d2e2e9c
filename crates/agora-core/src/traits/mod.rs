//! Store ports implemented by the infrastructure layer

mod repositories;

pub use repositories::{
    Database, DegreeRepository, PageRepository, PublicationRepository, ReactionRepository,
    RepoResult, TagRepository, UnitOfWork, UserRepository,
};
