//! # agora-core
//!
//! Domain layer containing entities, the reaction state machine, and the store ports
//! (`Database`, `UnitOfWork`, repository traits).
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    AnnotatedPublication, AuthorSummary, Degree, NewPublication, Page, Publication,
    PublicationChanges, PublicationDetails, Reaction, ReactionCounts, ReactionKind,
    ReactionKindParseError, ReactionStatus, Tag, ToggleAction, User, UserProfile,
    normalize_tag_ids,
};
pub use error::DomainError;
pub use traits::{
    Database, DegreeRepository, PageRepository, PublicationRepository, ReactionRepository,
    RepoResult, TagRepository, UnitOfWork, UserRepository,
};
