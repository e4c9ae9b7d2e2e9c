//! Domain entities - core business objects

mod catalog;
mod publication;
mod reaction;
mod user;

pub use catalog::{Degree, Page, Tag};
pub use publication::{
    normalize_tag_ids, AnnotatedPublication, NewPublication, Publication, PublicationChanges,
    PublicationDetails,
};
pub use reaction::{
    Reaction, ReactionCounts, ReactionKind, ReactionKindParseError, ReactionStatus, ToggleAction,
};
pub use user::{AuthorSummary, User, UserProfile};
