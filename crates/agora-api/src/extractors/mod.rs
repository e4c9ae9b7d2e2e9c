//! Axum extractors for request handling
//!
//! Custom extractors for caller identity, path parsing, tag filters and
//! body validation.

mod auth;
mod path;
mod query;
mod validated;

pub use auth::{AuthUser, USER_ID_HEADER};
pub use path::ParsedPath;
pub use query::TagFilter;
pub use validated::ValidatedJson;
