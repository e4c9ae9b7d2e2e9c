//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Publication not found: {0}")]
    PublicationNotFound(Uuid),

    #[error("Page not found: {0}")]
    PageNotFound(i32),

    #[error("Degree not found: {0}")]
    DegreeNotFound(i32),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unknown tag ids: {0:?}")]
    InvalidTags(Vec<i32>),

    #[error("Referenced user does not exist: {0}")]
    UnknownUser(Uuid),

    #[error("Referenced publication does not exist: {0}")]
    UnknownPublication(Uuid),

    #[error("Referenced page does not exist: {0}")]
    UnknownPage(i32),

    #[error("Referenced degree does not exist: {0}")]
    UnknownDegree(i32),

    #[error("At least one tag id is required")]
    EmptyTagFilter,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not publication owner")]
    NotPublicationOwner,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PublicationNotFound(_) => "UNKNOWN_PUBLICATION",
            Self::PageNotFound(_) => "UNKNOWN_PAGE",
            Self::DegreeNotFound(_) => "UNKNOWN_DEGREE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidTags(_) => "INVALID_TAGS",
            Self::UnknownUser(_) => "UNKNOWN_USER",
            Self::UnknownPublication(_) => "UNKNOWN_PUBLICATION",
            Self::UnknownPage(_) => "UNKNOWN_PAGE",
            Self::UnknownDegree(_) => "UNKNOWN_DEGREE",
            Self::EmptyTagFilter => "EMPTY_TAG_FILTER",

            // Authorization
            Self::NotPublicationOwner => "NOT_PUBLICATION_OWNER",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::ConstraintViolation(_) => "CONSTRAINT_VIOLATION",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::PublicationNotFound(_)
                | Self::PageNotFound(_)
                | Self::DegreeNotFound(_)
        )
    }

    /// Check if this is a validation error
    ///
    /// References to missing rows inside a request body are validation failures,
    /// not lookups, so they land here rather than in [`Self::is_not_found`].
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidTags(_)
                | Self::UnknownUser(_)
                | Self::UnknownPublication(_)
                | Self::UnknownPage(_)
                | Self::UnknownDegree(_)
                | Self::EmptyTagFilter
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotPublicationOwner)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists | Self::ConstraintViolation(_))
    }
}
