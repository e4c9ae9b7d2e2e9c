//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Conversions between DTOs, service inputs and domain entities

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreatePublicationRequest, CreateUserRequest, TagFilterQuery, ToggleReactionRequest,
    UpdatePublicationRequest, UpdateUserRequest,
};

pub use responses::{
    AuthorResponse, DegreeResponse, HealthChecks, HealthResponse, PageResponse, PublicationResponse,
    ReactionStatusResponse, ReadinessResponse, TagResponse, UserProfileResponse, UserResponse,
};

pub use mappers::to_responses;
