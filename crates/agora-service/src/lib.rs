//! # agora-service
//!
//! Application layer: the reaction engine, count aggregation, the
//! publication lifecycle, user accounts and the reference-data catalog,
//! plus the request/response DTOs used by the HTTP layer.

pub mod dto;
pub mod services;

pub use services::{
    CatalogService, NewUser, PublicationService, ReactionService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UserChanges, UserService,
};
