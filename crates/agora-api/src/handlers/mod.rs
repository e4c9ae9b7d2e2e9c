//! HTTP request handlers
//!
//! Handlers are thin: extract, call the service, map to a response DTO.

pub mod catalog;
pub mod health;
pub mod publications;
pub mod reactions;
pub mod users;
