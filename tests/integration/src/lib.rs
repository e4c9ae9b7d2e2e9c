//! Integration test utilities for the Agora API
//!
//! Spawns the real router on an ephemeral port and drives it over HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
