//! Service context - dependency container for services
//!
//! Holds the transaction factory every service operation starts from.

use std::sync::Arc;

use agora_core::traits::{Database, UnitOfWork};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; shared by every request handler.
#[derive(Clone)]
pub struct ServiceContext {
    database: Arc<dyn Database>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(database: Arc<dyn Database>) -> Self {
        Self { database }
    }

    /// Get the transaction factory
    pub fn database(&self) -> &dyn Database {
        self.database.as_ref()
    }

    /// Open a new transaction
    pub async fn begin(&self) -> ServiceResult<Box<dyn UnitOfWork>> {
        Ok(self.database.begin().await?)
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("database", &"dyn Database")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    database: Option<Arc<dyn Database>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn database(mut self, database: Arc<dyn Database>) -> Self {
        self.database = Some(database);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the database is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let database = self
            .database
            .ok_or_else(|| ServiceError::validation("database is required"))?;
        Ok(ServiceContext::new(database))
    }
}
