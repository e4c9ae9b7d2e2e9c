//! Catalog service
//!
//! Read-only access to reference data: tags, pages and degrees.

use agora_core::entities::{Degree, Page, Tag};
use tracing::instrument;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Catalog service
pub struct CatalogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CatalogService<'a> {
    /// Create a new CatalogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list_tags(&self) -> ServiceResult<Vec<Tag>> {
        let mut tx = self.ctx.begin().await?;
        let tags = tx.tags().find_all().await?;
        Ok(tags)
    }

    #[instrument(skip(self))]
    pub async fn list_pages(&self) -> ServiceResult<Vec<Page>> {
        let mut tx = self.ctx.begin().await?;
        let pages = tx.pages().find_all().await?;
        Ok(pages)
    }

    #[instrument(skip(self))]
    pub async fn list_degrees(&self) -> ServiceResult<Vec<Degree>> {
        let mut tx = self.ctx.begin().await?;
        let degrees = tx.degrees().find_all().await?;
        Ok(degrees)
    }
}
