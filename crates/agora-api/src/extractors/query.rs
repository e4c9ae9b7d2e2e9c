//! Tag filter extractor
//!
//! Reads repeated `tag_ids` query keys (`?tag_ids=1&tag_ids=2`).

use agora_service::dto::TagFilterQuery;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::Query;

use crate::response::ApiError;

/// Tag ids requested by the caller, in request order
#[derive(Debug, Clone, Default)]
pub struct TagFilter(pub Vec<i32>);

#[async_trait]
impl<S> FromRequestParts<S> for TagFilter
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<TagFilterQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(TagFilter(query.tag_ids))
    }
}
