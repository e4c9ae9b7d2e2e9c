//! Caller identity extractor
//!
//! The upstream authentication layer forwards the caller's user id in the
//! `x-user-id` header.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::response::ApiError;

/// Header carrying the authenticated caller's id
pub const USER_ID_HEADER: &str = "x-user-id";

/// Authenticated caller
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Uuid,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }

    fn from_parts(parts: &Parts) -> Result<Self, ApiError> {
        let value = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or(ApiError::MissingAuth)?;

        let user_id = value
            .to_str()
            .ok()
            .and_then(|s| Uuid::parse_str(s.trim()).ok())
            .ok_or_else(|| {
                tracing::warn!("Malformed {} header", USER_ID_HEADER);
                ApiError::InvalidAuthFormat
            })?;

        Ok(Self::new(user_id))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_parts(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts(header: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header(USER_ID_HEADER, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_valid_header() {
        let id = Uuid::new_v4();
        let auth = AuthUser::from_parts(&parts(Some(&id.to_string()))).unwrap();
        assert_eq!(auth.user_id, id);
    }

    #[test]
    fn test_missing_header() {
        let err = AuthUser::from_parts(&parts(None)).unwrap_err();
        assert!(matches!(err, ApiError::MissingAuth));
    }

    #[test]
    fn test_malformed_header() {
        let err = AuthUser::from_parts(&parts(Some("not-a-uuid"))).unwrap_err();
        assert!(matches!(err, ApiError::InvalidAuthFormat));
    }
}
