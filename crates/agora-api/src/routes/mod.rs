//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{catalog, health, publications, reactions, users};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(publication_routes())
        .merge(reaction_routes())
        .merge(user_routes())
        .merge(catalog_routes())
}

/// Publication routes
fn publication_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/publications",
            post(publications::create_publication).get(publications::list_publications),
        )
        .route("/publications/by-page/:page_id", get(publications::list_by_page))
        .route("/publications/by-user/:user_id", get(publications::list_by_user))
        .route("/publications/by-tags", get(publications::list_by_tags))
        .route(
            "/publications/:publication_id",
            get(publications::get_publication)
                .put(publications::update_publication)
                .delete(publications::delete_publication),
        )
        .route(
            "/publications/:publication_id/tags",
            get(publications::list_publication_tags),
        )
}

/// Reaction routes
fn reaction_routes() -> Router<AppState> {
    Router::new()
        .route("/reactions/toggle", post(reactions::toggle_reaction))
        .route(
            "/reactions/:user_id/:publication_id",
            get(reactions::get_reaction),
        )
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::create_user))
        .route(
            "/users/@me",
            get(users::get_current_user)
                .patch(users::update_current_user)
                .delete(users::delete_current_user),
        )
        .route(
            "/users/:user_id/reactions/:kind",
            get(reactions::list_reacted_publications),
        )
}

/// Reference data routes
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/tags", get(catalog::list_tags))
        .route("/pages", get(catalog::list_pages))
        .route("/degrees", get(catalog::list_degrees))
}
