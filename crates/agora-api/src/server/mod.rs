//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use agora_common::{AppConfig, AppError};
use agora_db::{create_pool, run_migrations, DatabaseConfig, PgDatabase};
use agora_service::ServiceContextBuilder;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_rate_limit(create_router(), &config.rate_limit);
    let router = api.merge(health_routes());
    let router = apply_middleware(router, &config.cors, config.app.env.is_production());
    router.with_state(state)
}

/// Connect to PostgreSQL, apply migrations when configured, and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config).await.map_err(AppError::database)?;
    info!(
        max_connections = db_config.max_connections,
        "PostgreSQL connection established"
    );

    if let Some(dir) = &config.database.migrations_dir {
        info!(dir = %dir, "Running migrations");
        run_migrations(&pool, dir)
            .await
            .map_err(|e| AppError::Migration(e.to_string()))?;
    }

    let service_context = ServiceContextBuilder::new()
        .database(Arc::new(PgDatabase::new(pool)))
        .build()
        .map_err(AppError::internal)?;

    Ok(AppState::new(service_context, config))
}

/// Bind `addr` and serve `app` until the process is stopped
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: addr.to_string(),
            source,
        })?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await.map_err(AppError::Server)
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();
    let state = create_app_state(config).await?;
    let app = create_app(state);
    run_server(app, &addr).await
}
