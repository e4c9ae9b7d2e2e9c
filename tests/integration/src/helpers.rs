//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use agora_api::{create_app, create_app_state, AppState};
use agora_common::AppConfig;
use agora_core::traits::Database;
use agora_db::MemoryDatabase;
use agora_service::ServiceContext;
use anyhow::Result;
use axum::Router;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Header carrying the caller's user id
pub const USER_ID_HEADER: &str = "x-user-id";

/// Reference rows every in-memory server starts with
#[derive(Debug, Clone)]
pub struct Seed {
    pub degree_id: i32,
    pub page_id: i32,
    pub tag_ids: Vec<i32>,
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub seed: Option<Seed>,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server over a freshly seeded in-memory store
    pub async fn start() -> Result<Self> {
        let db = MemoryDatabase::new();
        let seed = seed_catalog(&db).await?;

        let state = AppState::new(ServiceContext::new(Arc::new(db)), memory_config()?);
        let mut server = Self::serve(create_app(state)).await?;
        server.seed = Some(seed);
        Ok(server)
    }

    /// Start a server against the PostgreSQL database from the environment
    pub async fn start_postgres() -> Result<Self> {
        let config = test_config()?;
        let state = create_app_state(config).await?;
        Self::serve(create_app(state)).await
    }

    async fn serve(app: Router) -> Result<Self> {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            seed: None,
            _handle: handle,
        })
    }

    /// Seed rows of an in-memory server
    ///
    /// # Panics
    /// When called on a PostgreSQL-backed server
    pub fn seed(&self) -> &Seed {
        self.seed.as_ref().expect("in-memory server")
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    fn as_user(builder: RequestBuilder, user_id: Uuid) -> RequestBuilder {
        builder.header(USER_ID_HEADER, user_id.to_string())
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request as a user
    pub async fn get_as(&self, path: &str, user_id: Uuid) -> Result<Response> {
        Ok(Self::as_user(self.client.get(self.url(path)), user_id)
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a POST request with JSON body as a user
    pub async fn post_as<T: Serialize>(&self, path: &str, user_id: Uuid, body: &T) -> Result<Response> {
        Ok(Self::as_user(self.client.post(self.url(path)), user_id)
            .json(body)
            .send()
            .await?)
    }

    /// Make a PUT request as a user
    pub async fn put_as<T: Serialize>(&self, path: &str, user_id: Uuid, body: &T) -> Result<Response> {
        Ok(Self::as_user(self.client.put(self.url(path)), user_id)
            .json(body)
            .send()
            .await?)
    }

    /// Make a PATCH request as a user
    pub async fn patch_as<T: Serialize>(
        &self,
        path: &str,
        user_id: Uuid,
        body: &T,
    ) -> Result<Response> {
        Ok(Self::as_user(self.client.patch(self.url(path)), user_id)
            .json(body)
            .send()
            .await?)
    }

    /// Make a DELETE request as a user
    pub async fn delete_as(&self, path: &str, user_id: Uuid) -> Result<Response> {
        Ok(Self::as_user(self.client.delete(self.url(path)), user_id)
            .send()
            .await?)
    }
}

async fn seed_catalog(db: &MemoryDatabase) -> Result<Seed> {
    let mut tx = db.begin().await?;
    let degree_id = tx.degrees().create("Physics").await?.id;
    let page_id = tx.pages().create("https://agora.test/physics").await?.id;
    let mut tag_ids = Vec::new();
    for title in ["optics", "mechanics", "thermodynamics"] {
        tag_ids.push(tx.tags().create(Some(title), None).await?.id);
    }
    tx.commit().await?;

    Ok(Seed {
        degree_id,
        page_id,
        tag_ids,
    })
}

/// Configuration for in-memory servers; nothing is read from the environment
pub fn memory_config() -> Result<AppConfig> {
    let config = AppConfig::from_lookup(|key| match key {
        "API_PORT" => Some("0".to_string()),
        "DATABASE_URL" => Some("postgres://unused".to_string()),
        "RATE_LIMIT_REQUESTS_PER_SECOND" => Some("1000".to_string()),
        "RATE_LIMIT_BURST" => Some("1000".to_string()),
        _ => None,
    })?;
    Ok(config)
}

/// Configuration from the environment (and `.env`)
pub fn test_config() -> Result<AppConfig> {
    AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))
}

/// Helper to check if a PostgreSQL test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }
    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
