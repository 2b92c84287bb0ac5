//! API server implementation.
//!
//! Provides health, ready, and API endpoints for the Ludo catalog.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use ludo_catalog::{CatalogReader, CatalogStore, MemoryStore, SeedData, reset_and_load};
use ludo_core::Result;

use crate::config::{Config, CorsConfig};

/// Health check response.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
}

/// Readiness check response.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ReadyResponse {
    /// Service readiness status.
    pub ready: bool,
    /// Optional message about readiness state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Shared application state for all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Config,
    /// Catalog store holding components and steps.
    store: Arc<dyn CatalogStore>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("store", &"<CatalogStore>")
            .finish()
    }
}

impl AppState {
    /// Creates new application state with the given catalog store.
    #[must_use]
    pub fn new(config: Config, store: Arc<dyn CatalogStore>) -> Self {
        Self { config, store }
    }

    /// Returns a read-only view of the catalog.
    #[must_use]
    pub fn reader(&self) -> CatalogReader {
        CatalogReader::new(Arc::clone(&self.store))
    }
}

/// Health check endpoint handler.
///
/// Returns 200 OK if the service is alive. This is a shallow check
/// that doesn't verify dependencies.
async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Readiness check endpoint handler.
///
/// Returns 200 OK if the service is ready to accept requests.
/// Pings the catalog store to verify connectivity.
async fn ready(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadyResponse {
                ready: true,
                message: None,
            }),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyResponse {
                ready: false,
                message: Some(format!("store check failed: {e}")),
            }),
        ),
    }
}

/// Serves the generated `OpenAPI` document.
async fn serve_openapi() -> impl IntoResponse {
    Json(crate::openapi::openapi())
}

/// The Ludo API server.
pub struct Server {
    config: Config,
    store: Arc<dyn CatalogStore>,
}

impl std::fmt::Debug for Server {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Server")
            .field("config", &self.config)
            .field("store", &"<CatalogStore>")
            .finish()
    }
}

impl Server {
    /// Creates a new server with the given configuration.
    ///
    /// Defaults to an in-memory store; use `with_store` for production.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            store: Arc::new(MemoryStore::new()),
        }
    }

    /// Creates a new server with an explicit catalog store.
    #[must_use]
    pub fn with_store(config: Config, store: Arc<dyn CatalogStore>) -> Self {
        Self { config, store }
    }

    /// Creates a new `ServerBuilder`.
    #[must_use]
    pub fn builder() -> ServerBuilder {
        ServerBuilder::new()
    }

    /// Returns the server configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Creates the router with all routes and middleware.
    fn create_router(&self) -> Router {
        let state = Arc::new(AppState::new(self.config.clone(), Arc::clone(&self.store)));

        let cors = self.build_cors_layer();
        let metrics_layer = middleware::from_fn(crate::metrics::metrics_middleware);

        Router::new()
            // Health, ready, metrics, and OpenAPI endpoints
            .route("/health", get(health))
            .route("/ready", get(ready))
            .route("/metrics", get(crate::metrics::serve_metrics))
            .route("/openapi.json", get(serve_openapi))
            // API routes
            .nest("/api/v1", crate::routes::api_v1_routes())
            // Middleware (order matters): metrics outermost for timing, then trace, then CORS.
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .layer(metrics_layer)
            .with_state(state)
    }

    /// Builds the CORS layer from configuration.
    ///
    /// Credentials are always allowed, so the wildcard origin cannot use the
    /// literal `*` header value; it reflects the request origin instead.
    fn build_cors_layer(&self) -> CorsLayer {
        let cors_config = &self.config.cors;
        let cors = CorsLayer::new()
            .allow_methods([
                Method::GET,
                Method::HEAD,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([
                header::AUTHORIZATION,
                header::CONTENT_TYPE,
                header::ACCEPT,
            ])
            .allow_credentials(true)
            .max_age(Duration::from_secs(cors_config.max_age_seconds));

        if Self::cors_allows_any_origin(cors_config) {
            return cors.allow_origin(AllowOrigin::mirror_request());
        }

        let allowed = Self::parse_cors_origins(cors_config);
        if allowed.is_empty() {
            tracing::warn!("No valid CORS origins configured; cross-origin requests disabled");
            cors
        } else {
            tracing::info!(origins = ?cors_config.allowed_origins, "CORS configured");
            cors.allow_origin(AllowOrigin::list(allowed))
        }
    }

    fn cors_allows_any_origin(cors_config: &CorsConfig) -> bool {
        cors_config
            .allowed_origins
            .iter()
            .any(|origin| origin == "*")
    }

    fn parse_cors_origins(cors_config: &CorsConfig) -> Vec<HeaderValue> {
        let mut allowed = Vec::new();
        for origin in &cors_config.allowed_origins {
            match HeaderValue::from_str(origin) {
                Ok(value) => allowed.push(value),
                Err(_) => {
                    tracing::error!(
                        origin = %origin,
                        "Invalid CORS origin; expected a valid HeaderValue"
                    );
                }
            }
        }
        allowed
    }

    /// Rebuilds the catalog from the seed data set.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed set fails validation or the store
    /// rejects the writes. Callers must treat this as fatal.
    pub async fn seed(&self) -> Result<()> {
        reset_and_load(self.store.as_ref(), SeedData::load()?).await
    }

    /// Seeds the catalog, then starts the server and blocks until shutdown.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid, seeding fails, or the
    /// server cannot bind to the port.
    pub async fn serve(&self) -> Result<()> {
        self.validate_config()?;

        crate::metrics::init_metrics();

        self.seed().await?;

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let router = self.create_router();

        tracing::info!(http_port = self.config.http_port, "Starting Ludo API server");

        let listener =
            tokio::net::TcpListener::bind(addr)
                .await
                .map_err(|e| ludo_core::Error::Internal {
                    message: format!("failed to bind to {addr}: {e}"),
                })?;

        axum::serve(listener, router)
            .await
            .map_err(|e| ludo_core::Error::Internal {
                message: format!("server error: {e}"),
            })?;

        Ok(())
    }

    /// Creates a test router for the server.
    ///
    /// This is useful for integration tests where you want to test
    /// the routes without actually binding to a port.
    ///
    /// # Note
    ///
    /// This method is intended for testing only. It creates a router
    /// using this server's configured store (default: in-memory).
    #[doc(hidden)]
    #[must_use]
    pub fn test_router(&self) -> Router {
        self.create_router()
    }

    fn validate_config(&self) -> Result<()> {
        if !self.config.debug
            && (self.config.mongo_url.is_none() || self.config.db_name.is_none())
        {
            return Err(ludo_core::Error::InvalidInput(
                "mongo_url and db_name are required when debug=false".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for constructing a server.
pub struct ServerBuilder {
    config: Config,
    store: Arc<dyn CatalogStore>,
}

impl std::fmt::Debug for ServerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerBuilder")
            .field("config", &self.config)
            .field("store", &"<CatalogStore>")
            .finish()
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self {
            config: Config::default(),
            store: Arc::new(MemoryStore::new()),
        }
    }
}

impl ServerBuilder {
    /// Creates a new server builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the HTTP port.
    #[must_use]
    pub fn http_port(mut self, port: u16) -> Self {
        self.config.http_port = port;
        self
    }

    /// Enables debug mode.
    ///
    /// See `Config::debug` for behavior changes (in-memory store fallback,
    /// pretty logs).
    #[must_use]
    pub fn debug(mut self, enabled: bool) -> Self {
        self.config.debug = enabled;
        self
    }

    /// Sets the catalog store used by request handlers.
    ///
    /// By default, the server uses an in-memory store intended only for
    /// tests/dev.
    #[must_use]
    pub fn store(mut self, store: Arc<dyn CatalogStore>) -> Self {
        self.store = store;
        self
    }

    /// Builds the server.
    #[must_use]
    pub fn build(self) -> Server {
        Server {
            config: self.config,
            store: self.store,
        }
    }
}
