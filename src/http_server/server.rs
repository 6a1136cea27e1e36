//! # HTTP Server
//!
//! Serves the conversion API under `/api`.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::config::HttpServerConfig;
use super::convert_routes::{ConvertState, convert_routes};
use crate::config::AppConfig;

/// HTTP server for the lunar birthday API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: AppConfig) -> Self {
        let state = Arc::new(ConvertState::new(config.projection));
        Self::with_state(config.server, state)
    }

    /// Create a server around prepared route state
    pub fn with_state(config: HttpServerConfig, state: Arc<ConvertState>) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    fn build_router(config: &HttpServerConfig, state: Arc<ConvertState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(config.allowed_origins()))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .nest("/api", convert_routes(state))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.bind_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<()> {
        let addr: SocketAddr = self
            .config
            .bind_addr()
            .parse()
            .with_context(|| format!("invalid socket address: {}", self.config.bind_addr()))?;

        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        info!(%addr, "lunar birthday API listening");
        info!("convert: POST http://{addr}/api/convert");

        axum::serve(listener, self.router)
            .await
            .context("HTTP server terminated")?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}
