//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{http::StatusCode, middleware, routing::get, Json, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use super::book_routes::{book_routes, BookState};
use super::config::HttpServerConfig;
use super::hello_routes::hello_routes;
use super::middleware::log_requests;
use crate::api::Envelope;
use crate::observability::Logger;

/// HTTP server for the book catalog
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        let router = Self::build_router(&config);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig) -> Router {
        let book_state = Arc::new(BookState::new());

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/health", get(health_handler))
            .merge(book_routes(book_state))
            .merge(hello_routes())
            .layer(cors)
            // Outermost: every request is logged, auth outcomes included
            .layer(middleware::from_fn(log_requests))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    ///
    /// A failed bind is the only fatal startup error.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("{}", e)))?;

        let listener = TcpListener::bind(addr).await?;
        Logger::info("server_started", &[("addr", &addr.to_string())]);

        axum::serve(
            listener,
            self.router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Liveness check
async fn health_handler() -> (StatusCode, Json<Envelope>) {
    (StatusCode::OK, Json(Envelope::message("ok")))
}
