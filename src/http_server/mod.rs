//! # HTTP Server Module
//!
//! Axum-based HTTP surface for the book catalog.
//!
//! # Endpoints
//!
//! - `/health` - Liveness check
//! - `/book/` and `/book/:id` - Book CRUD
//! - `/hello/:name` - Greeting (Basic Auth)

pub mod book_routes;
pub mod config;
pub mod hello_routes;
pub mod middleware;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
