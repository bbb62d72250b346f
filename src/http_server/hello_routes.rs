//! Hello HTTP Routes
//!
//! A single greeting endpoint guarded by the Basic Auth gate.

use axum::{
    extract::Path,
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};

use super::middleware::basic_auth;
use crate::api::Envelope;

/// Create hello routes (Basic Auth required)
pub fn hello_routes() -> Router {
    Router::new()
        .route("/hello/:name", get(hello_handler))
        .route_layer(middleware::from_fn(basic_auth))
}

/// Greeting handler
async fn hello_handler(Path(name): Path<String>) -> (StatusCode, Json<Envelope>) {
    let greeting = format!("hello {}. Glad to see you again", name);
    (StatusCode::OK, Json(Envelope::message(greeting)))
}
