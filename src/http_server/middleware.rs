//! Request middleware.
//!
//! Two independent wrappers:
//! - a logging layer that records method and remote origin on every
//!   request, then always delegates;
//! - a Basic Auth gate checking one hardcoded credential pair. The pair
//!   is a fixture (`test`/`test`) compared with plain string equality;
//!   it is not a credential subsystem and must not be treated as one.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::api::Envelope;
use crate::observability::Logger;

/// The single accepted credential pair
const BASIC_AUTH_USER: &str = "test";
const BASIC_AUTH_PASSWORD: &str = "test";

/// Log method and remote origin, then delegate unconditionally
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let remote = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    Logger::info(
        "http_request",
        &[("method", &method), ("path", &path), ("remote", &remote)],
    );

    next.run(request).await
}

/// Reject with 401 unless the request carries the fixture credentials
pub async fn basic_auth(request: Request, next: Next) -> Response {
    let header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    if !authorized(header) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(Envelope::error("authorization failed")),
        )
            .into_response();
    }

    next.run(request).await
}

/// Validate an `Authorization: Basic base64(user:pass)` header value
///
/// Fails when the header is missing, the scheme is not `Basic`, the
/// payload is not valid base64, the decoded payload has no `:`
/// separator, or the pair is not the fixture credentials.
fn authorized(header: Option<&str>) -> bool {
    let header = match header {
        Some(value) => value,
        None => return false,
    };

    let (scheme, payload) = match header.split_once(' ') {
        Some(parts) => parts,
        None => return false,
    };
    if scheme != "Basic" {
        return false;
    }

    let decoded = match STANDARD.decode(payload) {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };
    let decoded = match String::from_utf8(decoded) {
        Ok(text) => text,
        Err(_) => return false,
    };

    match decoded.split_once(':') {
        Some((user, password)) => user == BASIC_AUTH_USER && password == BASIC_AUTH_PASSWORD,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(pair: &str) -> String {
        format!("Basic {}", STANDARD.encode(pair))
    }

    #[test]
    fn test_missing_header_rejected() {
        assert!(!authorized(None));
    }

    #[test]
    fn test_wrong_scheme_rejected() {
        let token = STANDARD.encode("test:test");
        assert!(!authorized(Some(&format!("Bearer {}", token))));
    }

    #[test]
    fn test_header_without_payload_rejected() {
        assert!(!authorized(Some("Basic")));
    }

    #[test]
    fn test_invalid_base64_rejected() {
        assert!(!authorized(Some("Basic !!!not-base64!!!")));
    }

    #[test]
    fn test_payload_without_colon_rejected() {
        let token = STANDARD.encode("testtest");
        assert!(!authorized(Some(&format!("Basic {}", token))));
    }

    #[test]
    fn test_wrong_credentials_rejected() {
        assert!(!authorized(Some(&encode("test:wrong"))));
        assert!(!authorized(Some(&encode("wrong:test"))));
        assert!(!authorized(Some(&encode("admin:admin"))));
    }

    #[test]
    fn test_fixture_credentials_accepted() {
        assert!(authorized(Some(&encode("test:test"))));
    }
}
