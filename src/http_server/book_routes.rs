//! Book HTTP Routes
//!
//! CRUD endpoints for the book resource.
//!
//! Dispatch is keyed on method alone, mirroring the wire protocol:
//! GET reads (item when an identifier is present, otherwise the
//! collection), POST creates, PUT updates, DELETE deletes, and any
//! other method falls through with an empty 200 rather than a 405.
//!
//! Response shapes are asymmetric by protocol design: create and
//! delete cascade to the full-list view, update returns only the
//! updated entity.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};

use crate::api::Envelope;
use crate::store::{Book, BookStore, StoreError};

// ==================
// Shared State
// ==================

/// Book state shared across handlers
pub struct BookState {
    pub store: BookStore,
}

impl BookState {
    pub fn new() -> Self {
        Self {
            store: BookStore::new(),
        }
    }
}

impl Default for BookState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Book Routes
// ==================

/// Create book routes
pub fn book_routes(state: Arc<BookState>) -> Router {
    Router::new()
        .route("/book/", any(collection_handler))
        .route("/book/:id", any(item_handler))
        .with_state(state)
}

/// `/book/` with no identifier; the identifier is the empty string
async fn collection_handler(
    State(state): State<Arc<BookState>>,
    method: Method,
    body: Bytes,
) -> Response {
    dispatch(&state, method, String::new(), body)
}

/// `/book/:id`; the identifier is the path segment after the prefix
async fn item_handler(
    State(state): State<Arc<BookState>>,
    method: Method,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    dispatch(&state, method, id, body)
}

/// Single method-keyed dispatcher shared by both path shapes
fn dispatch(state: &BookState, method: Method, id: String, body: Bytes) -> Response {
    match method {
        Method::GET if id.is_empty() => handle_list(state),
        Method::GET => handle_get(state, &id),
        Method::POST => handle_create(state, &body),
        Method::PUT => handle_update(state, id, &body),
        Method::DELETE => handle_delete(state, &id),
        // No 405: unrecognized methods are silently ignored
        _ => StatusCode::OK.into_response(),
    }
}

// ==================
// Handlers
// ==================

/// GET collection: 200 with the full list in insertion order
fn handle_list(state: &BookState) -> Response {
    match state.store.list() {
        Ok(books) => (StatusCode::OK, Json(Envelope::message(books))).into_response(),
        Err(e) => store_failure(e),
    }
}

/// GET item: 200 with the entity, or 404 when absent
fn handle_get(state: &BookState, id: &str) -> Response {
    match state.store.find_by_id(id) {
        Ok(Some(book)) => (StatusCode::OK, Json(Envelope::message(book))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(Envelope::error(StoreError::NotFound(id.to_string()).to_string())),
        )
            .into_response(),
        Err(e) => store_failure(e),
    }
}

/// POST: decode the body, add, then cascade to the full-list view
fn handle_create(state: &BookState, body: &Bytes) -> Response {
    let book: Book = match serde_json::from_slice(body) {
        Ok(book) => book,
        Err(e) => return bad_request(e.to_string()),
    };

    match state.store.add(book) {
        Ok(()) => handle_list(state),
        Err(e @ StoreError::DuplicateId(_)) => bad_request(e.to_string()),
        Err(e) => store_failure(e),
    }
}

/// PUT: decode the body, let the path identifier win, replace in place
///
/// Returns only the updated entity, not the list.
fn handle_update(state: &BookState, id: String, body: &Bytes) -> Response {
    let mut book: Book = match serde_json::from_slice(body) {
        Ok(book) => book,
        Err(e) => return bad_request(e.to_string()),
    };
    book.id = id;

    match state.store.update(book.clone()) {
        Ok(()) => (StatusCode::OK, Json(Envelope::message(book))).into_response(),
        Err(e @ StoreError::NotFound(_)) => bad_request(e.to_string()),
        Err(e) => store_failure(e),
    }
}

/// DELETE: remove, then cascade to the full-list view
fn handle_delete(state: &BookState, id: &str) -> Response {
    match state.store.delete(id) {
        Ok(()) => handle_list(state),
        Err(e @ StoreError::NotFound(_)) => bad_request(e.to_string()),
        Err(e) => store_failure(e),
    }
}

fn bad_request(error: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(Envelope::error(error))).into_response()
}

/// Lock poisoning is the only store failure outside the 4xx taxonomy
fn store_failure(error: StoreError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(Envelope::error(error.to_string())),
    )
        .into_response()
}
