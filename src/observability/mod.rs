//! # Observability
//!
//! Structured logging for the HTTP service:
//! - JSON lines, one event per line
//! - Deterministic key ordering
//! - Synchronous, no buffering

mod logger;

pub use logger::{Logger, Severity};
