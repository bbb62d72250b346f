//! # CLI Errors
//!
//! Error types for CLI commands. All CLI errors are fatal: the process
//! reports them and exits non-zero.

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// The async runtime could not be created
    #[error("runtime error: {0}")]
    Runtime(String),

    /// The listening socket could not be bound or the server failed
    #[error("server error: {0}")]
    Server(String),
}
