//! CLI command implementations.

use crate::http_server::{HttpServer, HttpServerConfig};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { host, port } => serve(host, port),
    }
}

/// Boot the HTTP server and block on the serving loop
pub fn serve(host: String, port: u16) -> CliResult<()> {
    let config = HttpServerConfig {
        host,
        port,
        ..Default::default()
    };
    let server = HttpServer::with_config(config);

    let runtime = tokio::runtime::Runtime::new().map_err(|e| CliError::Runtime(e.to_string()))?;

    runtime
        .block_on(server.start())
        .map_err(|e| CliError::Server(e.to_string()))
}
