//! CLI module for bookrack
//!
//! Provides the command-line interface:
//! - serve: bind the listening socket and enter the serving loop

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run_command, serve};
pub use errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}
