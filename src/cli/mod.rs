//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//!
//! The CLI layer is thin: it builds an execution [`Context`] from the
//! flags and dispatches to [`commands`]. All fatal errors bubble up as
//! `anyhow` errors and become a message plus exit code 1 in `main`.

pub mod args;
pub mod commands;

pub use args::Cli;

use anyhow::Result;
use clap::CommandFactory;

use crate::ui::output::Verbosity;

/// Execution context shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub verbosity: Verbosity,
    pub interactive: bool,
    pub json: bool,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`. A bare invocation
/// prints usage and succeeds.
pub fn run() -> Result<()> {
    if std::env::args_os().len() <= 1 {
        Cli::command().print_help()?;
        return Ok(());
    }

    let cli = Cli::parse_args();
    let ctx = Context {
        verbosity: Verbosity::from_flags(cli.quiet, cli.debug),
        interactive: cli.interactive(),
        json: cli.json,
    };
    commands::dispatch(cli, &ctx)
}
