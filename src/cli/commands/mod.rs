//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! Each handler validates its arguments, drives the relevant domain
//! modules, and formats output. `--extractcsv` takes precedence over the
//! merge flow.

mod extract;
mod merge;

pub use extract::extract;
pub use merge::{merge, MergeOptions};

use anyhow::Result;

use crate::cli::{Cli, Context};

/// Dispatch the parsed command line to its handler.
pub fn dispatch(cli: Cli, ctx: &Context) -> Result<()> {
    if let Some(input) = cli.extract_csv {
        return extract(ctx, &input, &cli.out_dir.join("csv"));
    }
    merge(
        ctx,
        MergeOptions {
            display_name: cli.name,
            input_dir: cli.input_dir,
            template: cli.template,
            out_dir: cli.out_dir,
        },
    )
}
