//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Modes
//!
//! The tool has two modes. `--extractcsv` switches to tabular export and
//! takes precedence; everything else is the merge flow. Invoking with no
//! arguments at all prints usage and exits successfully, which is handled
//! in [`crate::cli::run`] before clap sees the empty argument list.

use clap::Parser;
use std::path::PathBuf;

/// Merge Advanced Output lighting exports and plan DMX channel ranges.
#[derive(Parser, Debug)]
#[command(name = "aomerge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Display name substituted into the merged document; whitespace runs
    /// become underscores for the output file name
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Extract fixture pixel centers from one document to CSV instead of merging
    #[arg(long = "extractcsv", value_name = "FILE")]
    pub extract_csv: Option<PathBuf>,

    /// Directory holding the Advanced Output exports to merge
    #[arg(long, value_name = "DIR", default_value = "AOFiles")]
    pub input_dir: PathBuf,

    /// Template document carrying the [NAME] and [SCREENS] placeholders
    #[arg(long, value_name = "FILE", default_value = "template.xml")]
    pub template: PathBuf,

    /// Root directory for generated files (xml/ and csv/ subdirectories)
    #[arg(long, value_name = "DIR", default_value = "output")]
    pub out_dir: PathBuf,

    /// Print the allocation report as JSON
    #[arg(long)]
    pub json: bool,

    /// Minimal output; implies --no-interactive
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Disable prompts: select every screen and accept every suggested channel
    #[arg(long)]
    pub no_interactive: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Determine if interactive prompts are enabled.
    pub fn interactive(&self) -> bool {
        !(self.no_interactive || self.quiet)
    }
}
