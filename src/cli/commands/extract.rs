//! extractcsv command - Export fixture pixel centers to CSV
//!
//! Reads a single document and writes one CSV per screen. A document
//! without any screens is an error in this mode, unlike in the merge
//! flow where it just contributes nothing.

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::screen::Screen;
use crate::csv;
use crate::doc;

/// Extract pixel centers from `input` into per-screen CSV files.
pub fn extract(ctx: &Context, input: &Path, out_dir: &Path) -> Result<()> {
    let root = doc::parse_file(input)
        .with_context(|| format!("failed to parse {}", input.display()))?;
    let source_file = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let screens: Vec<Screen> = root
        .descend(&["ScreenSetup", "screens"])
        .map(|section| {
            section
                .children_named("DmxScreen")
                .filter_map(|el| Screen::from_element(el.clone(), &source_file))
                .collect()
        })
        .unwrap_or_default();

    csv::export_screens(&screens, input, out_dir, ctx.verbosity)?;
    Ok(())
}
