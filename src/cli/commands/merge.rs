//! merge command - Combine exports into one document with fresh channels
//!
//! The default mode. Loads every export, deduplicates screens by name,
//! lets the operator pick a subset and a start channel per screen, then
//! renders the template with the re-addressed screens.

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::allocator::{
    AcceptDefaults, Allocator, ChannelAllocation, ChannelPrompt, ScreenAssignment,
};
use crate::core::screen::Screen;
use crate::repository::ScreenRepository;
use crate::template;
use crate::ui::output;
use crate::ui::prompts::{ScreenSelector, StdinChannelPrompt, StdinSelector};

/// Arguments for one merge run.
#[derive(Debug)]
pub struct MergeOptions {
    /// `--name` value; `None` falls back to "New File" / `new.xml`.
    pub display_name: Option<String>,
    pub input_dir: PathBuf,
    pub template: PathBuf,
    pub out_dir: PathBuf,
}

/// Merge exports from the input directory into one rendered document.
///
/// Selecting no screens (explicitly or by an all-invalid expression) is
/// a successful no-op: nothing is allocated and no file is written.
pub fn merge(ctx: &Context, opts: MergeOptions) -> Result<()> {
    let (display_name, base) = match opts.display_name {
        Some(name) => {
            let base = template::base_name(&name);
            (name, base)
        }
        None => ("New File".to_string(), "new".to_string()),
    };
    let out_path = opts.out_dir.join("xml").join(format!("{}.xml", base));

    // Refuse early, before the operator invests in prompts. The write
    // itself re-checks.
    if out_path.exists() {
        anyhow::bail!(
            "output file {} already exists, choose a different name",
            out_path.display()
        );
    }

    let screens = ScreenRepository::load_all(&opts.input_dir, ctx.verbosity)
        .context("failed to load Advanced Output documents")?;

    output::print(
        format_args!("Discovered {} screen(s):", screens.len()),
        ctx.verbosity,
    );
    for (i, screen) in screens.iter().enumerate() {
        output::print(
            format_args!(
                "  {}. {} ({} fixtures, {} channels) [{}]",
                i + 1,
                screen.name,
                screen.fixtures.len(),
                screen.total_footprint(),
                screen.source_file
            ),
            ctx.verbosity,
        );
    }

    let selected = select_screens(ctx, &screens)?;
    if selected.is_empty() {
        output::print("No screens selected, nothing to write.", ctx.verbosity);
        return Ok(());
    }

    let mut allocator = Allocator::new();
    let mut stdin_prompt = StdinChannelPrompt {
        verbosity: ctx.verbosity,
    };
    let mut accept = AcceptDefaults;
    let prompt: &mut dyn ChannelPrompt = if ctx.interactive {
        &mut stdin_prompt
    } else {
        &mut accept
    };
    let (assignments, allocation) = allocator
        .allocate(&selected, prompt)
        .context("channel allocation aborted")?;

    let screens_xml = selected
        .iter()
        .zip(&assignments)
        .map(|(screen, assignment)| screen.with_assignment(assignment).to_xml())
        .collect::<Vec<_>>()
        .join("\n");

    let content = template::render(&opts.template, &display_name, &screens_xml)?;
    template::write_output(&out_path, &content)?;

    report(ctx, &assignments, &allocation)?;
    output::print(
        format_args!("New XML generated at: {}", out_path.display()),
        ctx.verbosity,
    );
    Ok(())
}

/// Pick the screens to merge, in ascending discovery order.
fn select_screens(ctx: &Context, screens: &[Screen]) -> Result<Vec<Screen>> {
    if !ctx.interactive {
        return Ok(screens.to_vec());
    }
    let mut selector = StdinSelector {
        verbosity: ctx.verbosity,
    };
    let selection = selector.select(screens)?;
    Ok(selection.iter().map(|i| screens[i].clone()).collect())
}

/// Print the per-screen channel ranges, as text or JSON.
///
/// The text report reads ranges from the allocation mapping keyed by
/// screen id; the assignments supply the names.
fn report(
    ctx: &Context,
    assignments: &[ScreenAssignment],
    allocation: &ChannelAllocation,
) -> Result<()> {
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(assignments)?);
        return Ok(());
    }
    output::print("Allocated channel ranges:", ctx.verbosity);
    for a in assignments {
        if let Some((start, end)) = allocation.range(a.screen_id) {
            output::print(
                format_args!("  {}: channels {}-{}", a.name, start, end),
                ctx.verbosity,
            );
        }
    }
    Ok(())
}
