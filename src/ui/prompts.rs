//! ui::prompts
//!
//! Interactive prompts backed by stdin.
//!
//! # Design
//!
//! Prompts block until the operator answers; there is no timeout. Blank
//! input always means "accept the default". The allocator and the merge
//! command receive these as injected capabilities, so tests substitute
//! scripted implementations instead of a terminal.

use std::io::{self, BufRead, Write};

use crate::core::allocator::{parse_channel_reply, ChannelPrompt, PromptError};
use crate::core::screen::Screen;
use crate::core::selection::{parse_selection, SelectionSet};
use crate::ui::output::{self, Verbosity};

/// Operator capability: pick a subset of the discovered screens.
pub trait ScreenSelector {
    fn select(&mut self, screens: &[Screen]) -> Result<SelectionSet, PromptError>;
}

/// Reads one selection expression from stdin.
///
/// Bad tokens are warned about and skipped, matching the selection
/// grammar; the expression is not re-prompted. End of input counts as
/// selecting nothing.
pub struct StdinSelector {
    pub verbosity: Verbosity,
}

impl ScreenSelector for StdinSelector {
    fn select(&mut self, screens: &[Screen]) -> Result<SelectionSet, PromptError> {
        print!("Select screens to include (e.g. 1,3-5, all, none): ");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        let expression = if read == 0 { "none" } else { line.as_str() };

        let parsed = parse_selection(expression, screens.len());
        for warning in &parsed.warnings {
            output::warn(warning, self.verbosity);
        }
        Ok(parsed.selected)
    }
}

/// Prompts for a start channel, re-asking until the reply is valid.
///
/// This is the only recoverable-failure loop in the tool: a non-numeric
/// or out-of-range reply is rejected with a warning and the prompt is
/// shown again. Blank accepts the suggestion.
pub struct StdinChannelPrompt {
    pub verbosity: Verbosity,
}

impl ChannelPrompt for StdinChannelPrompt {
    fn start_channel(
        &mut self,
        screen: &Screen,
        suggested: u32,
        total_footprint: u32,
    ) -> Result<u32, PromptError> {
        loop {
            print!(
                "Screen \"{}\" needs {} channels. Start channel [{}]: ",
                screen.name, total_footprint, suggested
            );
            io::stdout().flush()?;

            let mut line = String::new();
            let read = io::stdin().lock().read_line(&mut line)?;
            if read == 0 {
                return Err(PromptError::InputClosed);
            }

            match parse_channel_reply(&line, suggested) {
                Ok(value) => return Ok(value),
                Err(reason) => output::warn(reason, self.verbosity),
            }
        }
    }
}
