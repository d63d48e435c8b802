//! core::allocator
//!
//! Sequential DMX channel allocator.
//!
//! # Design
//!
//! The allocator owns a single running cursor, initialized to 1, and walks
//! screens in the order the caller hands them over (ascending selection
//! index). For each screen it asks an injected [`ChannelPrompt`] for a
//! start channel, offering the cursor as the default, then lays the
//! screen's fixtures out contiguously from that start in document order.
//!
//! The cursor always advances to `end + 1` afterwards, even when the
//! operator typed a start that collides with a previously assigned range.
//! Defaults are non-overlapping by construction; typed values are taken
//! at face value and collisions are left for the operator to spot in the
//! allocation report.
//!
//! Threading the cursor through an explicit [`Allocator`] value (rather
//! than ambient state) keeps runs deterministic and lets tests execute in
//! parallel.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::core::fixture::MAX_CHANNEL;
use crate::core::screen::Screen;

/// Errors surfaced by channel prompts.
///
/// Invalid *input* never appears here; the prompt loop re-asks until the
/// operator supplies a valid value or accepts the default. Only transport
/// failures (closed stdin, I/O errors) escape.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input stream closed while waiting for a channel number")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Operator capability: decide the start channel for one screen.
///
/// Implementations prompt a real terminal or replay a script in tests.
pub trait ChannelPrompt {
    /// Return the start channel for `screen`, given the allocator's
    /// suggested default and the screen's total footprint.
    fn start_channel(
        &mut self,
        screen: &Screen,
        suggested: u32,
        total_footprint: u32,
    ) -> Result<u32, PromptError>;
}

/// A prompt that accepts every suggestion. Used for non-interactive runs.
pub struct AcceptDefaults;

impl ChannelPrompt for AcceptDefaults {
    fn start_channel(&mut self, _: &Screen, suggested: u32, _: u32) -> Result<u32, PromptError> {
        Ok(suggested)
    }
}

/// Why one line of channel input was rejected.
#[derive(Debug, PartialEq, Eq)]
pub enum ChannelReplyError {
    NotANumber,
    OutOfRange,
}

impl std::fmt::Display for ChannelReplyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelReplyError::NotANumber => write!(f, "not a number"),
            ChannelReplyError::OutOfRange => {
                write!(f, "channel must be between 1 and {}", MAX_CHANNEL)
            }
        }
    }
}

/// Interpret one line of operator input for a start-channel prompt.
///
/// Blank means "accept the suggestion". Anything else must be an integer
/// in `1..=131072`; a rejected line is re-prompted by the caller.
pub fn parse_channel_reply(line: &str, suggested: u32) -> Result<u32, ChannelReplyError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(suggested);
    }
    let value: u32 = line.parse().map_err(|_| ChannelReplyError::NotANumber)?;
    if value < 1 || value > MAX_CHANNEL {
        return Err(ChannelReplyError::OutOfRange);
    }
    Ok(value)
}

/// Channel layout computed for one screen.
///
/// `end = start + total_footprint - 1`; `fixture_starts` aligns with the
/// screen's fixtures in document order.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenAssignment {
    pub screen_id: u32,
    pub name: String,
    pub start: u32,
    pub end: u32,
    pub fixture_starts: Vec<u32>,
}

/// Mapping of screen id to assigned channel range, for reporting.
#[derive(Debug, Default, Serialize)]
pub struct ChannelAllocation {
    ranges: BTreeMap<u32, (u32, u32)>,
}

impl ChannelAllocation {
    pub fn range(&self, screen_id: u32) -> Option<(u32, u32)> {
        self.ranges.get(&screen_id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, (u32, u32))> + '_ {
        self.ranges.iter().map(|(&id, &range)| (id, range))
    }
}

/// Sequential allocator state: one running next-available-channel cursor.
#[derive(Debug)]
pub struct Allocator {
    cursor: u32,
}

impl Default for Allocator {
    fn default() -> Self {
        Self::new()
    }
}

impl Allocator {
    pub fn new() -> Self {
        Self { cursor: 1 }
    }

    /// Next channel the allocator would suggest.
    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    /// Assign channel ranges to `screens` in order.
    ///
    /// Fixtures keep their stored document order; each receives the running
    /// position, which then advances by its footprint. The returned
    /// assignments carry the new start channels; `screens` themselves are
    /// not touched.
    pub fn allocate(
        &mut self,
        screens: &[Screen],
        prompt: &mut dyn ChannelPrompt,
    ) -> Result<(Vec<ScreenAssignment>, ChannelAllocation), PromptError> {
        let mut assignments = Vec::with_capacity(screens.len());
        let mut allocation = ChannelAllocation::default();

        for screen in screens {
            let total = screen.total_footprint();
            let start = prompt.start_channel(screen, self.cursor, total)?;

            let mut position = start;
            let mut fixture_starts = Vec::with_capacity(screen.fixtures.len());
            for fixture in &screen.fixtures {
                fixture_starts.push(position);
                position = position.saturating_add(fixture.footprint());
            }
            // Saturating like the footprints; a screen with no fixtures
            // ends just before it starts and consumes nothing.
            let end = if total == 0 {
                start - 1
            } else {
                start.saturating_add(total - 1)
            };

            allocation.ranges.insert(screen.assigned_id, (start, end));
            assignments.push(ScreenAssignment {
                screen_id: screen.assigned_id,
                name: screen.name.clone(),
                start,
                end,
                fixture_starts,
            });

            self.cursor = end.saturating_add(1);
        }

        Ok((assignments, allocation))
    }
}
