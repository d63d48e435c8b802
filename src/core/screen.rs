//! core::screen
//!
//! The screen record: a named group of fixtures plus the parsed element
//! it came from. The element is kept verbatim so the merged document can
//! re-emit screens exactly as authored, with only identifiers and start
//! channels rewritten.

use crate::core::allocator::ScreenAssignment;
use crate::core::fixture::{Fixture, FixtureDefaults};
use crate::doc::Element;

/// Attribute stamped onto kept screens to identify them downstream.
pub const LUMIVERSE_ID_ATTR: &str = "LumiverseId";

/// A named output surface built from addressable pixel fixtures.
#[derive(Debug, Clone)]
pub struct Screen {
    /// Screen name; unique key within one merge run.
    pub name: String,
    /// File the screen was loaded from, for reporting.
    pub source_file: String,
    /// Monotonic identifier assigned by the repository, starting at 1.
    /// Zero until the repository stamps it.
    pub assigned_id: u32,
    /// Fixtures in document order.
    pub fixtures: Vec<Fixture>,
    /// The parsed `DmxScreen` element, untouched apart from id stamping.
    pub element: Element,
}

impl Screen {
    /// Build a screen from a `DmxScreen` element.
    ///
    /// Returns `None` when the element carries no `name` attribute; an
    /// unnamed screen cannot participate in deduplication or selection.
    pub fn from_element(element: Element, source_file: &str) -> Option<Self> {
        let name = element.attr("name")?.to_string();
        let defaults = FixtureDefaults::default();
        let fixtures = element
            .children_named("layers")
            .flat_map(|layer| layer.children_named("DmxSlice"))
            .map(|slice| Fixture::from_element(slice, &defaults))
            .collect();
        Some(Self {
            name,
            source_file: source_file.to_string(),
            assigned_id: 0,
            fixtures,
            element,
        })
    }

    /// Sum of fixture footprints, visited in stored document order.
    /// Saturates at `u32::MAX` like the footprints themselves.
    pub fn total_footprint(&self) -> u32 {
        self.fixtures
            .iter()
            .map(Fixture::footprint)
            .fold(0, u32::saturating_add)
    }

    /// Produce a copy of the underlying element with the assignment's start
    /// channels written into each slice.
    ///
    /// Slices are visited in the same document order the fixtures were
    /// ingested in, so `assignment.fixture_starts[i]` lands on fixture `i`.
    /// The stored element is left untouched.
    pub fn with_assignment(&self, assignment: &ScreenAssignment) -> Element {
        let mut element = self.element.clone();
        let mut starts = assignment.fixture_starts.iter();
        for layer in element.children_named_mut("layers") {
            for slice in layer.children_named_mut("DmxSlice") {
                if let Some(start) = starts.next() {
                    slice.set_attr("inputChannel", &start.to_string());
                }
            }
        }
        element
    }
}
