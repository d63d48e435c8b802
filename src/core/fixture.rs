//! core::fixture
//!
//! Fixture geometry and the channel-capacity model.
//!
//! # Design
//!
//! Advanced Output exports come from an authoring tool and are assumed
//! well-formed; partially-specified slices are common in older exports.
//! The model is permissive by default: missing geometry falls back to a
//! single defaults table ([`FixtureDefaults`]) applied once at ingestion,
//! and unrecognized color-format tokens degrade to three channels per
//! pixel. [`Fixture::footprint`] is total and never errors.

use serde::Serialize;

use crate::doc::Element;

/// Highest usable address in the flattened DMX channel space.
pub const MAX_CHANNEL: u32 = 131_072;

/// Per-pixel color encoding of a slice.
///
/// # Example
///
/// ```
/// use aomerge::core::fixture::ColorFormat;
///
/// assert_eq!(ColorFormat::parse("RGBW"), ColorFormat::Rgbw);
/// assert_eq!(ColorFormat::parse("grb"), ColorFormat::Grb);
/// assert_eq!(ColorFormat::parse("W-A-UV"), ColorFormat::Unknown);
/// assert_eq!(ColorFormat::Unknown.channels_per_pixel(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColorFormat {
    Rgb,
    Grb,
    Bgr,
    Rgbw,
    /// Any token the tool does not recognize; treated as a 3-channel encoding.
    Unknown,
}

impl ColorFormat {
    /// Parse a color-format token, case-insensitively.
    pub fn parse(token: &str) -> Self {
        match token.trim().to_ascii_uppercase().as_str() {
            "RGB" => ColorFormat::Rgb,
            "GRB" => ColorFormat::Grb,
            "BGR" => ColorFormat::Bgr,
            "RGBW" => ColorFormat::Rgbw,
            _ => ColorFormat::Unknown,
        }
    }

    /// DMX channels consumed by one pixel in this encoding.
    pub fn channels_per_pixel(self) -> u32 {
        match self {
            ColorFormat::Rgbw => 4,
            ColorFormat::Rgb | ColorFormat::Grb | ColorFormat::Bgr | ColorFormat::Unknown => 3,
        }
    }
}

/// Fallback values for slices that omit geometry attributes.
///
/// Applied exactly once, when a slice element is turned into a [`Fixture`].
#[derive(Debug, Clone, Copy)]
pub struct FixtureDefaults {
    pub width: u32,
    pub height: u32,
    pub color_format: ColorFormat,
}

impl Default for FixtureDefaults {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            color_format: ColorFormat::Unknown,
        }
    }
}

/// A planar coordinate from a slice's `InputRect` corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One addressable pixel block inside a screen.
///
/// Immutable once ingested; the allocator produces new start channels in a
/// separate assignment structure rather than mutating fixtures in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    /// Pixel columns, at least 1.
    pub width: u32,
    /// Pixel rows, at least 1.
    pub height: u32,
    pub color_format: ColorFormat,
    /// Start channel as stored in the source document.
    pub input_channel: u32,
    /// `InputRect` corner points, in document order. May be empty.
    pub corners: Vec<Point>,
}

impl Fixture {
    /// Build a fixture from a `DmxSlice` element, filling gaps from `defaults`.
    ///
    /// Zero is treated the same as absent for width and height; a slice
    /// cannot occupy no pixels.
    pub fn from_element(el: &Element, defaults: &FixtureDefaults) -> Self {
        let width = match el.attr_u32("width") {
            Some(w) if w >= 1 => w,
            _ => defaults.width,
        };
        let height = match el.attr_u32("height") {
            Some(h) if h >= 1 => h,
            _ => defaults.height,
        };
        let color_format = el
            .attr("colorFormat")
            .map(ColorFormat::parse)
            .unwrap_or(defaults.color_format);
        let input_channel = el.attr_u32("inputChannel").unwrap_or(1);

        let corners = el
            .child("InputRect")
            .map(|rect| {
                rect.children_named("v")
                    .filter_map(|v| {
                        Some(Point {
                            x: v.attr_f64("x")?,
                            y: v.attr_f64("y")?,
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            width,
            height,
            color_format,
            input_channel,
            corners,
        }
    }

    /// Total channel count consumed by this fixture.
    ///
    /// `width × height × channels_per_pixel`, saturating at `u32::MAX` so
    /// absurd geometry in a hand-edited export cannot panic or wrap.
    /// Pure; repeated calls on the same fixture always agree.
    pub fn footprint(&self) -> u32 {
        self.width
            .saturating_mul(self.height)
            .saturating_mul(self.color_format.channels_per_pixel())
    }
}
