//! core::centroid
//!
//! Planar center of a four-corner fixture footprint, for CSV export.

use crate::core::fixture::{Fixture, Point};

/// Integer center of a quadrilateral, rounded per [`centroid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Center {
    pub x: i64,
    pub y: i64,
}

/// Compute the arithmetic-mean center of exactly four corner points.
///
/// Rounding is half-away-from-zero, matching `round(sum / 4)`. Returns
/// `None` for any other corner count; such fixtures are simply skipped by
/// the exporter. Pure function.
///
/// # Example
///
/// ```
/// use aomerge::core::centroid::centroid;
/// use aomerge::core::fixture::Point;
///
/// let corners = [
///     Point { x: 0.0, y: 0.0 },
///     Point { x: 10.0, y: 0.0 },
///     Point { x: 10.0, y: 10.0 },
///     Point { x: 0.0, y: 10.0 },
/// ];
/// let c = centroid(&corners).unwrap();
/// assert_eq!((c.x, c.y), (5, 5));
/// ```
pub fn centroid(corners: &[Point]) -> Option<Center> {
    if corners.len() != 4 {
        return None;
    }
    let sum_x: f64 = corners.iter().map(|p| p.x).sum();
    let sum_y: f64 = corners.iter().map(|p| p.y).sum();
    Some(Center {
        x: (sum_x / 4.0).round() as i64,
        y: (sum_y / 4.0).round() as i64,
    })
}

/// Centroid of a fixture's `InputRect`, when it has exactly four corners.
pub fn fixture_center(fixture: &Fixture) -> Option<Center> {
    centroid(&fixture.corners)
}
