//! Topology queries over the infinite, unbounded hex grid: adjacency,
//! distance, rings, discs, lines, cones, paths and border traces for tiles,
//! edges and corners. Everything here is pure coordinate math; bound checks
//! and wrapping are layered on top by [crate::map].
//!
//! The modules mirror the element kinds: [tiles], [edges], [corners], plus
//! [distance] for the metric on each lattice.

pub mod corners;
pub mod distance;
pub mod edges;
pub mod tiles;

/// Direction to push an interpolated line off the exact center of its origin
/// element. Interpolated positions can land exactly between two grid
/// elements; the nudge breaks those ties consistently, so the same endpoints
/// always rasterize to the same line. `Positive` pushes toward cartesian +x.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Nudge {
    Positive,
    Negative,
}

impl Nudge {
    pub(crate) fn offset(self) -> f64 {
        match self {
            Self::Positive => 0.001,
            Self::Negative => -0.001,
        }
    }
}
