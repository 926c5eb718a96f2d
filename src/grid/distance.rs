//! The distance metric on each of the three lattices, in both grid steps
//! and cartesian (euclidean) units.

use crate::hex::{CornerPoint, EdgePoint, TilePoint};

/// Number of tile steps between two tiles: the maximum absolute component
/// delta of the cube coordinates.
pub fn between_tiles(a: TilePoint, b: TilePoint) -> u32 {
    let dx = (a.x() - b.x()).unsigned_abs();
    let dy = (a.y() - b.y()).unsigned_abs();
    let dz = (a.z() - b.z()).unsigned_abs();
    dx.max(dy).max(dz)
}

/// Cartesian distance between two tile centers.
pub fn between_tiles_euclidean(a: TilePoint, b: TilePoint) -> f64 {
    nalgebra::distance(&a.to_cartesian().xz(), &b.to_cartesian().xz())
}

/// Number of edge steps between two edges, where a step moves to one of the
/// 4 adjacent edges.
///
/// The max-component metric undercounts by one when both edges are parallel
/// to the same axis *and* share that axis coordinate, because the path has
/// to leave the common axis line and come back.
pub fn between_edges(a: EdgePoint, b: EdgePoint) -> u32 {
    if a == b {
        return 0;
    }
    let dx = (a.x() - b.x()).unsigned_abs();
    let dy = (a.y() - b.y()).unsigned_abs();
    let dz = (a.z() - b.z()).unsigned_abs();
    let mut distance = dx.max(dy).max(dz);

    let alignment = a.alignment();
    let co_aligned = alignment == b.alignment();
    let same_axis_coord = match alignment {
        crate::hex::EdgeAlignment::ParallelX => a.x() == b.x(),
        crate::hex::EdgeAlignment::ParallelY => a.y() == b.y(),
        crate::hex::EdgeAlignment::ParallelZ => a.z() == b.z(),
    };
    if co_aligned && same_axis_coord {
        distance += 1;
    }
    distance
}

/// Cartesian distance between two edge midpoints.
pub fn between_edges_euclidean(a: EdgePoint, b: EdgePoint) -> f64 {
    nalgebra::distance(&a.to_cartesian().xz(), &b.to_cartesian().xz())
}

/// Number of corner steps between two corners, where a step moves to one of
/// the 3 adjacent corners. Each step changes the component sum by 3 except
/// that a residue of 2 needs one extra step.
pub fn between_corners(a: CornerPoint, b: CornerPoint) -> u32 {
    let dx = (a.x() - b.x()).unsigned_abs();
    let dy = (a.y() - b.y()).unsigned_abs();
    let dz = (a.z() - b.z()).unsigned_abs();
    let sum = dx + dy + dz;
    let mut distance = sum / 3;
    if sum % 3 == 2 {
        distance += 1;
    }
    distance
}

/// Cartesian distance between two corners.
pub fn between_corners_euclidean(a: CornerPoint, b: CornerPoint) -> f64 {
    nalgebra::distance(&a.to_cartesian().xz(), &b.to_cartesian().xz())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_between_tiles() {
        let origin = TilePoint::ORIGIN;
        assert_eq!(between_tiles(origin, origin), 0);
        assert_eq!(between_tiles(origin, TilePoint::new_xy(1, 0)), 1);
        assert_eq!(between_tiles(origin, TilePoint::new_xy(2, -1)), 2);
        assert_eq!(between_tiles(origin, TilePoint::new_xy(-3, 5)), 5);
        // Symmetric
        assert_eq!(
            between_tiles(TilePoint::new_xy(-3, 5), origin),
            between_tiles(origin, TilePoint::new_xy(-3, 5)),
        );
    }

    #[test]
    fn test_between_tiles_euclidean() {
        assert_approx_eq!(
            between_tiles_euclidean(
                TilePoint::ORIGIN,
                TilePoint::new_xy(2, 0)
            ),
            2.0 * 3.0_f64.sqrt()
        );
    }

    #[test]
    fn test_between_edges() {
        let edge = EdgePoint::new_xy(1, 0);
        assert_eq!(between_edges(edge, edge), 0);
        // Adjacent edges of the same tile
        assert_eq!(between_edges(edge, EdgePoint::new_xy(1, -1)), 1);
        // Co-aligned edges on the same axis line need the extra step:
        // both parallel to y with equal y
        let a = EdgePoint::new_xy(1, 0);
        let b = EdgePoint::new_xy(3, 0);
        assert_eq!(between_edges(a, b), 3);
    }

    #[test]
    fn test_between_corners() {
        let top = CornerPoint::new_xy(-1, 2);
        assert_eq!(between_corners(top, top), 0);
        // Adjacent corner (top-right corner of the same tile)
        assert_eq!(between_corners(top, CornerPoint::new_xy(1, 1)), 1);
        // Opposite corners of one tile
        assert_eq!(between_corners(top, CornerPoint::new_xy(1, -2)), 3);
    }
}
