//! Conversions between cartesian space and the hex lattices. The grid is
//! laid out pointy-top: a tile's center-to-center spacing is `sqrt(3)` along
//! the cartesian x axis and `1.5` along z.

use crate::hex::{CornerPoint, EdgePoint, OffsetPoint, TilePoint, WorldPoint};

fn sqrt3() -> f64 {
    3.0_f64.sqrt()
}

impl TilePoint {
    /// The cartesian position of this tile's center, at elevation 0.
    pub fn to_cartesian(self) -> WorldPoint {
        let x = sqrt3() * (self.x() as f64 + self.y() as f64 / 2.0);
        let z = 1.5 * self.y() as f64;
        WorldPoint::new(x, 0.0, z)
    }

    /// The tile whose hexagonal cell contains the given cartesian position.
    /// Only the x and z components participate; elevation is ignored.
    ///
    /// The rounding is done with a chain of floors over the three skewed
    /// axes rather than fractional cube rounding, so positions exactly on a
    /// cell boundary resolve deterministically.
    pub fn from_cartesian(pos: WorldPoint) -> Self {
        let x = pos.x / sqrt3();
        let z = pos.z;
        let temp = (x + z + 1.0).floor();
        let q = (((2.0 * x + 1.0).floor() + temp) / 3.0).floor();
        let r = ((temp + ((-x) + z + 1.0).floor()) / 3.0).floor();
        Self::new_xy(q as i32 - r as i32, r as i32)
    }
}

impl EdgePoint {
    /// The cartesian position of this edge's midpoint, at elevation 0.
    /// The edge lattice is the tile lattice scaled by 2, so this is the
    /// tile-lattice projection halved.
    pub fn to_cartesian(self) -> WorldPoint {
        let base = TilePoint::new_xy(self.x(), self.y()).to_cartesian();
        WorldPoint::new(base.x / 2.0, 0.0, base.z / 2.0)
    }
}

impl CornerPoint {
    /// The cartesian position of this corner, at elevation 0. The corner
    /// lattice is the tile lattice scaled by 3.
    pub fn to_cartesian(self) -> WorldPoint {
        let base = TilePoint::new_xy(self.x(), self.y()).to_cartesian();
        WorldPoint::new(base.x / 3.0, 0.0, base.z / 3.0)
    }
}

impl OffsetPoint {
    /// The cartesian position of the center of the tile at this offset
    /// coordinate. Odd rows are shoved half a tile to the right.
    pub fn to_cartesian(self) -> WorldPoint {
        let x_adjustment = if self.row() % 2 == 0 {
            0.0
        } else {
            0.5 * sqrt3()
        };
        let x = self.col() as f64 * sqrt3() + x_adjustment;
        let z = self.row() as f64 * 1.5;
        WorldPoint::new(x, 0.0, z)
    }

    /// The offset coordinate of the tile containing the given cartesian
    /// position.
    pub fn from_cartesian(pos: WorldPoint) -> Self {
        TilePoint::from_cartesian(pos).to_offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_tile_to_cartesian() {
        let origin = TilePoint::ORIGIN.to_cartesian();
        assert_approx_eq!(origin.x, 0.0);
        assert_approx_eq!(origin.z, 0.0);

        let right = TilePoint::new_xy(1, 0).to_cartesian();
        assert_approx_eq!(right.x, 3.0_f64.sqrt());
        assert_approx_eq!(right.z, 0.0);

        let top_right = TilePoint::new_xy(0, 1).to_cartesian();
        assert_approx_eq!(top_right.x, 3.0_f64.sqrt() / 2.0);
        assert_approx_eq!(top_right.z, 1.5);
    }

    #[test]
    fn test_cartesian_round_trip() {
        // Every tile center must map back to its own tile, including at
        // negative coordinates where naive truncation would misround
        for x in -5..=5 {
            for y in -5..=5 {
                let tile = TilePoint::new_xy(x, y);
                assert_eq!(
                    TilePoint::from_cartesian(tile.to_cartesian()),
                    tile,
                    "round trip failed for {}",
                    tile
                );
            }
        }
    }

    #[test]
    fn test_cartesian_near_center() {
        // Points near a center but off it still resolve to that tile
        let center = TilePoint::new_xy(2, -1).to_cartesian();
        let nudged =
            WorldPoint::new(center.x + 0.3, 0.0, center.z - 0.3);
        assert_eq!(
            TilePoint::from_cartesian(nudged),
            TilePoint::new_xy(2, -1)
        );
    }

    #[test]
    fn test_edge_to_cartesian() {
        // Edge between the origin and its right neighbor sits halfway
        // between the two centers
        let pos = EdgePoint::new_xy(1, 0).to_cartesian();
        assert_approx_eq!(pos.x, 3.0_f64.sqrt() / 2.0);
        assert_approx_eq!(pos.z, 0.0);
    }

    #[test]
    fn test_corner_to_cartesian() {
        // Top corner of the origin tile: (-1, 2, -1)
        let pos = CornerPoint::new_xy(-1, 2).to_cartesian();
        assert_approx_eq!(pos.x, 0.0);
        assert_approx_eq!(pos.z, 1.0);
        // Bottom corner: (1, -2, 1)
        let pos = CornerPoint::new_xy(1, -2).to_cartesian();
        assert_approx_eq!(pos.x, 0.0);
        assert_approx_eq!(pos.z, -1.0);
    }

    #[test]
    fn test_offset_to_cartesian() {
        // Offset and cube conversions must agree on every tile center
        for x in -4..=4 {
            for y in -4..=4 {
                let tile = TilePoint::new_xy(x, y);
                let via_cube = tile.to_cartesian();
                let via_offset = tile.to_offset().to_cartesian();
                assert_approx_eq!(via_cube.x, via_offset.x);
                assert_approx_eq!(via_cube.z, via_offset.z);
            }
        }
    }
}
