//! Aggregate size and extent data for a bounded map.

use crate::{hex::OffsetPoint, hex::TilePoint, hex::WorldPoint, util};
use serde::{Deserialize, Serialize};

/// The bounding box of a map: offset-coordinate ranges of its tiles plus
/// the cartesian center and half-extents. Computed once at map
/// construction.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapSizeData {
    min_offset_col: i32,
    max_offset_col: i32,
    min_offset_row: i32,
    max_offset_row: i32,
    center: WorldPoint,
    extents: WorldPoint,
}

impl MapSizeData {
    /// Compute size data over a non-empty set of tiles. The cartesian
    /// bounds span the *centers* of the extreme tiles, matching how
    /// normalized positions are anchored.
    pub(crate) fn from_tiles<'a>(
        tiles: impl Iterator<Item = &'a TilePoint>,
    ) -> Self {
        let mut min_col = i32::MAX;
        let mut max_col = i32::MIN;
        let mut min_row = i32::MAX;
        let mut max_row = i32::MIN;
        for tile in tiles {
            let offset = tile.to_offset();
            min_col = min_col.min(offset.col());
            max_col = max_col.max(offset.col());
            min_row = min_row.min(offset.row());
            max_row = max_row.max(offset.row());
        }

        let world_min = OffsetPoint::new(min_col, min_row).to_cartesian();
        let world_max = OffsetPoint::new(max_col, max_row).to_cartesian();
        let center = WorldPoint::new(
            (world_min.x + world_max.x) / 2.0,
            0.0,
            (world_min.z + world_max.z) / 2.0,
        );
        let extents = WorldPoint::new(
            (world_max.x - world_min.x) / 2.0,
            0.0,
            (world_max.z - world_min.z) / 2.0,
        );

        Self {
            min_offset_col: min_col,
            max_offset_col: max_col,
            min_offset_row: min_row,
            max_offset_row: max_row,
            center,
            extents,
        }
    }

    pub fn min_offset_col(&self) -> i32 {
        self.min_offset_col
    }

    pub fn max_offset_col(&self) -> i32 {
        self.max_offset_col
    }

    pub fn min_offset_row(&self) -> i32 {
        self.min_offset_row
    }

    pub fn max_offset_row(&self) -> i32 {
        self.max_offset_row
    }

    /// Cartesian center of the map's bounding box.
    pub fn center(&self) -> WorldPoint {
        self.center
    }

    /// Cartesian half-size of the bounding box along each axis.
    pub fn extents(&self) -> WorldPoint {
        self.extents
    }

    /// Where a cartesian position falls within the map's bounding box,
    /// as `(x, z)` fractions clamped to `[0, 1]`. A map one tile wide has
    /// a degenerate x range; everything maps to 0 on that axis.
    pub fn normalized_position(
        &self,
        pos: WorldPoint,
    ) -> nalgebra::Point2<f64> {
        let min_x = self.center.x - self.extents.x;
        let max_x = self.center.x + self.extents.x;
        let min_z = self.center.z - self.extents.z;
        let max_z = self.center.z + self.extents.z;
        nalgebra::Point2::new(
            util::inverse_lerp(min_x, max_x, pos.x),
            util::inverse_lerp(min_z, max_z, pos.z),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::builder;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_from_tiles() {
        let tiles = builder::rectangle(4, 3);
        let size = MapSizeData::from_tiles(tiles.iter());
        assert_eq!(size.min_offset_col(), 0);
        assert_eq!(size.max_offset_col(), 3);
        assert_eq!(size.min_offset_row(), 0);
        assert_eq!(size.max_offset_row(), 2);
        // Rows 0 and 2 are even, so the x bounds span columns directly
        assert_approx_eq!(size.center().x, 1.5 * 3.0_f64.sqrt());
        assert_approx_eq!(size.center().z, 1.5);
        assert_approx_eq!(size.extents().z, 1.5);
    }

    #[test]
    fn test_normalized_position() {
        let tiles = builder::rectangle(5, 5);
        let size = MapSizeData::from_tiles(tiles.iter());
        let center = size.normalized_position(size.center());
        assert_approx_eq!(center.x, 0.5);
        assert_approx_eq!(center.y, 0.5);
        // Out-of-range positions clamp
        let far = size.normalized_position(WorldPoint::new(1e6, 0.0, -1e6));
        assert_eq!(far, nalgebra::Point2::new(1.0, 0.0));
    }

    #[test]
    fn test_normalized_position_degenerate_axis() {
        let tiles = builder::rectangle(1, 3);
        let size = MapSizeData::from_tiles(tiles.iter());
        // Single-column map: the x range collapses (odd rows shove by half
        // a tile, but min and max column coincide on even rows)
        let pos = size.normalized_position(size.center());
        assert_eq!(pos.x, 0.0);
    }
}
