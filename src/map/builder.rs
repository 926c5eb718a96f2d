//! Tile-set builders for the common map shapes.

use crate::{
    grid::tiles,
    hex::{OffsetPoint, TilePoint},
    map::HexMap,
    wrap::Wrapping,
};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// The tiles of a regular hexagon: the origin tile plus everything within
/// `radius` steps of it. Fails if `radius` is 0.
pub fn hexagon(radius: u32) -> anyhow::Result<Vec<TilePoint>> {
    tiles::disc(TilePoint::ORIGIN, radius, true)
}

/// A `width`x`height` block of tiles covering offset columns `0..width`
/// and rows `0..height`. Every row has the full width, so the outline
/// zig-zags with the odd-row shove.
pub fn rectangle(width: u32, height: u32) -> Vec<TilePoint> {
    let mut tiles = Vec::with_capacity((width * height) as usize);
    for row in 0..height as i32 {
        for col in 0..width as i32 {
            tiles.push(TilePoint::from_offset(OffsetPoint::new(col, row)));
        }
    }
    tiles
}

/// [rectangle] with every odd row one tile shorter, which gives the block
/// straight vertical sides instead of zig-zagging ones.
pub fn rectangle_odd_rows_shorter(width: u32, height: u32) -> Vec<TilePoint> {
    let mut tiles = Vec::new();
    for row in 0..height as i32 {
        for col in 0..(width as i32 - row % 2) {
            tiles.push(TilePoint::from_offset(OffsetPoint::new(col, row)));
        }
    }
    tiles
}

/// An upward-pointing triangle with `side_length` tiles along its bottom
/// row, narrowing by one tile per row.
pub fn triangle(side_length: u32) -> Vec<TilePoint> {
    let side = side_length as i32;
    let mut tiles = Vec::new();
    for row in 0..side {
        for col in (row / 2)..(side - (row + 1) / 2) {
            tiles.push(TilePoint::from_offset(OffsetPoint::new(col, row)));
        }
    }
    tiles
}

/// Configuration for the standard rectangular map, optionally glued into a
/// horizontal cylinder. Dimensions are in tiles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RectangleMapConfig {
    #[validate(range(min = 1))]
    pub width: u32,
    #[validate(range(min = 1))]
    pub height: u32,
    /// Glue the left and right borders together, making the map
    /// horizontally periodic.
    pub wrap_horizontal: bool,
}

impl RectangleMapConfig {
    /// Validate the config and build the map it describes. Returns an error
    /// if either dimension is 0.
    pub fn build(&self) -> anyhow::Result<HexMap> {
        self.validate().context("invalid map config")?;
        let wrapping = if self.wrap_horizontal {
            Wrapping::HorizontalPeriodic {
                width: self.width as i32,
            }
        } else {
            Wrapping::None
        };
        HexMap::new(rectangle(self.width, self.height), wrapping)
    }
}

impl Default for RectangleMapConfig {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            wrap_horizontal: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hexagon() {
        let tiles = hexagon(2).unwrap();
        assert_eq!(tiles.len(), 19);
        assert!(tiles.contains(&TilePoint::ORIGIN));
    }

    #[test]
    fn test_rectangle() {
        let tiles = rectangle(4, 3);
        assert_eq!(tiles.len(), 12);
        // Covers every offset cell of the block exactly once
        for row in 0..3 {
            for col in 0..4 {
                let tile = TilePoint::from_offset(OffsetPoint::new(col, row));
                assert_eq!(
                    tiles.iter().filter(|&&t| t == tile).count(),
                    1,
                    "missing or duplicated tile at col={} row={}",
                    col,
                    row
                );
            }
        }
    }

    #[test]
    fn test_rectangle_odd_rows_shorter() {
        let tiles = rectangle_odd_rows_shorter(4, 3);
        // Rows of 4, 3, 4
        assert_eq!(tiles.len(), 11);
        assert!(!tiles
            .contains(&TilePoint::from_offset(OffsetPoint::new(3, 1))));
    }

    #[test]
    fn test_triangle() {
        let tiles = triangle(3);
        assert_eq!(tiles.len(), 6);
        // Bottom row is full, top row is a single centered tile
        assert!(tiles.contains(&TilePoint::from_offset(OffsetPoint::new(2, 0))));
        assert!(tiles.contains(&TilePoint::from_offset(OffsetPoint::new(1, 2))));
        assert!(!tiles
            .contains(&TilePoint::from_offset(OffsetPoint::new(0, 2))));
    }

    #[test]
    fn test_config_validation() {
        let config = RectangleMapConfig {
            width: 0,
            height: 4,
            wrap_horizontal: false,
        };
        assert!(config.build().is_err());
    }

    #[test]
    fn test_config_build() {
        let config = RectangleMapConfig {
            width: 4,
            height: 3,
            wrap_horizontal: true,
        };
        let map = config.build().unwrap();
        assert_eq!(map.tile_count(), 12);
        assert_eq!(
            map.wrapping(),
            Wrapping::HorizontalPeriodic { width: 4 }
        );
    }
}
