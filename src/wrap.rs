//! Periodic re-mapping of coordinates for toroidal maps.
//!
//! A horizontally periodic map glues its left and right borders together:
//! every coordinate has infinitely many aliases one map width apart, and
//! wrapping picks the canonical one. Tiles wrap on the offset column range
//! `0..width`; the edge and corner lattices are 2 and 3 columns per tile
//! wide, and their canonical ranges start at column -1 and -2 respectively
//! because the map's left border edges and corners sit left of tile
//! column 0.
//!
//! Wrapping assumes inputs are no more than one map width outside the
//! canonical range, which holds for every query the map layer performs.
//! The top-right-most edge and corner of the map keep their unwrapped
//! aliases; their canonical re-mapping is an open problem inherited from
//! the coordinate scheme.

use crate::hex::{CornerPoint, EdgePoint, OffsetPoint, TilePoint, WorldPoint};
use serde::{Deserialize, Serialize};

/// The wrapping topology of a map. Construct one and hand it to
/// [HexMap](crate::HexMap); all map queries route their coordinates
/// through it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Wrapping {
    /// A bounded, non-periodic map. All wrap operations are the identity.
    None,
    /// The map repeats along the horizontal axis every `width` tiles.
    HorizontalPeriodic { width: i32 },
}

impl Wrapping {
    /// Move a cartesian position one map width back onto the map if it
    /// lies in a horizontally adjacent image.
    pub fn wrap_cartesian(&self, pos: WorldPoint) -> WorldPoint {
        match *self {
            Self::None => pos,
            Self::HorizontalPeriodic { width } => {
                let period = width as f64 * 3.0_f64.sqrt();
                let col = OffsetPoint::from_cartesian(pos).col();
                if col < 0 {
                    WorldPoint::new(pos.x + period, pos.y, pos.z)
                } else if col >= width {
                    WorldPoint::new(pos.x - period, pos.y, pos.z)
                } else {
                    pos
                }
            }
        }
    }

    /// The canonical alias of a tile: offset column taken modulo the map
    /// width.
    pub fn wrap_tile(&self, tile: TilePoint) -> TilePoint {
        match *self {
            Self::None => tile,
            Self::HorizontalPeriodic { width } => {
                let offset = tile.to_offset();
                let col = offset.col().rem_euclid(width);
                TilePoint::from_offset(offset.with_col(col))
            }
        }
    }

    pub fn wrap_tiles(&self, tiles: Vec<TilePoint>) -> Vec<TilePoint> {
        tiles.into_iter().map(|tile| self.wrap_tile(tile)).collect()
    }

    /// The canonical alias of an edge: offset column wrapped into
    /// `-1..(2 * width - 1)`. Column -1 holds the left border edges, and
    /// the alias `2 * width - 1` folds back onto it.
    pub fn wrap_edge(&self, edge: EdgePoint) -> EdgePoint {
        match *self {
            Self::None => edge,
            Self::HorizontalPeriodic { width } => {
                let offset = edge.to_offset();
                let mut col = offset.col() % (2 * width);
                if col == 2 * width - 1 {
                    col = -1;
                }
                if col < -1 {
                    col += 2 * width;
                }
                EdgePoint::from_offset(offset.with_col(col))
            }
        }
    }

    pub fn wrap_edges(&self, edges: Vec<EdgePoint>) -> Vec<EdgePoint> {
        edges.into_iter().map(|edge| self.wrap_edge(edge)).collect()
    }

    /// The canonical alias of a corner: offset column wrapped into
    /// `-2..(3 * width - 2)`, with the alias `3 * width - 2` folding back
    /// onto the left border column -2.
    pub fn wrap_corner(&self, corner: CornerPoint) -> CornerPoint {
        match *self {
            Self::None => corner,
            Self::HorizontalPeriodic { width } => {
                let offset = corner.to_offset();
                let mut col = offset.col() % (3 * width);
                if col == 3 * width - 2 {
                    col = -2;
                }
                if col < -2 {
                    col += 3 * width;
                }
                CornerPoint::from_offset(offset.with_col(col))
            }
        }
    }

    pub fn wrap_corners(&self, corners: Vec<CornerPoint>) -> Vec<CornerPoint> {
        corners
            .into_iter()
            .map(|corner| self.wrap_corner(corner))
            .collect()
    }

    /// The alias of `target` closest to `origin` across the seam. Distance
    /// and line queries run on the shifted alias so they measure the short
    /// way around the cylinder.
    pub fn shift_tile_target(
        &self,
        origin: TilePoint,
        target: TilePoint,
    ) -> TilePoint {
        match *self {
            Self::None => target,
            Self::HorizontalPeriodic { width } => {
                let origin_col = origin.to_offset().col();
                let target_offset = target.to_offset();
                let distance = (origin_col - target_offset.col()).abs();
                if distance * 2 <= width {
                    return target;
                }
                let col = if origin_col < target_offset.col() {
                    target_offset.col() - width
                } else {
                    target_offset.col() + width
                };
                TilePoint::from_offset(target_offset.with_col(col))
            }
        }
    }

    /// [Self::shift_tile_target] on the edge lattice, whose period is
    /// `2 * width` columns.
    pub fn shift_edge_target(
        &self,
        origin: EdgePoint,
        target: EdgePoint,
    ) -> EdgePoint {
        match *self {
            Self::None => target,
            Self::HorizontalPeriodic { width } => {
                let origin_col = origin.to_offset().col();
                let target_offset = target.to_offset();
                let distance = (origin_col - target_offset.col()).abs();
                if distance <= width {
                    return target;
                }
                let col = if origin_col < target_offset.col() {
                    target_offset.col() - 2 * width
                } else {
                    target_offset.col() + 2 * width
                };
                EdgePoint::from_offset(target_offset.with_col(col))
            }
        }
    }

    /// [Self::shift_tile_target] on the corner lattice, whose period is
    /// `3 * width` columns.
    pub fn shift_corner_target(
        &self,
        origin: CornerPoint,
        target: CornerPoint,
    ) -> CornerPoint {
        match *self {
            Self::None => target,
            Self::HorizontalPeriodic { width } => {
                let origin_col = origin.to_offset().col();
                let target_offset = target.to_offset();
                let distance = (origin_col - target_offset.col()).abs();
                if distance * 2 <= 3 * width {
                    return target;
                }
                let col = if origin_col < target_offset.col() {
                    target_offset.col() - 3 * width
                } else {
                    target_offset.col() + 3 * width
                };
                CornerPoint::from_offset(target_offset.with_col(col))
            }
        }
    }
}
