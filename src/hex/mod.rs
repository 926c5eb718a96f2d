//! This module holds the basic value types of the hexagonal coordinate
//! systems, and the pure math that converts between them.
//!
//! ## Coordinate Systems
//!
//! Three coordinate systems are in play:
//!
//! ### Cartesian coordinates
//!
//! A point on the infinite plane the map lives on, with free real-valued `x`
//! and `z` axes. The `y` component is carried along but geometrically inert;
//! it is only ever used as a display elevation. See [WorldPoint].
//!
//! ### Cube coordinates
//!
//! An extension of the [cube coordinate system defined by Amit
//! Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//! Each coordinate has three integer components (`x`, `y`, `z`) with
//! `x + y + z == 0`, so every type here stores only `x` and `y` and derives
//! `z` on demand.
//!
//! Tiles live on the base lattice. Edges and corners live on *finer*
//! lattices of the same shape: an edge coordinate is the component-wise sum
//! of its two adjacent tiles (tile lattice scaled by 2), and a corner
//! coordinate is the sum of its three adjacent tiles (scaled by 3). The raw
//! integer triples of the three lattices overlap, so tiles, edges and
//! corners get their own newtypes ([TilePoint], [EdgePoint], [CornerPoint])
//! — the compiler enforces that the kinds are never mixed.
//!
//! ### Offset coordinates
//!
//! A two-integer `(column, row)` addressing of the tile lattice, convenient
//! for building rectangular maps and for periodic wrap arithmetic along the
//! column axis. See [OffsetPoint]. Conversions use floored division
//! throughout, so negative coordinates round toward negative infinity.

mod convert;
mod unit;

pub use self::{convert::*, unit::*};
