//! Hexmap is a library of coordinate geometry and grid-topology algorithms
//! for hexagonal tile maps. It converts between cartesian (world) space and
//! two integer hex-grid coordinate systems, enumerates neighboring/ring/
//! line/path/area elements over tiles, edges and corners, and supports
//! toroidal (wrap-around) map topology.
//!
//! The crate is split into layers, from the bottom up:
//!
//! - [hex]: coordinate value types and pure conversion math
//! - [grid]: topology queries on the infinite, unbounded grid
//! - [wrap]: periodic re-mapping of coordinates for toroidal maps
//! - [map]: a concrete bounded map that wraps and bound-checks every grid
//!   query, and assigns stable integer indices to its tiles, edges and
//!   corners
//!
//! ```no_run
//! use hexmap::{HexMap, RectangleMapConfig};
//!
//! let config = RectangleMapConfig {
//!     width: 8,
//!     height: 6,
//!     wrap_horizontal: true,
//! };
//! let map = config.build().unwrap();
//! println!("{} tiles", map.tile_count());
//! ```

pub mod grid;
pub mod hex;
pub mod map;
mod util;
pub mod wrap;

pub use crate::{
    grid::{edges::BorderPath, Nudge},
    hex::{
        CornerPoint, CornerType, EdgeAlignment, EdgeDirection, EdgePoint,
        HexVector, OffsetPoint, TileDirection, TilePoint, WorldPoint,
    },
    map::{
        builder, data::DataLayer, size::MapSizeData, HexMap,
        RectangleMapConfig,
    },
    wrap::Wrapping,
};
