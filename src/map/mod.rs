//! Bounded hex maps.
//!
//! A [HexMap] is a finite set of tiles plus everything derived from it:
//! the edge and corner sets, dense integer indices for all three element
//! kinds, bounding-box data, and a [Wrapping] topology. Every geometry
//! query from [grid](crate::grid) has a counterpart here that accounts
//! for the map's bounds and wrapping: queries shift their far inputs to
//! the nearest periodic image, run the plain grid algorithm, wrap the
//! results back into canonical coordinates, and drop whatever falls off
//! the map.
//!
//! Element indices are assigned in first-seen order during construction
//! and never change afterwards, so they can address external storage
//! such as a [DataLayer].

pub mod builder;
pub mod data;
pub mod size;

pub use self::builder::RectangleMapConfig;

use crate::{
    grid::{corners, distance, edges, edges::BorderPath, tiles, Nudge},
    hex::{
        CornerPoint, EdgeAlignment, EdgeDirection, EdgePoint, HexVector,
        TileDirection, TilePoint, WorldPoint,
    },
    map::{data::DataLayer, size::MapSizeData},
    wrap::Wrapping,
};
use anyhow::bail;
use fnv::FnvBuildHasher;
use indexmap::IndexSet;
use std::collections::VecDeque;

/// A bounded map of hex tiles and the edges and corners they touch.
///
/// Tiles, edges and corners are each held in insertion order, giving every
/// element a dense, stable index in `0..count` of its kind. All query
/// methods accept and return canonical (wrapped) coordinates.
#[derive(Clone, Debug)]
pub struct HexMap {
    tiles: IndexSet<TilePoint, FnvBuildHasher>,
    edges: IndexSet<EdgePoint, FnvBuildHasher>,
    corners: IndexSet<CornerPoint, FnvBuildHasher>,
    wrapping: Wrapping,
    size: MapSizeData,
}

impl HexMap {
    /// Build a map over the given tiles. The edge and corner sets are
    /// derived by enumerating every tile's edges and corners, wrapping
    /// them, and keeping the first occurrence of each. Fails on an empty
    /// tile set.
    pub fn new(
        tiles: Vec<TilePoint>,
        wrapping: Wrapping,
    ) -> anyhow::Result<Self> {
        if tiles.is_empty() {
            bail!("cannot build a map from an empty tile set");
        }

        let tile_set: IndexSet<TilePoint, FnvBuildHasher> = tiles
            .into_iter()
            .map(|tile| wrapping.wrap_tile(tile))
            .collect();

        let mut edge_set: IndexSet<EdgePoint, FnvBuildHasher> =
            IndexSet::default();
        let mut corner_set: IndexSet<CornerPoint, FnvBuildHasher> =
            IndexSet::default();
        for &tile in &tile_set {
            for edge in edges::of_tile(tile) {
                edge_set.insert(wrapping.wrap_edge(edge));
            }
            for corner in corners::of_tile(tile) {
                corner_set.insert(wrapping.wrap_corner(corner));
            }
        }

        let size = MapSizeData::from_tiles(tile_set.iter());
        log::info!(
            "built hex map: {} tiles, {} edges, {} corners",
            tile_set.len(),
            edge_set.len(),
            corner_set.len()
        );

        Ok(Self {
            tiles: tile_set,
            edges: edge_set,
            corners: corner_set,
            wrapping,
            size,
        })
    }

    pub fn wrapping(&self) -> Wrapping {
        self.wrapping
    }

    pub fn size(&self) -> MapSizeData {
        self.size
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn corner_count(&self) -> usize {
        self.corners.len()
    }

    /// All tiles, in index order.
    pub fn tiles(&self) -> impl Iterator<Item = TilePoint> + '_ {
        self.tiles.iter().copied()
    }

    /// All edges, in index order.
    pub fn edges(&self) -> impl Iterator<Item = EdgePoint> + '_ {
        self.edges.iter().copied()
    }

    /// All corners, in index order.
    pub fn corners(&self) -> impl Iterator<Item = CornerPoint> + '_ {
        self.corners.iter().copied()
    }

    pub fn contains_tile(&self, tile: TilePoint) -> bool {
        self.tiles.contains(&self.wrapping.wrap_tile(tile))
    }

    pub fn contains_edge(&self, edge: EdgePoint) -> bool {
        self.edges.contains(&self.wrapping.wrap_edge(edge))
    }

    pub fn contains_corner(&self, corner: CornerPoint) -> bool {
        self.corners.contains(&self.wrapping.wrap_corner(corner))
    }

    /// The dense index of a tile, if it is on the map.
    pub fn tile_index(&self, tile: TilePoint) -> Option<usize> {
        self.tiles.get_index_of(&self.wrapping.wrap_tile(tile))
    }

    /// The dense index of an edge, if it is on the map.
    pub fn edge_index(&self, edge: EdgePoint) -> Option<usize> {
        self.edges.get_index_of(&self.wrapping.wrap_edge(edge))
    }

    /// The dense index of a corner, if it is on the map.
    pub fn corner_index(&self, corner: CornerPoint) -> Option<usize> {
        self.corners.get_index_of(&self.wrapping.wrap_corner(corner))
    }

    pub fn tile_at(&self, index: usize) -> Option<TilePoint> {
        self.tiles.get_index(index).copied()
    }

    pub fn edge_at(&self, index: usize) -> Option<EdgePoint> {
        self.edges.get_index(index).copied()
    }

    pub fn corner_at(&self, index: usize) -> Option<CornerPoint> {
        self.corners.get_index(index).copied()
    }

    // === Data layers ===

    /// A [DataLayer] with one copy of `value` per tile.
    pub fn tile_layer<T: Clone>(&self, value: T) -> DataLayer<T> {
        DataLayer::filled(self.tiles.len(), value)
    }

    /// A [DataLayer] with one slot per tile, initialized from the tile it
    /// belongs to.
    pub fn tile_layer_with<T>(
        &self,
        mut f: impl FnMut(TilePoint) -> T,
    ) -> DataLayer<T> {
        self.tiles().map(&mut f).collect()
    }

    pub fn edge_layer<T: Clone>(&self, value: T) -> DataLayer<T> {
        DataLayer::filled(self.edges.len(), value)
    }

    pub fn edge_layer_with<T>(
        &self,
        mut f: impl FnMut(EdgePoint) -> T,
    ) -> DataLayer<T> {
        self.edges().map(&mut f).collect()
    }

    pub fn corner_layer<T: Clone>(&self, value: T) -> DataLayer<T> {
        DataLayer::filled(self.corners.len(), value)
    }

    pub fn corner_layer_with<T>(
        &self,
        mut f: impl FnMut(CornerPoint) -> T,
    ) -> DataLayer<T> {
        self.corners().map(&mut f).collect()
    }

    // === Tile queries ===

    /// The on-map neighbors of a tile, at most 6.
    pub fn adjacent_tiles(&self, tile: TilePoint) -> Vec<TilePoint> {
        self.on_map_tiles(tile.adjacents().collect())
    }

    /// The on-map tiles touching an edge, at most 2.
    pub fn tiles_adjacent_to_edge(&self, edge: EdgePoint) -> Vec<TilePoint> {
        self.on_map_tiles(tiles::adjacent_to_edge(edge).to_vec())
    }

    /// The on-map tiles touching a corner, at most 3.
    pub fn tiles_adjacent_to_corner(
        &self,
        corner: CornerPoint,
    ) -> Vec<TilePoint> {
        self.on_map_tiles(tiles::adjacent_to_corner(corner).to_vec())
    }

    /// [tiles::disc] restricted to the map.
    pub fn tile_disc(
        &self,
        center: TilePoint,
        radius: u32,
        include_center: bool,
    ) -> anyhow::Result<Vec<TilePoint>> {
        let disc = tiles::disc(center, radius, include_center)?;
        Ok(self.on_map_tiles(disc))
    }

    /// [tiles::ring] restricted to the map.
    pub fn tile_ring(
        &self,
        center: TilePoint,
        radius: u32,
        thickness_inwards: u32,
    ) -> anyhow::Result<Vec<TilePoint>> {
        let ring = tiles::ring(center, radius, thickness_inwards)?;
        Ok(self.on_map_tiles(ring))
    }

    /// [tiles::ring_ordered] restricted to the map. Off-map tiles are
    /// dropped without disturbing the walk order of the rest.
    pub fn tile_ring_ordered(
        &self,
        center: TilePoint,
        radius: u32,
        start_direction: TileDirection,
        clockwise: bool,
    ) -> anyhow::Result<Vec<TilePoint>> {
        let ring =
            tiles::ring_ordered(center, radius, start_direction, clockwise)?;
        Ok(self.on_map_tiles(ring))
    }

    /// The straight line from `origin` to the nearest periodic image of
    /// `target`, restricted to the map. On a periodic map the line crosses
    /// the seam whenever that is the shorter way around.
    pub fn tile_line(
        &self,
        origin: TilePoint,
        target: TilePoint,
        include_origin: bool,
        nudge: Nudge,
    ) -> anyhow::Result<Vec<TilePoint>> {
        let target = self.wrapping.shift_tile_target(origin, target);
        let line = tiles::line(origin, target, include_origin, nudge)?;
        Ok(self.on_map_tiles(line))
    }

    /// [tiles::cone] restricted to the map.
    pub fn tile_cone(
        &self,
        origin: TilePoint,
        direction: HexVector,
        half_angle_degrees: f64,
        length: u32,
    ) -> anyhow::Result<Vec<TilePoint>> {
        let cone = tiles::cone(origin, direction, half_angle_degrees, length)?;
        Ok(self.on_map_tiles(cone))
    }

    /// [tiles::contiguous_areas] with map adjacency: on a periodic map,
    /// tiles touching across the seam belong to the same area.
    pub fn contiguous_tile_areas(
        &self,
        input: &[TilePoint],
    ) -> Vec<Vec<TilePoint>> {
        let mut unused: IndexSet<TilePoint, FnvBuildHasher> = input
            .iter()
            .map(|&tile| self.wrapping.wrap_tile(tile))
            .collect();
        let mut areas = Vec::new();

        while let Some(&seed) = unused.get_index(0) {
            unused.shift_remove(&seed);
            let mut area = Vec::new();
            let mut queue = VecDeque::new();
            queue.push_back(seed);
            while let Some(tile) = queue.pop_front() {
                area.push(tile);
                for neighbor in tile.adjacents() {
                    let neighbor = self.wrapping.wrap_tile(neighbor);
                    if unused.shift_remove(&neighbor) {
                        queue.push_back(neighbor);
                    }
                }
            }
            areas.push(area);
        }
        areas
    }

    /// `tile` rotated 60° clockwise about `center`, using the image of
    /// `tile` nearest to the center, wrapped back onto the map's canonical
    /// columns. The result may be off the map.
    pub fn rotated_tile_cw(
        &self,
        tile: TilePoint,
        center: TilePoint,
    ) -> TilePoint {
        let tile = self.wrapping.shift_tile_target(center, tile);
        self.wrapping.wrap_tile(tile.rotated_cw_about(center))
    }

    /// [Self::rotated_tile_cw], counter-clockwise.
    pub fn rotated_tile_ccw(
        &self,
        tile: TilePoint,
        center: TilePoint,
    ) -> TilePoint {
        let tile = self.wrapping.shift_tile_target(center, tile);
        self.wrapping.wrap_tile(tile.rotated_ccw_about(center))
    }

    /// The on-map tile containing a cartesian position, if any. The
    /// position is wrapped onto the map's period first.
    pub fn tile_from_cartesian(&self, pos: WorldPoint) -> Option<TilePoint> {
        let pos = self.wrapping.wrap_cartesian(pos);
        let tile = self.wrapping.wrap_tile(TilePoint::from_cartesian(pos));
        self.tiles.contains(&tile).then_some(tile)
    }

    // === Distances ===

    /// Tile distance, measured the short way around on a periodic map.
    pub fn tile_distance(&self, a: TilePoint, b: TilePoint) -> u32 {
        distance::between_tiles(a, self.wrapping.shift_tile_target(a, b))
    }

    /// Cartesian distance between tile centers, measured the short way
    /// around on a periodic map.
    pub fn tile_distance_euclidean(&self, a: TilePoint, b: TilePoint) -> f64 {
        distance::between_tiles_euclidean(
            a,
            self.wrapping.shift_tile_target(a, b),
        )
    }

    pub fn edge_distance(&self, a: EdgePoint, b: EdgePoint) -> u32 {
        distance::between_edges(a, self.wrapping.shift_edge_target(a, b))
    }

    pub fn edge_distance_euclidean(&self, a: EdgePoint, b: EdgePoint) -> f64 {
        distance::between_edges_euclidean(
            a,
            self.wrapping.shift_edge_target(a, b),
        )
    }

    pub fn corner_distance(&self, a: CornerPoint, b: CornerPoint) -> u32 {
        distance::between_corners(a, self.wrapping.shift_corner_target(a, b))
    }

    pub fn corner_distance_euclidean(
        &self,
        a: CornerPoint,
        b: CornerPoint,
    ) -> f64 {
        distance::between_corners_euclidean(
            a,
            self.wrapping.shift_corner_target(a, b),
        )
    }

    // === Edge queries ===

    /// The 6 edges of a tile in canonical coordinates. Unlike the other
    /// edge queries this never filters: every edge of an on-map tile is on
    /// the map.
    pub fn edges_of_tile(&self, tile: TilePoint) -> [EdgePoint; 6] {
        edges::of_tile(tile).map(|edge| self.wrapping.wrap_edge(edge))
    }

    /// The on-map edges sharing a corner with this edge, at most 4.
    pub fn adjacent_edges(&self, edge: EdgePoint) -> Vec<EdgePoint> {
        self.on_map_edges(edges::adjacent_to_edge(edge).to_vec())
    }

    /// The on-map edges meeting at a corner, at most 3.
    pub fn edges_adjacent_to_corner(
        &self,
        corner: CornerPoint,
    ) -> Vec<EdgePoint> {
        self.on_map_edges(edges::adjacent_to_corner(corner).to_vec())
    }

    pub fn edges_within_distance_of_edge(
        &self,
        center: EdgePoint,
        max_distance: u32,
        include_center: bool,
    ) -> Vec<EdgePoint> {
        self.on_map_edges(edges::within_distance_of_edge(
            center,
            max_distance,
            include_center,
        ))
    }

    pub fn edges_within_distance_of_corner(
        &self,
        corner: CornerPoint,
        max_distance: u32,
    ) -> Vec<EdgePoint> {
        self.on_map_edges(edges::within_distance_of_corner(
            corner,
            max_distance,
        ))
    }

    pub fn edges_at_exact_distance(
        &self,
        center: EdgePoint,
        dist: u32,
    ) -> Vec<EdgePoint> {
        self.on_map_edges(edges::at_exact_distance(center, dist))
    }

    /// The edge shared by two tiles, which on a periodic map may straddle
    /// the seam. Fails unless the tiles are adjacent on the map.
    pub fn edge_between_tiles(
        &self,
        a: TilePoint,
        b: TilePoint,
    ) -> anyhow::Result<EdgePoint> {
        let b = self.wrapping.shift_tile_target(a, b);
        let edge = edges::between_tiles(a, b)?;
        Ok(self.wrapping.wrap_edge(edge))
    }

    /// The edge between two corners. Fails unless the corners are adjacent
    /// on the map.
    pub fn edge_between_corners(
        &self,
        a: CornerPoint,
        b: CornerPoint,
    ) -> anyhow::Result<EdgePoint> {
        let b = self.wrapping.shift_corner_target(a, b);
        let edge = edges::between_corners(a, b)?;
        Ok(self.wrapping.wrap_edge(edge))
    }

    /// The shortest run of on-map edges from `origin` to the nearest
    /// periodic image of `target` corner.
    pub fn edge_path_between_corners(
        &self,
        origin: CornerPoint,
        target: CornerPoint,
        nudge: Nudge,
    ) -> anyhow::Result<Vec<EdgePoint>> {
        let target = self.wrapping.shift_corner_target(origin, target);
        let path = edges::path_between_corners(origin, target, nudge)?;
        Ok(self.on_map_edges(path))
    }

    /// [edges::tile_borders] in canonical coordinates: the XOR runs over
    /// wrapped edges, so a tile area crossing the seam has no phantom
    /// border there.
    pub fn tile_border_edges(&self, input: &[TilePoint]) -> Vec<EdgePoint> {
        let mut border: Vec<EdgePoint> = Vec::new();
        for tile in input {
            for edge in self.edges_of_tile(*tile) {
                if let Some(position) =
                    border.iter().position(|&e| e == edge)
                {
                    border.remove(position);
                } else {
                    border.push(edge);
                }
            }
        }
        border
    }

    /// The border loops of the input tiles, traced in canonical
    /// coordinates so loops may cross the seam of a periodic map. Same
    /// orientation contract as [edges::border_paths]. Fails on inputs
    /// whose borders do not form closed loops.
    pub fn border_paths(
        &self,
        input: &[TilePoint],
    ) -> anyhow::Result<Vec<BorderPath>> {
        let mut unused: IndexSet<EdgePoint, FnvBuildHasher> =
            self.tile_border_edges(input).into_iter().collect();
        // A single loop can never be longer than the whole border
        let cap = unused.len();
        let mut paths: Vec<BorderPath> = Vec::new();

        while !unused.is_empty() {
            let start = unused
                .iter()
                .copied()
                .filter(|edge| edge.alignment() == EdgeAlignment::ParallelX)
                .max_by_key(|edge| (edge.y(), edge.x()));
            let start = match start {
                Some(edge) => edge,
                None => bail!(
                    "untraced border edges contain no x-parallel edge; \
                     the input does not form closed tile borders"
                ),
            };

            let mut path_edges = Vec::new();
            let mut directions = Vec::new();
            let mut current = start;
            let mut direction = EdgeDirection::BottomRight;

            loop {
                if path_edges.len() > cap {
                    bail!(
                        "border walk exceeded {} edges without closing; \
                         the input does not form closed tile borders",
                        cap
                    );
                }
                path_edges.push(current);
                directions.push(direction);
                unused.shift_remove(&current);

                // Prefer turning counter-clockwise, so the walk hugs the
                // area; candidates are wrapped before the membership test
                let ccw = self
                    .wrapping
                    .wrap_edge(current + direction.ccw_neighbor_offset());
                let cw = self
                    .wrapping
                    .wrap_edge(current + direction.cw_neighbor_offset());
                if unused.contains(&ccw) {
                    current = ccw;
                    direction = direction.rotated_ccw();
                } else if unused.contains(&cw) {
                    current = cw;
                    direction = direction.rotated_cw();
                } else {
                    break;
                }
            }
            paths.push(BorderPath {
                edges: path_edges,
                directions,
            });
        }

        for path in paths.iter_mut().skip(1) {
            path.edges.reverse();
            path.directions.reverse();
            for direction in &mut path.directions {
                *direction = direction.opposite();
            }
        }
        Ok(paths)
    }

    /// The on-map edge closest to a cartesian position, if any. The
    /// position is wrapped onto the map's period first.
    pub fn edge_from_cartesian(&self, pos: WorldPoint) -> Option<EdgePoint> {
        let pos = self.wrapping.wrap_cartesian(pos);
        let edge = self.wrapping.wrap_edge(edges::closest_to_cartesian(pos));
        self.edges.contains(&edge).then_some(edge)
    }

    // === Corner queries ===

    /// The 6 corners of a tile in canonical coordinates, never filtered.
    pub fn corners_of_tile(&self, tile: TilePoint) -> [CornerPoint; 6] {
        corners::of_tile(tile).map(|corner| self.wrapping.wrap_corner(corner))
    }

    /// The 2 end corners of an edge in canonical coordinates, never
    /// filtered.
    pub fn corners_of_edge(&self, edge: EdgePoint) -> [CornerPoint; 2] {
        corners::of_edge(edge).map(|corner| self.wrapping.wrap_corner(corner))
    }

    /// The on-map corners one step from this corner, at most 3.
    pub fn adjacent_corners(&self, corner: CornerPoint) -> Vec<CornerPoint> {
        self.on_map_corners(corners::adjacent_to_corner(corner).to_vec())
    }

    pub fn corners_within_distance(
        &self,
        center: CornerPoint,
        max_distance: u32,
        include_center: bool,
    ) -> Vec<CornerPoint> {
        self.on_map_corners(corners::within_distance(
            center,
            max_distance,
            include_center,
        ))
    }

    pub fn corners_at_exact_distance(
        &self,
        center: CornerPoint,
        dist: u32,
    ) -> Vec<CornerPoint> {
        self.on_map_corners(corners::at_exact_distance(center, dist))
    }

    /// The corner shared by three mutually adjacent tiles, adjacency taken
    /// on the map. Fails otherwise.
    pub fn corner_between_tiles(
        &self,
        a: TilePoint,
        b: TilePoint,
        c: TilePoint,
    ) -> anyhow::Result<CornerPoint> {
        let b = self.wrapping.shift_tile_target(a, b);
        let c = self.wrapping.shift_tile_target(a, c);
        let corner = corners::between_tiles(a, b, c)?;
        Ok(self.wrapping.wrap_corner(corner))
    }

    /// The shortest run of corners along the grid lines from `origin` to
    /// the nearest periodic image of `target`, in canonical coordinates.
    pub fn corner_path_along_grid(
        &self,
        origin: CornerPoint,
        target: CornerPoint,
        include_origin: bool,
        nudge: Nudge,
    ) -> anyhow::Result<Vec<CornerPoint>> {
        let target = self.wrapping.shift_corner_target(origin, target);
        let path =
            corners::path_along_grid(origin, target, include_origin, nudge)?;
        Ok(self.wrapping.wrap_corners(path))
    }

    /// [corners::tile_border_corners] in canonical coordinates: touch
    /// counts accumulate on wrapped corners, so an area crossing the seam
    /// has no phantom border corners there.
    pub fn tile_border_corners(
        &self,
        input: &[TilePoint],
    ) -> Vec<CornerPoint> {
        let mut touching_tiles: indexmap::IndexMap<
            CornerPoint,
            u32,
            FnvBuildHasher,
        > = indexmap::IndexMap::default();
        for tile in input {
            for corner in self.corners_of_tile(*tile) {
                *touching_tiles.entry(corner).or_insert(0) += 1;
            }
        }
        touching_tiles
            .into_iter()
            .filter(|&(_, count)| count < 3)
            .map(|(corner, _)| corner)
            .collect()
    }

    /// The on-map corner closest to a cartesian position, if any. The
    /// position is wrapped onto the map's period first.
    pub fn corner_from_cartesian(
        &self,
        pos: WorldPoint,
    ) -> Option<CornerPoint> {
        let pos = self.wrapping.wrap_cartesian(pos);
        let corner =
            self.wrapping.wrap_corner(corners::closest_to_cartesian(pos));
        self.corners.contains(&corner).then_some(corner)
    }

    // === Normalized positions ===

    /// Where a tile's center falls within the map's bounding box, as
    /// `[0, 1]` fractions per axis.
    pub fn normalized_tile_position(
        &self,
        tile: TilePoint,
    ) -> nalgebra::Point2<f64> {
        self.size
            .normalized_position(self.wrapping.wrap_tile(tile).to_cartesian())
    }

    /// [Self::normalized_tile_position] for an edge midpoint.
    pub fn normalized_edge_position(
        &self,
        edge: EdgePoint,
    ) -> nalgebra::Point2<f64> {
        self.size
            .normalized_position(self.wrapping.wrap_edge(edge).to_cartesian())
    }

    /// [Self::normalized_tile_position] for a corner.
    pub fn normalized_corner_position(
        &self,
        corner: CornerPoint,
    ) -> nalgebra::Point2<f64> {
        self.size.normalized_position(
            self.wrapping.wrap_corner(corner).to_cartesian(),
        )
    }

    /// Where a cartesian position falls within the map's bounding box,
    /// after wrapping it onto the map's period.
    pub fn normalized_cartesian_position(
        &self,
        pos: WorldPoint,
    ) -> nalgebra::Point2<f64> {
        self.size
            .normalized_position(self.wrapping.wrap_cartesian(pos))
    }

    // === Helpers ===

    /// Wrap a batch of tiles and drop the ones not on the map, preserving
    /// order.
    fn on_map_tiles(&self, tiles: Vec<TilePoint>) -> Vec<TilePoint> {
        self.wrapping
            .wrap_tiles(tiles)
            .into_iter()
            .filter(|tile| self.tiles.contains(tile))
            .collect()
    }

    fn on_map_edges(&self, edges: Vec<EdgePoint>) -> Vec<EdgePoint> {
        self.wrapping
            .wrap_edges(edges)
            .into_iter()
            .filter(|edge| self.edges.contains(edge))
            .collect()
    }

    fn on_map_corners(&self, corners: Vec<CornerPoint>) -> Vec<CornerPoint> {
        self.wrapping
            .wrap_corners(corners)
            .into_iter()
            .filter(|corner| self.corners.contains(corner))
            .collect()
    }
}
