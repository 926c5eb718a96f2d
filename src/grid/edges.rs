//! Edge-level queries: the edge ring of a tile, edge adjacency and
//! distance, edges shared between elements, and border tracing over tile
//! sets.

use crate::{
    grid::{corners, distance, tiles, Nudge},
    hex::{
        CornerPoint, EdgeAlignment, EdgeDirection, EdgePoint, HexVector,
        TilePoint, WorldPoint,
    },
    util::cmp_unwrap,
};
use anyhow::bail;
use fnv::FnvBuildHasher;
use indexmap::IndexSet;

/// The 6 edges of a tile, clockwise starting at the right edge. An edge
/// coordinate is the sum of its two tiles, i.e. `2 * tile + direction`.
pub fn of_tile(tile: TilePoint) -> [EdgePoint; 6] {
    let x = 2 * tile.x();
    let y = 2 * tile.y();
    [
        EdgePoint::new_xy(x + 1, y),
        EdgePoint::new_xy(x + 1, y - 1),
        EdgePoint::new_xy(x, y - 1),
        EdgePoint::new_xy(x - 1, y),
        EdgePoint::new_xy(x - 1, y + 1),
        EdgePoint::new_xy(x, y + 1),
    ]
}

/// The 4 edges sharing a corner with the given edge, clockwise from the
/// edge's top-right side.
pub fn adjacent_to_edge(edge: EdgePoint) -> [EdgePoint; 4] {
    let offsets = match edge.alignment() {
        EdgeAlignment::ParallelY => {
            // top right, bottom right, bottom left, top left
            [(0, 1), (1, -1), (0, -1), (-1, 1)]
        }
        EdgeAlignment::ParallelX => {
            // right, bottom, left, top
            [(1, 0), (1, -1), (-1, 0), (-1, 1)]
        }
        EdgeAlignment::ParallelZ => {
            // right, bottom, left, top
            [(1, 0), (0, -1), (-1, 0), (0, 1)]
        }
    };
    offsets.map(|(dx, dy)| edge + HexVector::new(dx, dy))
}

/// The 3 edges meeting at the given corner: one between each pair of the
/// corner's tiles.
pub fn adjacent_to_corner(corner: CornerPoint) -> [EdgePoint; 3] {
    let [a, b, c] = tiles::adjacent_to_corner(corner);
    let sum = |s: TilePoint, t: TilePoint| {
        EdgePoint::new_xy(s.x() + t.x(), s.y() + t.y())
    };
    [sum(a, b), sum(a, c), sum(b, c)]
}

/// All edges reachable from `center` in at most `max_distance` adjacency
/// steps, optionally including the center edge itself.
pub fn within_distance_of_edge(
    center: EdgePoint,
    max_distance: u32,
    include_center: bool,
) -> Vec<EdgePoint> {
    let mut in_range: IndexSet<EdgePoint, FnvBuildHasher> =
        IndexSet::default();
    let mut frontier: IndexSet<EdgePoint, FnvBuildHasher> =
        IndexSet::default();
    frontier.insert(center);

    for _ in 0..=max_distance {
        let mut next_frontier: IndexSet<EdgePoint, FnvBuildHasher> =
            IndexSet::default();
        for &edge in &frontier {
            in_range.insert(edge);
            for adjacent in adjacent_to_edge(edge) {
                if !in_range.contains(&adjacent) {
                    next_frontier.insert(adjacent);
                }
            }
        }
        frontier = next_frontier;
    }

    if !include_center {
        in_range.shift_remove(&center);
    }
    in_range.into_iter().collect()
}

/// All edges reachable from the given corner in at most `max_distance`
/// adjacency steps. The 3 edges at the corner itself have distance 1.
pub fn within_distance_of_corner(
    corner: CornerPoint,
    max_distance: u32,
) -> Vec<EdgePoint> {
    if max_distance == 0 {
        return Vec::new();
    }
    let mut in_range: IndexSet<EdgePoint, FnvBuildHasher> =
        IndexSet::default();
    let mut frontier: IndexSet<EdgePoint, FnvBuildHasher> =
        adjacent_to_corner(corner).into_iter().collect();

    for _ in 1..=max_distance {
        let mut next_frontier: IndexSet<EdgePoint, FnvBuildHasher> =
            IndexSet::default();
        for &edge in &frontier {
            in_range.insert(edge);
            for adjacent in adjacent_to_edge(edge) {
                if !in_range.contains(&adjacent) {
                    next_frontier.insert(adjacent);
                }
            }
        }
        frontier = next_frontier;
    }
    in_range.into_iter().collect()
}

/// All edges at exactly `dist` edge steps from `center`.
pub fn at_exact_distance(center: EdgePoint, dist: u32) -> Vec<EdgePoint> {
    within_distance_of_edge(center, dist, true)
        .into_iter()
        .filter(|&edge| distance::between_edges(edge, center) == dist)
        .collect()
}

/// The edge shared by two tiles. Fails unless the tiles are adjacent.
pub fn between_tiles(
    a: TilePoint,
    b: TilePoint,
) -> anyhow::Result<EdgePoint> {
    if distance::between_tiles(a, b) != 1 {
        bail!(
            "tiles {} and {} are not adjacent and share no edge",
            a,
            b
        );
    }
    Ok(EdgePoint::new_xy(a.x() + b.x(), a.y() + b.y()))
}

/// The edge between two corners. Fails unless the corners are adjacent.
pub fn between_corners(
    a: CornerPoint,
    b: CornerPoint,
) -> anyhow::Result<EdgePoint> {
    if distance::between_corners(a, b) != 1 {
        bail!(
            "corners {} and {} are not adjacent and share no edge",
            a,
            b
        );
    }
    // The sum of two adjacent corners is 3 times their shared edge
    Ok(EdgePoint::new_xy((a.x() + b.x()) / 3, (a.y() + b.y()) / 3))
}

/// The shortest run of edges leading from `origin` to `target` corner.
/// Fails if the corners are the same.
pub fn path_between_corners(
    origin: CornerPoint,
    target: CornerPoint,
    nudge: Nudge,
) -> anyhow::Result<Vec<EdgePoint>> {
    let corner_path = corners::path_along_grid(origin, target, true, nudge)?;
    let mut edges = Vec::with_capacity(corner_path.len() - 1);
    for pair in corner_path.windows(2) {
        edges.push(between_corners(pair[0], pair[1])?);
    }
    Ok(edges)
}

/// All edges adjacent to exactly one tile of the input set, i.e. the
/// borders of the covered area (outer border and hole borders alike).
pub fn tile_borders(input: &[TilePoint]) -> Vec<EdgePoint> {
    let mut edges: Vec<EdgePoint> = Vec::new();
    for tile in input {
        // Interior edges are visited by both of their tiles and cancel out
        for edge in of_tile(*tile) {
            if let Some(position) = edges.iter().position(|&e| e == edge) {
                edges.remove(position);
            } else {
                edges.push(edge);
            }
        }
    }
    edges
}

/// One closed border loop of a tile area: the edges in walk order plus the
/// heading of each step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BorderPath {
    pub edges: Vec<EdgePoint>,
    pub directions: Vec<EdgeDirection>,
}

impl BorderPath {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// The border loops of the input tiles, one [BorderPath] per loop. The
/// outer border of each contiguous area runs clockwise, borders enclosing
/// holes run counter-clockwise.
///
/// Fails if the traced borders ever lack an x-parallel edge to start a loop
/// from, which cannot happen for borders produced from an actual tile set.
pub fn border_paths(input: &[TilePoint]) -> anyhow::Result<Vec<BorderPath>> {
    let mut unused: IndexSet<EdgePoint, FnvBuildHasher> =
        tile_borders(input).into_iter().collect();
    let mut paths: Vec<BorderPath> = Vec::new();

    while !unused.is_empty() {
        // Start each loop at the top-right-most x-parallel edge, heading
        // bottom-right, which makes the first traced loop clockwise
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

        let mut edges = Vec::new();
        let mut directions = Vec::new();
        let mut current = start;
        let mut direction = EdgeDirection::BottomRight;

        loop {
            edges.push(current);
            directions.push(direction);
            unused.shift_remove(&current);

            // Prefer turning counter-clockwise, so the walk hugs the area
            let ccw = current + direction.ccw_neighbor_offset();
            let cw = current + direction.cw_neighbor_offset();
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
        paths.push(BorderPath { edges, directions });
    }

    // The first path is the outer border; all later ones enclose holes and
    // get flipped to run counter-clockwise
    for path in paths.iter_mut().skip(1) {
        path.edges.reverse();
        path.directions.reverse();
        for direction in &mut path.directions {
            *direction = direction.opposite();
        }
    }
    Ok(paths)
}

/// The edge whose midpoint is closest to the given cartesian position.
pub fn closest_to_cartesian(pos: WorldPoint) -> EdgePoint {
    let tile = TilePoint::from_cartesian(pos);
    let target = pos.xz();
    // 6 candidates, so min_by never sees an empty iterator
    of_tile(tile)
        .into_iter()
        .min_by(|a, b| {
            cmp_unwrap(
                &nalgebra::distance(&a.to_cartesian().xz(), &target),
                &nalgebra::distance(&b.to_cartesian().xz(), &target),
            )
        })
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::tiles::disc;

    #[test]
    fn test_of_tile() {
        let edges = of_tile(TilePoint::ORIGIN);
        assert_eq!(edges[0], EdgePoint::new_xy(1, 0)); // right
        assert_eq!(edges[3], EdgePoint::new_xy(-1, 0)); // left
        assert_eq!(edges[5], EdgePoint::new_xy(0, 1)); // top right
        // Each edge is adjacent to the tile it came from
        for edge in edges {
            assert!(tiles::adjacent_to_edge(edge)
                .contains(&TilePoint::ORIGIN));
        }
    }

    #[test]
    fn test_adjacent_to_edge() {
        // Any edge's 4 neighbors are all at edge distance 1 and distinct
        for edge in of_tile(TilePoint::new_xy(-2, 3)) {
            let adjacent = adjacent_to_edge(edge);
            for (i, a) in adjacent.iter().enumerate() {
                assert_eq!(distance::between_edges(edge, *a), 1);
                for b in adjacent.iter().skip(i + 1) {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_adjacent_to_corner() {
        // Top corner of the origin tile touches its top-left and top-right
        // edges plus the y-parallel edge going further up
        let edges = adjacent_to_corner(CornerPoint::new_xy(-1, 2));
        assert!(edges.contains(&EdgePoint::new_xy(0, 1)));
        assert!(edges.contains(&EdgePoint::new_xy(-1, 1)));
        assert!(edges.contains(&EdgePoint::new_xy(-1, 2)));
    }

    #[test]
    fn test_within_distance_of_edge() {
        let center = EdgePoint::new_xy(1, 0);
        let within = within_distance_of_edge(center, 1, true);
        assert_eq!(within.len(), 5);
        assert!(within.contains(&center));

        let without = within_distance_of_edge(center, 1, false);
        assert_eq!(without.len(), 4);
        assert!(!without.contains(&center));
    }

    #[test]
    fn test_within_distance_of_corner() {
        assert!(within_distance_of_corner(CornerPoint::new_xy(-1, 2), 0)
            .is_empty());
        let within = within_distance_of_corner(CornerPoint::new_xy(-1, 2), 1);
        assert_eq!(within.len(), 3);
    }

    #[test]
    fn test_at_exact_distance() {
        let center = EdgePoint::new_xy(1, 0);
        let exact = at_exact_distance(center, 1);
        assert_eq!(exact.len(), 4);
        for edge in exact {
            assert_eq!(distance::between_edges(center, edge), 1);
        }
    }

    #[test]
    fn test_between_tiles() {
        let edge =
            between_tiles(TilePoint::ORIGIN, TilePoint::new_xy(1, 0))
                .unwrap();
        assert_eq!(edge, EdgePoint::new_xy(1, 0));
        // Non-adjacent tiles share no edge
        assert!(
            between_tiles(TilePoint::ORIGIN, TilePoint::new_xy(2, 0))
                .is_err()
        );
    }

    #[test]
    fn test_between_corners() {
        // Top and top-right corners of the origin tile share its top-right
        // edge
        let edge = between_corners(
            CornerPoint::new_xy(-1, 2),
            CornerPoint::new_xy(1, 1),
        )
        .unwrap();
        assert_eq!(edge, EdgePoint::new_xy(0, 1));
        assert!(between_corners(
            CornerPoint::new_xy(-1, 2),
            CornerPoint::new_xy(1, -2),
        )
        .is_err());
    }

    #[test]
    fn test_path_between_corners() {
        let origin = CornerPoint::new_xy(1, -2);
        let target = CornerPoint::new_xy(-1, 2);
        let path =
            path_between_corners(origin, target, Nudge::Positive).unwrap();
        assert_eq!(path.len(), 3);
        // Path edges are pairwise distinct and consecutive ones adjacent
        for (i, a) in path.iter().enumerate() {
            for b in path.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        // First and last edges touch the endpoint corners
        assert!(adjacent_to_corner(origin).contains(&path[0]));
        assert!(adjacent_to_corner(target).contains(&path[2]));
    }

    #[test]
    fn test_tile_borders() {
        // A single tile: all 6 edges are borders
        let single = tile_borders(&[TilePoint::ORIGIN]);
        assert_eq!(single.len(), 6);

        // Two adjacent tiles: the shared edge cancels
        let pair =
            tile_borders(&[TilePoint::ORIGIN, TilePoint::new_xy(1, 0)]);
        assert_eq!(pair.len(), 10);
        assert!(!pair.contains(&EdgePoint::new_xy(1, 0)));

        // A disc of radius 1: border is the outline of 7 tiles
        let blob = disc(TilePoint::ORIGIN, 1, true).unwrap();
        assert_eq!(tile_borders(&blob).len(), 18);
    }

    #[test]
    fn test_border_paths_single_area() {
        let blob = disc(TilePoint::ORIGIN, 1, true).unwrap();
        let paths = border_paths(&blob).unwrap();
        assert_eq!(paths.len(), 1);
        let path = &paths[0];
        assert_eq!(path.len(), 18);
        assert_eq!(path.directions.len(), 18);
        // The walk uses every border edge exactly once
        let as_set: IndexSet<EdgePoint, FnvBuildHasher> =
            path.edges.iter().copied().collect();
        assert_eq!(as_set.len(), 18);
    }

    #[test]
    fn test_border_paths_with_hole() {
        // A radius-2 disc with the center missing has an outer border and
        // an inner one around the hole
        let mut blob = disc(TilePoint::ORIGIN, 2, true).unwrap();
        blob.retain(|&tile| tile != TilePoint::ORIGIN);
        let paths = border_paths(&blob).unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].len(), 30);
        assert_eq!(paths[1].len(), 6);
        // The hole border consists of the center tile's own edges
        for edge in &paths[1].edges {
            assert!(of_tile(TilePoint::ORIGIN).contains(edge));
        }
    }

    #[test]
    fn test_closest_to_cartesian() {
        // Right on an edge midpoint
        let edge = EdgePoint::new_xy(1, 0);
        assert_eq!(closest_to_cartesian(edge.to_cartesian()), edge);
        // Slightly off the midpoint still resolves to the same edge
        let pos = edge.to_cartesian();
        let nudged = WorldPoint::new(pos.x + 0.05, 0.0, pos.z + 0.05);
        assert_eq!(closest_to_cartesian(nudged), edge);
    }
}
