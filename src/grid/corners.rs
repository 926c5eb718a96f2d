//! Corner-level queries: the corner ring of a tile, corner adjacency and
//! distance, shared corners, and corner paths along the grid lines.

use crate::{
    grid::{distance, tiles, Nudge},
    hex::{
        CornerPoint, CornerType, EdgeAlignment, EdgePoint, HexVector,
        TilePoint, WorldPoint,
    },
    util::cmp_unwrap,
};
use anyhow::{anyhow, bail};
use fnv::FnvBuildHasher;
use indexmap::{IndexMap, IndexSet};

/// The 6 corners of a tile, clockwise starting at the top. A corner
/// coordinate is the sum of its three tiles, i.e. `3 * tile` plus a
/// per-corner offset.
pub fn of_tile(tile: TilePoint) -> [CornerPoint; 6] {
    let x = 3 * tile.x();
    let y = 3 * tile.y();
    [
        CornerPoint::new_xy(x - 1, y + 2), // top
        CornerPoint::new_xy(x + 1, y + 1), // top right
        CornerPoint::new_xy(x + 2, y - 1), // bottom right
        CornerPoint::new_xy(x + 1, y - 2), // bottom
        CornerPoint::new_xy(x - 1, y - 1), // bottom left
        CornerPoint::new_xy(x - 2, y + 1), // top left
    ]
}

/// The 2 corners terminating the given edge.
pub fn of_edge(edge: EdgePoint) -> [CornerPoint; 2] {
    let x = 3 * edge.x();
    let y = 3 * edge.y();
    // One exact halving per alignment class
    match edge.alignment() {
        EdgeAlignment::ParallelX => [
            CornerPoint::new_xy((x - 2) / 2, (y + 1) / 2),
            CornerPoint::new_xy((x + 2) / 2, (y - 1) / 2),
        ],
        EdgeAlignment::ParallelY => [
            CornerPoint::new_xy((x - 1) / 2, (y + 2) / 2),
            CornerPoint::new_xy((x + 1) / 2, (y - 2) / 2),
        ],
        EdgeAlignment::ParallelZ => [
            CornerPoint::new_xy((x + 1) / 2, (y + 1) / 2),
            CornerPoint::new_xy((x - 1) / 2, (y - 1) / 2),
        ],
    }
}

/// The 3 corners one step along the grid lines from the given corner.
pub fn adjacent_to_corner(corner: CornerPoint) -> [CornerPoint; 3] {
    let offsets = match corner.corner_type() {
        CornerType::BottomOfYEdge => [(-1, 2), (2, -1), (-1, -1)],
        CornerType::TopOfYEdge => [(1, 1), (1, -2), (-2, 1)],
    };
    offsets.map(|(dx, dy)| corner + HexVector::new(dx, dy))
}

/// All corners reachable from `center` in at most `max_distance` steps,
/// optionally including the center corner itself.
pub fn within_distance(
    center: CornerPoint,
    max_distance: u32,
    include_center: bool,
) -> Vec<CornerPoint> {
    let mut in_range: IndexSet<CornerPoint, FnvBuildHasher> =
        IndexSet::default();
    let mut frontier: IndexSet<CornerPoint, FnvBuildHasher> =
        IndexSet::default();
    frontier.insert(center);

    for _ in 0..=max_distance {
        let mut next_frontier: IndexSet<CornerPoint, FnvBuildHasher> =
            IndexSet::default();
        for &corner in &frontier {
            in_range.insert(corner);
            for adjacent in adjacent_to_corner(corner) {
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

/// All corners at exactly `dist` corner steps from `center`.
pub fn at_exact_distance(center: CornerPoint, dist: u32) -> Vec<CornerPoint> {
    within_distance(center, dist, true)
        .into_iter()
        .filter(|&corner| distance::between_corners(corner, center) == dist)
        .collect()
}

/// The corner shared by three mutually adjacent tiles. Fails unless all
/// three pairs are adjacent.
pub fn between_tiles(
    a: TilePoint,
    b: TilePoint,
    c: TilePoint,
) -> anyhow::Result<CornerPoint> {
    for (s, t) in [(a, b), (a, c), (b, c)] {
        if distance::between_tiles(s, t) != 1 {
            bail!(
                "tiles {} and {} are not adjacent and share no corner",
                s,
                t
            );
        }
    }
    Ok(CornerPoint::new_xy(
        a.x() + b.x() + c.x(),
        a.y() + b.y() + c.y(),
    ))
}

/// The shortest run of corners along the grid lines from `origin` to
/// `target`, optionally including the origin. Fails if the corners are the
/// same.
///
/// Works like tile line rasterization: sample one interpolated cartesian
/// position per corner step, then snap each sample to the adjacent corner
/// of the previous one that lies closest to it.
pub fn path_along_grid(
    origin: CornerPoint,
    target: CornerPoint,
    include_origin: bool,
    nudge: Nudge,
) -> anyhow::Result<Vec<CornerPoint>> {
    if origin == target {
        bail!("path origin and target are the same corner ({})", origin);
    }

    let mut corners = Vec::new();
    if include_origin {
        corners.push(origin);
    }
    let mut previous = origin;

    let origin_pos = origin.to_cartesian().xz()
        + nalgebra::Vector2::new(nudge.offset(), 0.0);
    let target_pos = target.to_cartesian().xz();

    let dist = distance::between_corners(origin, target);
    for i in 1..=dist {
        let t = i as f64 / dist as f64;
        let sample = origin_pos + (target_pos - origin_pos) * t;
        let tile = TilePoint::from_cartesian(WorldPoint::new(
            sample.x, 0.0, sample.y,
        ));

        // The next step is the corner of the sampled tile that is adjacent
        // to the previous corner and closest to the sample
        let next = of_tile(tile)
            .into_iter()
            .filter(|&corner| {
                distance::between_corners(previous, corner) == 1
            })
            .min_by(|a, b| {
                cmp_unwrap(
                    &nalgebra::distance(&a.to_cartesian().xz(), &sample),
                    &nalgebra::distance(&b.to_cartesian().xz(), &sample),
                )
            })
            .ok_or_else(|| {
                anyhow!(
                    "no corner adjacent to {} found near sampled tile {}",
                    previous,
                    tile
                )
            })?;

        corners.push(next);
        previous = next;
    }
    Ok(corners)
}

/// All corners of the input tiles that touch at least one tile outside the
/// set, i.e. the corners lying on the area's borders.
pub fn tile_border_corners(input: &[TilePoint]) -> Vec<CornerPoint> {
    let mut touching_tiles: IndexMap<CornerPoint, u32, FnvBuildHasher> =
        IndexMap::default();
    for tile in input {
        for corner in of_tile(*tile) {
            *touching_tiles.entry(corner).or_insert(0) += 1;
        }
    }
    // Interior corners touch all 3 of their tiles
    touching_tiles
        .into_iter()
        .filter(|&(_, count)| count < 3)
        .map(|(corner, _)| corner)
        .collect()
}

/// The corner closest to the given cartesian position.
pub fn closest_to_cartesian(pos: WorldPoint) -> CornerPoint {
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
    use crate::grid::edges;

    #[test]
    fn test_of_tile() {
        let corners = of_tile(TilePoint::ORIGIN);
        assert_eq!(
            corners,
            [
                CornerPoint::new_xy(-1, 2),
                CornerPoint::new_xy(1, 1),
                CornerPoint::new_xy(2, -1),
                CornerPoint::new_xy(1, -2),
                CornerPoint::new_xy(-1, -1),
                CornerPoint::new_xy(-2, 1),
            ]
        );
        // Every corner of a tile touches that tile
        for corner in corners {
            assert!(
                tiles::adjacent_to_corner(corner).contains(&TilePoint::ORIGIN)
            );
        }
    }

    #[test]
    fn test_of_edge() {
        // The right edge of the origin tile ends at its top-right and
        // bottom-right corners
        let [top, bottom] = of_edge(EdgePoint::new_xy(1, 0));
        assert_eq!(top, CornerPoint::new_xy(1, 1));
        assert_eq!(bottom, CornerPoint::new_xy(2, -1));

        // Both ends of every edge of a tile are corners of that tile
        let tile = TilePoint::new_xy(-1, 3);
        let tile_corners = of_tile(tile);
        for edge in edges::of_tile(tile) {
            for corner in of_edge(edge) {
                assert!(tile_corners.contains(&corner));
            }
        }
    }

    #[test]
    fn test_adjacent_to_corner() {
        // The top corner of the origin tile connects to the two adjacent
        // tile corners plus the corner further up
        let adjacent = adjacent_to_corner(CornerPoint::new_xy(-1, 2));
        assert!(adjacent.contains(&CornerPoint::new_xy(1, 1)));
        assert!(adjacent.contains(&CornerPoint::new_xy(-2, 1)));
        assert!(adjacent.contains(&CornerPoint::new_xy(-2, 4)));
        // Adjacency is symmetric and spans distance 1
        for corner in adjacent {
            assert_eq!(
                distance::between_corners(CornerPoint::new_xy(-1, 2), corner),
                1
            );
            assert!(adjacent_to_corner(corner)
                .contains(&CornerPoint::new_xy(-1, 2)));
        }
    }

    #[test]
    fn test_within_distance() {
        let center = CornerPoint::new_xy(-1, 2);
        let within = within_distance(center, 1, true);
        assert_eq!(within.len(), 4);
        let without = within_distance(center, 1, false);
        assert_eq!(without.len(), 3);
        assert!(!without.contains(&center));
    }

    #[test]
    fn test_at_exact_distance() {
        let center = CornerPoint::new_xy(-1, 2);
        assert_eq!(at_exact_distance(center, 1).len(), 3);
        let exact = at_exact_distance(center, 2);
        assert_eq!(exact.len(), 6);
        for corner in exact {
            assert_eq!(distance::between_corners(center, corner), 2);
        }
    }

    #[test]
    fn test_between_tiles() {
        let corner = between_tiles(
            TilePoint::ORIGIN,
            TilePoint::new_xy(0, 1),
            TilePoint::new_xy(-1, 1),
        )
        .unwrap();
        assert_eq!(corner, CornerPoint::new_xy(-1, 2));

        // Tiles that don't all meet share no corner
        assert!(between_tiles(
            TilePoint::ORIGIN,
            TilePoint::new_xy(0, 1),
            TilePoint::new_xy(2, 0),
        )
        .is_err());
    }

    #[test]
    fn test_path_along_grid() {
        let origin = CornerPoint::new_xy(1, -2);
        let target = CornerPoint::new_xy(-1, 2);
        let path =
            path_along_grid(origin, target, true, Nudge::Positive).unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(path[0], origin);
        assert_eq!(path[3], target);
        // Consecutive corners are adjacent
        for pair in path.windows(2) {
            assert_eq!(distance::between_corners(pair[0], pair[1]), 1);
        }

        // Without the origin
        let tail =
            path_along_grid(origin, target, false, Nudge::Positive).unwrap();
        assert_eq!(tail, path[1..]);

        assert!(
            path_along_grid(origin, origin, true, Nudge::Positive).is_err()
        );
    }

    #[test]
    fn test_tile_border_corners() {
        // A single tile: all 6 corners border the outside
        assert_eq!(tile_border_corners(&[TilePoint::ORIGIN]).len(), 6);

        // A radius-1 disc: its outline is a loop of 18 edges, so 18
        // corners; the center tile's own corners are fully interior
        let blob = tiles::disc(TilePoint::ORIGIN, 1, true).unwrap();
        let border = tile_border_corners(&blob);
        assert_eq!(border.len(), 18);
        assert!(!border.contains(&CornerPoint::new_xy(-1, 2)));
        assert!(!border.contains(&CornerPoint::new_xy(1, -2)));
    }

    #[test]
    fn test_closest_to_cartesian() {
        let corner = CornerPoint::new_xy(2, -1);
        assert_eq!(closest_to_cartesian(corner.to_cartesian()), corner);
        let pos = corner.to_cartesian();
        let nudged = WorldPoint::new(pos.x - 0.05, 0.0, pos.z + 0.05);
        assert_eq!(closest_to_cartesian(nudged), corner);
    }
}
