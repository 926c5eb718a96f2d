//! Tile-level queries: adjacency, discs, rings, lines, cones and contiguous
//! areas.

use crate::{
    grid::{distance, Nudge},
    hex::{CornerPoint, EdgePoint, HexVector, TileDirection, TilePoint},
    util::lerp,
};
use anyhow::bail;
use fnv::FnvBuildHasher;
use indexmap::IndexSet;
use std::collections::VecDeque;

/// The 2 tiles sharing the given edge. Exactly one edge component is even;
/// that component is the shared axis of the two tiles.
pub fn adjacent_to_edge(edge: EdgePoint) -> [TilePoint; 2] {
    let (x, y, z) = (edge.x(), edge.y(), edge.z());
    // All divisions below are exact: an odd component offset by 1 is even
    if x % 2 == 0 {
        [
            TilePoint::new_xy(x / 2, (y - 1) / 2),
            TilePoint::new_xy(x / 2, (y + 1) / 2),
        ]
    } else if y % 2 == 0 {
        [
            TilePoint::new_xy((x + 1) / 2, y / 2),
            TilePoint::new_xy((x - 1) / 2, y / 2),
        ]
    } else {
        debug_assert_eq!(z % 2, 0);
        [
            TilePoint::new_xy((x - 1) / 2, (y + 1) / 2),
            TilePoint::new_xy((x + 1) / 2, (y - 1) / 2),
        ]
    }
}

/// The 3 tiles sharing the given corner. The corner's type picks which of
/// the two offset patterns applies.
pub fn adjacent_to_corner(corner: CornerPoint) -> [TilePoint; 3] {
    let (x, y) = (corner.x(), corner.y());
    match corner.corner_type() {
        crate::hex::CornerType::TopOfYEdge => [
            TilePoint::new_xy((x - 1) / 3, (y + 2) / 3),
            TilePoint::new_xy((x + 2) / 3, (y - 1) / 3),
            TilePoint::new_xy((x - 1) / 3, (y - 1) / 3),
        ],
        crate::hex::CornerType::BottomOfYEdge => [
            TilePoint::new_xy((x + 1) / 3, (y + 1) / 3),
            TilePoint::new_xy((x + 1) / 3, (y - 2) / 3),
            TilePoint::new_xy((x - 2) / 3, (y + 1) / 3),
        ],
    }
}

/// All tiles within `radius` steps of `center`, scanned in x-then-y order.
/// Fails if `radius` is 0.
pub fn disc(
    center: TilePoint,
    radius: u32,
    include_center: bool,
) -> anyhow::Result<Vec<TilePoint>> {
    if radius < 1 {
        bail!("disc radius must be at least 1");
    }
    let radius = radius as i32;
    let mut positions = Vec::new();
    for x in (center.x() - radius)..=(center.x() + radius) {
        for y in (center.y() - radius)..=(center.y() + radius) {
            let z = -x - y;
            if (z - center.z()).abs() > radius {
                continue;
            }
            positions.push(TilePoint::new_xy(x, y));
        }
    }
    if !include_center {
        positions.retain(|&tile| tile != center);
    }
    Ok(positions)
}

/// All tiles at distance in `(radius - thickness_inwards)..=radius` of
/// `center`, in no particular order. Fails if either parameter is 0.
pub fn ring(
    center: TilePoint,
    radius: u32,
    thickness_inwards: u32,
) -> anyhow::Result<Vec<TilePoint>> {
    if radius < 1 {
        bail!("ring radius must be at least 1");
    }
    if thickness_inwards < 1 {
        bail!("ring thickness must be at least 1");
    }
    // Signed so that a thickness larger than the radius keeps the center
    let inner = radius as i64 - thickness_inwards as i64;
    let ring = disc(center, radius, true)?
        .into_iter()
        .filter(|&tile| distance::between_tiles(center, tile) as i64 > inner)
        .collect();
    Ok(ring)
}

/// The single-tile-thick ring at exactly `radius` steps of `center`, in
/// walk order: starting at the ring tile in `start_direction` from the
/// center and going around in the given rotational direction. Fails if
/// `radius` is 0.
pub fn ring_ordered(
    center: TilePoint,
    radius: u32,
    start_direction: TileDirection,
    clockwise: bool,
) -> anyhow::Result<Vec<TilePoint>> {
    if radius < 1 {
        bail!("ring radius must be at least 1");
    }
    let rotate = if clockwise {
        TilePoint::rotated_cw_about
    } else {
        TilePoint::rotated_ccw_about
    };

    let start = center + start_direction.to_vector() * (radius as i32);
    let mut ring_tiles = vec![start];

    // The 6 tiles where the ring changes heading
    let mut ring_corners = [start; 6];
    for i in 1..6 {
        ring_corners[i] = rotate(ring_corners[i - 1], center);
    }

    // Walk the 6 straight segments between consecutive ring corners. Each
    // segment ends on the next corner, and the last one closes the loop
    // back onto the start tile, which is dropped again.
    for i in 0..6 {
        let segment =
            line(ring_corners[i], ring_corners[(i + 1) % 6], false, Nudge::Positive)?;
        ring_tiles.extend(segment);
    }
    ring_tiles.pop();
    Ok(ring_tiles)
}

/// Tiles forming a straight line from `origin` to `target`, optionally
/// including the origin tile. Fails if origin and target are the same tile.
///
/// The line is rasterized by sampling one interpolated position per step of
/// tile distance and rounding each back onto the lattice; `nudge` breaks
/// samples that land exactly on a cell boundary.
pub fn line(
    origin: TilePoint,
    target: TilePoint,
    include_origin: bool,
    nudge: Nudge,
) -> anyhow::Result<Vec<TilePoint>> {
    line_with_offset(origin, target, include_origin, nudge.offset())
}

/// [line] with a raw nudge offset. The cone rasterizer passes offsets much
/// smaller than the public tie-breaking nudge.
pub(crate) fn line_with_offset(
    origin: TilePoint,
    target: TilePoint,
    include_origin: bool,
    nudge_offset: f64,
) -> anyhow::Result<Vec<TilePoint>> {
    if origin == target {
        bail!("line origin and target are the same tile ({})", origin);
    }

    let mut cells = Vec::new();
    if include_origin {
        cells.push(origin);
    }
    let dist = distance::between_tiles(origin, target);
    for i in 1..=dist {
        let t = i as f64 / dist as f64;
        // Cube-space lerp, with the origin pushed off-center along the
        // cartesian x axis (+x on the x component, -x on z keeps the sum 0)
        let x = lerp(origin.x() as f64 + nudge_offset, target.x() as f64, t);
        let y = lerp(origin.y() as f64, target.y() as f64, t);
        let z = lerp(origin.z() as f64 - nudge_offset, target.z() as f64, t);
        cells.push(round_cube(x, y, z));
    }
    Ok(cells)
}

/// Round a fractional cube coordinate to the nearest tile by recomputing
/// the component with the largest rounding error from the other two.
fn round_cube(x: f64, y: f64, z: f64) -> TilePoint {
    let mut rx = x.round() as i32;
    let mut ry = y.round() as i32;
    let rz = z.round() as i32;

    let diff_x = (rx as f64 - x).abs();
    let diff_y = (ry as f64 - y).abs();
    let diff_z = (rz as f64 - z).abs();

    if diff_x > diff_y && diff_x > diff_z {
        rx = -ry - rz;
    } else if diff_y > diff_z {
        ry = -rx - rz;
    }
    // If z had the largest error, x and y stand as rounded and z is
    // rederived from them anyway
    TilePoint::new_xy(rx, ry)
}

/// Tiles forming a cone from `origin` opening toward `direction`:
/// everything within `half_angle_degrees` of the center line, out to
/// `length` steps. Fails if `length` is 0.
pub fn cone(
    origin: TilePoint,
    direction: HexVector,
    half_angle_degrees: f64,
    length: u32,
) -> anyhow::Result<Vec<TilePoint>> {
    let origin_pos = origin.to_cartesian().xz();
    let look_pos = (origin + direction).to_cartesian().xz();
    let look_vector = look_pos - origin_pos;

    let mut cone: IndexSet<TilePoint, FnvBuildHasher> = IndexSet::default();
    for target in ring(origin, length, 1)? {
        let target_vector = target.to_cartesian().xz() - origin_pos;
        let angle = angle_between_degrees(target_vector, look_vector);
        if angle.abs() > half_angle_degrees + 0.001 {
            continue;
        }

        // Rasterize two lines per target, one slightly left of center and
        // one slightly right, so the cone fills consistently on both sides
        // of the center line
        let left = line_with_offset(origin, target, false, -0.00001)?;
        let right = line_with_offset(origin, target, false, 0.00001)?;
        cone.extend(left);
        cone.extend(right);
    }
    Ok(cone.into_iter().collect())
}

/// Unsigned angle between two cartesian vectors, in degrees. Zero vectors
/// yield 0.
fn angle_between_degrees(
    a: nalgebra::Vector2<f64>,
    b: nalgebra::Vector2<f64>,
) -> f64 {
    let norms = a.norm() * b.norm();
    if norms < 1e-12 {
        return 0.0;
    }
    (a.dot(&b) / norms).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Split the input tiles into their contiguous areas: two tiles belong to
/// the same area iff they are connected through adjacent input tiles. Areas
/// come back in the order their first tile appears in the input.
pub fn contiguous_areas(input: &[TilePoint]) -> Vec<Vec<TilePoint>> {
    let mut unused: IndexSet<TilePoint, FnvBuildHasher> =
        input.iter().copied().collect();
    let mut areas = Vec::new();

    while let Some(&seed) = unused.get_index(0) {
        // Flood fill from the seed over tiles still unassigned
        let mut area: IndexSet<TilePoint, FnvBuildHasher> =
            IndexSet::default();
        let mut queue = VecDeque::new();
        queue.push_back(seed);
        while let Some(current) = queue.pop_front() {
            if !area.insert(current) {
                continue;
            }
            unused.shift_remove(&current);
            for neighbor in current.adjacents() {
                if unused.contains(&neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
        areas.push(area.into_iter().collect());
    }

    areas
}
