//! Value types for the hex coordinate systems: one newtype per grid element
//! kind, plus vectors, offset coordinates and direction enums. See the
//! parent module documentation for a description of the coordinate systems.

use derive_more::{Add, AddAssign, Display, Mul, MulAssign, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::ops;
use strum::{EnumIter, IntoEnumIterator};

/// Convert a cube coordinate (any lattice) to its offset representation.
/// Uses floored division so that negative rows shove correctly: the column
/// of `(x, y)` is `x + floor(y / 2)`.
fn offset_from_cube(x: i32, y: i32) -> (i32, i32) {
    (x + y.div_euclid(2), y)
}

/// Inverse of [offset_from_cube].
fn cube_from_offset(col: i32, row: i32) -> (i32, i32) {
    (col - row.div_euclid(2), row)
}

/// The position of a single hexagonal tile, as a cube coordinate on the base
/// (unscaled) lattice.
///
/// Since `x + y + z == 0` for every valid coordinate, only `x` and `y` are
/// stored and `z` is derived, saving a third of the memory.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.x()", "self.y()", "self.z()")]
pub struct TilePoint {
    x: i32,
    y: i32,
}

impl TilePoint {
    pub const ORIGIN: Self = Self::new_xy(0, 0);

    /// Construct a new tile point with the given x and y. Since x+y+z=0 for
    /// all points, z is derived from x & y.
    pub const fn new_xy(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn z(&self) -> i32 {
        -(self.x + self.y)
    }

    /// The tile one step away in the given direction.
    pub fn adjacent(self, direction: TileDirection) -> TilePoint {
        self + direction.to_vector()
    }

    /// Iterator over the 6 tiles directly adjacent to this one, in
    /// [TileDirection] order.
    pub fn adjacents(self) -> impl Iterator<Item = TilePoint> {
        TileDirection::iter().map(move |dir| self.adjacent(dir))
    }

    /// This tile's offset-coordinate representation.
    pub fn to_offset(self) -> OffsetPoint {
        let (col, row) = offset_from_cube(self.x, self.y);
        OffsetPoint::new(col, row)
    }

    pub fn from_offset(offset: OffsetPoint) -> Self {
        let (x, y) = cube_from_offset(offset.col(), offset.row());
        Self::new_xy(x, y)
    }

    /// This point rotated 60° clockwise around `center`. Exact integer
    /// operation: translate to the origin, cyclically permute and negate the
    /// components, translate back.
    pub fn rotated_cw_about(self, center: TilePoint) -> TilePoint {
        let dx = self.x() - center.x();
        let dz = self.z() - center.z();
        // (x, y, z) -> (-z, -x, -y)
        TilePoint::new_xy(-dz + center.x(), -dx + center.y())
    }

    /// This point rotated 60° counter-clockwise around `center`.
    pub fn rotated_ccw_about(self, center: TilePoint) -> TilePoint {
        let dy = self.y() - center.y();
        let dz = self.z() - center.z();
        // (x, y, z) -> (-y, -z, -x)
        TilePoint::new_xy(-dy + center.x(), -dz + center.y())
    }
}

impl ops::Add<HexVector> for TilePoint {
    type Output = TilePoint;

    fn add(self, rhs: HexVector) -> Self::Output {
        Self::new_xy(self.x + rhs.x(), self.y + rhs.y())
    }
}

/// The position of an edge shared by two adjacent tiles: the component-wise
/// sum of the two tile coordinates, i.e. the edge midpoint on the tile
/// lattice scaled by 2. Exactly one of an edge's three components is even;
/// that parity determines its [EdgeAlignment].
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.x()", "self.y()", "self.z()")]
pub struct EdgePoint {
    x: i32,
    y: i32,
}

impl EdgePoint {
    pub const fn new_xy(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn z(&self) -> i32 {
        -(self.x + self.y)
    }

    /// Which of the three symmetric axis classes this edge is parallel to.
    /// Derived from component parity, never stored.
    pub fn alignment(&self) -> EdgeAlignment {
        if self.y() % 2 == 0 {
            EdgeAlignment::ParallelY
        } else if self.x() % 2 == 0 {
            EdgeAlignment::ParallelX
        } else {
            EdgeAlignment::ParallelZ
        }
    }

    /// Offset representation on the edge lattice (columns run `0..2*width`
    /// on a `width`-tile map).
    pub fn to_offset(self) -> OffsetPoint {
        let (col, row) = offset_from_cube(self.x, self.y);
        OffsetPoint::new(col, row)
    }

    pub fn from_offset(offset: OffsetPoint) -> Self {
        let (x, y) = cube_from_offset(offset.col(), offset.row());
        Self::new_xy(x, y)
    }
}

impl ops::Add<HexVector> for EdgePoint {
    type Output = EdgePoint;

    fn add(self, rhs: HexVector) -> Self::Output {
        Self::new_xy(self.x + rhs.x(), self.y + rhs.y())
    }
}

/// The position of a corner shared by three mutually-adjacent tiles: the
/// component-wise sum of the three tile coordinates (tile lattice scaled by
/// 3). Every component of a corner is ≡ 1 or ≡ 2 (mod 3); that residue
/// determines its [CornerType].
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.x()", "self.y()", "self.z()")]
pub struct CornerPoint {
    x: i32,
    y: i32,
}

impl CornerPoint {
    pub const fn new_xy(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn z(&self) -> i32 {
        -(self.x + self.y)
    }

    /// Which of the two sub-types this corner belongs to. Derived from the
    /// components' residues mod 3, never stored.
    pub fn corner_type(&self) -> CornerType {
        if (self.x() - 1).rem_euclid(3) == 0
            && (self.y() + 2).rem_euclid(3) == 0
            && (self.z() - 1).rem_euclid(3) == 0
        {
            CornerType::TopOfYEdge
        } else {
            CornerType::BottomOfYEdge
        }
    }

    /// Offset representation on the corner lattice (columns run `0..3*width`
    /// on a `width`-tile map).
    pub fn to_offset(self) -> OffsetPoint {
        let (col, row) = offset_from_cube(self.x, self.y);
        OffsetPoint::new(col, row)
    }

    pub fn from_offset(offset: OffsetPoint) -> Self {
        let (x, y) = cube_from_offset(offset.col(), offset.row());
        Self::new_xy(x, y)
    }
}

impl ops::Add<HexVector> for CornerPoint {
    type Output = CornerPoint;

    fn add(self, rhs: HexVector) -> Self::Output {
        Self::new_xy(self.x + rhs.x(), self.y + rhs.y())
    }
}

/// A vector in cube space. This is an (x,y,z) kind of vector, not a list
/// vector. Like the point types, x+y+z is always 0, so z is derived.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Display, Add, Sub, Mul, AddAssign,
    SubAssign, MulAssign,
)]
#[display(fmt = "({}, {}, {})", "self.x()", "self.y()", "self.z()")]
pub struct HexVector {
    x: i32,
    y: i32,
}

impl HexVector {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn z(&self) -> i32 {
        -(self.x + self.y)
    }
}

/// A tile address in offset coordinates: `(column, row)` on a rectangular
/// layout. The same type also carries edge/corner lattice offsets, where the
/// column axis is scaled by 2 or 3 respectively.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {})", "self.col", "self.row")]
pub struct OffsetPoint {
    col: i32,
    row: i32,
}

impl OffsetPoint {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn with_col(self, col: i32) -> Self {
        Self { col, ..self }
    }
}

/// A point in cartesian (world) space. `x` and `z` span the map plane; `y`
/// is carried as display elevation and never participates in grid math.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Display,
    Add,
    Sub,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.x", "self.y", "self.z")]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl WorldPoint {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Project onto the map plane, dropping the inert elevation component.
    pub fn xz(&self) -> nalgebra::Point2<f64> {
        nalgebra::Point2::new(self.x, self.z)
    }
}

/// The 6 directions from a tile's center to the centers of its neighboring
/// tiles, in clockwise order.
#[derive(
    Copy,
    Clone,
    Debug,
    EnumIter,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TileDirection {
    TopRight,
    Right,
    BottomRight,
    BottomLeft,
    Left,
    TopLeft,
}

impl TileDirection {
    /// All tile directions in clockwise order, starting at the top-right.
    pub const CLOCKWISE: &'static [Self] = &[
        Self::TopRight,
        Self::Right,
        Self::BottomRight,
        Self::BottomLeft,
        Self::Left,
        Self::TopLeft,
    ];

    /// The unit cube vector that moves a tile one step in this direction.
    pub fn to_vector(self) -> HexVector {
        match self {
            Self::TopRight => HexVector::new(0, 1),
            Self::Right => HexVector::new(1, 0),
            Self::BottomRight => HexVector::new(1, -1),
            Self::BottomLeft => HexVector::new(0, -1),
            Self::Left => HexVector::new(-1, 0),
            Self::TopLeft => HexVector::new(-1, 1),
        }
    }
}

/// The 6 directions from a tile's center to the midpoints of its edges, in
/// clockwise order. Also used as the heading of a border-path step.
#[derive(
    Copy,
    Clone,
    Debug,
    EnumIter,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EdgeDirection {
    Top,
    TopRight,
    BottomRight,
    Bottom,
    BottomLeft,
    TopLeft,
}

impl EdgeDirection {
    /// All edge directions in clockwise order, starting at the top.
    pub const CLOCKWISE: &'static [Self] = &[
        Self::Top,
        Self::TopRight,
        Self::BottomRight,
        Self::Bottom,
        Self::BottomLeft,
        Self::TopLeft,
    ];

    fn index(self) -> usize {
        Self::CLOCKWISE.iter().position(|dir| self == *dir).unwrap()
    }

    fn from_index(index: usize) -> Self {
        Self::CLOCKWISE[index % 6]
    }

    /// The next direction clockwise (60° further).
    pub fn rotated_cw(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The next direction counter-clockwise.
    pub fn rotated_ccw(self) -> Self {
        Self::from_index(self.index() + 5)
    }

    /// The direction rotated 180°.
    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// The angle of this direction in degrees, clockwise from the top.
    pub fn angle_degrees(self) -> i32 {
        (self.index() as i32) * 60
    }

    /// Offset from an edge heading in this direction to its clockwise
    /// neighbor on a border walk.
    pub(crate) fn cw_neighbor_offset(self) -> HexVector {
        match self {
            Self::Top => HexVector::new(0, 1),
            Self::TopRight => HexVector::new(1, 0),
            Self::BottomRight => HexVector::new(1, -1),
            Self::Bottom => HexVector::new(0, -1),
            Self::BottomLeft => HexVector::new(-1, 0),
            Self::TopLeft => HexVector::new(-1, 1),
        }
    }

    /// Offset from an edge heading in this direction to its
    /// counter-clockwise neighbor on a border walk.
    pub(crate) fn ccw_neighbor_offset(self) -> HexVector {
        match self {
            Self::Top => HexVector::new(-1, 1),
            Self::TopRight => HexVector::new(0, 1),
            Self::BottomRight => HexVector::new(1, 0),
            Self::Bottom => HexVector::new(1, -1),
            Self::BottomLeft => HexVector::new(0, -1),
            Self::TopLeft => HexVector::new(-1, 0),
        }
    }
}

/// The three symmetric axis classes an (undirected) edge can be parallel
/// to. Computed from coordinate parity via [EdgePoint::alignment].
#[derive(Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash)]
pub enum EdgeAlignment {
    ParallelX,
    ParallelY,
    ParallelZ,
}

impl EdgeAlignment {
    /// The angle of an edge with this alignment, in degrees.
    pub fn angle_degrees(self) -> i32 {
        match self {
            Self::ParallelY => 0,
            Self::ParallelX => 120,
            Self::ParallelZ => 240,
        }
    }
}

/// The two classes of corners, named for their position on the y-parallel
/// edge they terminate. Computed from coordinate residues via
/// [CornerPoint::corner_type]; determines which adjacency table applies.
#[derive(Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash)]
pub enum CornerType {
    TopOfYEdge,
    BottomOfYEdge,
}
