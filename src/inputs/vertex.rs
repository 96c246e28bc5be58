use std::{cmp, fmt::{self, Debug}};

use num_traits::PrimInt;

/// A two-dimensional point with integer coordinates.
///
/// The coordinate type must be a primitive integer which converts losslessly into [i64]
/// (`i8`..=`i64`, `u8`..=`u32`).
pub trait Vertex {
    /// The type of the individual `x` and `y` coordinates
    type Coordinate: PrimInt + Into<i64>;

    /// The x [Vertex::Coordinate] value
    fn x(&self) -> Self::Coordinate;
    /// The y [Vertex::Coordinate] value
    fn y(&self) -> Self::Coordinate;
}

/// A plain integer point, the vertex type produced by [load_polygon](crate::load_polygon)
/// and consumed by the [render](crate::render) functions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Copy the coordinates of any [Vertex]
    pub fn from_vertex<V: Vertex + ?Sized>(v: &V) -> Self {
        Self::new(v.x().into(), v.y().into())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

// Lexicographic by x, then y, which is the order diagonals are rendered in
impl Ord for Point {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.x.cmp(&other.x).then(self.y.cmp(&other.y))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i64; 2]> for Point {
    fn from([x, y]: [i64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl Vertex for Point {
    type Coordinate = i64;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self.x
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self.y
    }
}

impl<C: Debug + PrimInt + Into<i64>> Vertex for [C; 2] {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self[0]
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self[1]
    }
}

impl<C: Debug + PrimInt + Into<i64>> Vertex for (C, C) {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self.0
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self.1
    }
}

/// Widened copy of a vertex's coordinates, used for all internal arithmetic
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Coords([i64; 2]);

impl Coords {
    #[inline(always)]
    pub fn new(x: i64, y: i64) -> Self { Self([x, y]) }

    #[inline(always)]
    pub fn of<V: Vertex + ?Sized>(v: &V) -> Self {
        Self::new(v.x().into(), v.y().into())
    }

    #[inline(always)]
    pub fn x(&self) -> i64 { self.0[0] }
    #[inline(always)]
    pub fn y(&self) -> i64 { self.0[1] }

    /// Cross product of `(b - self)` and `(c - self)`.
    ///
    /// Differences are taken in [i128], so the result is exact for coordinates of magnitude below 2^62.
    #[inline(always)]
    pub fn cross(&self, b: &Self, c: &Self) -> i128 {
        let (ax, ay) = (self.x() as i128, self.y() as i128);
        (b.x() as i128 - ax) * (c.y() as i128 - ay) - (b.y() as i128 - ay) * (c.x() as i128 - ax)
    }

    /// Sweep ordering: x ascending, ties broken by y descending
    #[inline(always)]
    pub fn sweep_cmp(&self, other: &Self) -> cmp::Ordering {
        self.x().cmp(&other.x()).then(other.y().cmp(&self.y()))
    }
}

impl fmt::Debug for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Coords").field(&self.x()).field(&self.y()).finish()
    }
}
