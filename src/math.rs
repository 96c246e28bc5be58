use std::ops;

use crate::{Vertex, inputs::Coords};

/// The turn direction of an ordered triple of points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The three points lie on one line (or two of them coincide)
    Collinear,
    /// Counter-clockwise turn
    LeftTurn,
    /// Clockwise turn
    RightTurn,
}

impl Orientation {
    #[inline(always)]
    pub(crate) fn of_cross(val: i128) -> Self {
        if val == 0 {
            Orientation::Collinear
        } else if val > 0 {
            Orientation::LeftTurn
        } else {
            Orientation::RightTurn
        }
    }
}

// Swapping the last two points of a triple reverses the turn
impl ops::Neg for Orientation {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Orientation::Collinear => Orientation::Collinear,
            Orientation::LeftTurn => Orientation::RightTurn,
            Orientation::RightTurn => Orientation::LeftTurn,
        }
    }
}

/// Classify the turn `p -> q -> r` by the sign of the cross product of `(q - p)` and `(r - p)`.
///
/// The product is accumulated in 128 bits, so the result is exact for any coordinates of magnitude below 2^62.
pub fn orientation<V: Vertex + ?Sized>(p: &V, q: &V, r: &V) -> Orientation {
    coords_orientation(&Coords::of(p), &Coords::of(q), &Coords::of(r))
}

#[inline(always)]
pub(crate) fn coords_orientation(p: &Coords, q: &Coords, r: &Coords) -> Orientation {
    Orientation::of_cross(p.cross(q, r))
}

/// Twice the signed area of a polygon (shoelace formula). Positive for counter-clockwise vertex order.
pub fn twice_signed_area<V: Vertex>(vertices: &[V]) -> i128 {
    let coords: Vec<Coords> = vertices.iter().map(Coords::of).collect();
    coords_twice_signed_area(&coords)
}

pub(crate) fn coords_twice_signed_area(coords: &[Coords]) -> i128 {
    let n = coords.len();
    (0..n).map(|i| {
        let a = coords[i];
        let b = coords[(i + 1) % n];
        a.x() as i128 * b.y() as i128 - b.x() as i128 * a.y() as i128
    }).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;

    #[test]
    fn turns() {
        let p = Point::new(0, 0);
        let q = Point::new(4, 0);
        assert_eq!(orientation(&p, &q, &Point::new(2, 3)), Orientation::LeftTurn);
        assert_eq!(orientation(&p, &q, &Point::new(2, -3)), Orientation::RightTurn);
        assert_eq!(orientation(&p, &q, &Point::new(9, 0)), Orientation::Collinear);
    }

    #[test]
    fn swapped_triple_is_opposite() {
        let pts = [[0i32, 0], [5, 1], [-3, 7], [2, 2], [10, -4], [6, 6]];
        for p in &pts {
            for q in &pts {
                for r in &pts {
                    assert_eq!(orientation(p, q, r), -orientation(p, r, q));
                }
            }
        }
    }

    #[test]
    fn repeated_point_is_collinear() {
        let p = (3i64, -8i64);
        for r in &[(0i64, 0i64), (1, 9), (-4, 2), (3, -8)] {
            assert_eq!(orientation(&p, &p, r), Orientation::Collinear);
        }
    }

    #[test]
    fn large_coordinates() {
        let big = 1i64 << 61;
        let p = Point::new(-big, -big);
        let q = Point::new(big, -big);
        let r = Point::new(big, big);
        assert_eq!(orientation(&p, &q, &r), Orientation::LeftTurn);
        assert_eq!(orientation(&p, &r, &q), Orientation::RightTurn);
    }

    #[test]
    fn shoelace() {
        let square = [(0i32, 0i32), (2, 0), (2, 2), (0, 2)];
        assert_eq!(twice_signed_area(&square), 8);
        let reversed: Vec<_> = square.iter().rev().copied().collect();
        assert_eq!(twice_signed_area(&reversed), -8);
    }
}
