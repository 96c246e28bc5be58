//! Display helpers for diagonals.
//!
//! Each diagonal is rendered as `(x1,y1)(x2,y2)` with the smaller endpoint (by x, then y) first,
//! and a list of diagonals is ordered by that first endpoint.

use std::{fmt, io};

use crate::{Point, Vertex};

/// Orders the endpoints of a diagonal so the smaller one (by x, then y) comes first
pub fn normalize(a: Point, b: Point) -> [Point; 2] {
    if b < a {
        [b, a]
    } else {
        [a, b]
    }
}

/// Normalizes every diagonal and sorts them by their first endpoint.
///
/// The sort is stable: diagonals sharing a first endpoint keep the order they were emitted in.
pub fn sort_diagonals<V: Vertex, I: IntoIterator<Item=[V; 2]>>(diagonals: I) -> Vec<[Point; 2]> {
    let mut sorted: Vec<[Point; 2]> = diagonals.into_iter()
        .map(|[a, b]| normalize(Point::from_vertex(&a), Point::from_vertex(&b)))
        .collect();
    sorted.sort_by_key(|[first, _]| *first);
    sorted
}

/// [fmt::Display] wrapper rendering a diagonal as `(x1,y1)(x2,y2)`, endpoints in the given order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagonalDisplay(pub [Point; 2]);

impl fmt::Display for DiagonalDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.0;
        write!(f, "{}{}", a, b)
    }
}

/// Writes the diagonals one per line, normalized and sorted
pub fn write_diagonals<W: io::Write, V: Vertex, I: IntoIterator<Item=[V; 2]>>(mut writer: W, diagonals: I) -> io::Result<()> {
    for diagonal in sort_diagonals(diagonals) {
        writeln!(writer, "{}", DiagonalDisplay(diagonal))?;
    }
    writer.flush()
}
