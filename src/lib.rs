//! Triangulation of x-monotone polygons with integer coordinates.
//!
//! A counter-clockwise polygon whose boundary is crossed at most twice by any vertical line is
//! split into `n - 2` triangles by emitting `n - 3` non-crossing diagonals, using a single
//! left-to-right sweep with a stack of vertices which are still visible from the sweep front.
//!
//! ```
//! use monotone_triangulate::{Point, Polygon, formats, render};
//!
//! let polygon = vec![Point::new(0, 0), Point::new(2, -3), Point::new(6, -3), Point::new(8, 0), Point::new(4, 5)];
//! let mut diagonals = Vec::<[Point; 2]>::new();
//! polygon.triangulate(formats::PointDiagonalFormat::new(&mut diagonals)).expect("Triangulation failed");
//! assert_eq!(diagonals.len(), 2);
//!
//! let mut out = Vec::new();
//! render::write_diagonals(&mut out, diagonals).unwrap();
//! ```

mod chain;
mod errors;
mod math;
mod monotone;
mod validate;
mod inputs;
mod outputs;

#[cfg(feature = "debugging")]
pub(crate) mod debug;

#[cfg(any(test, feature = "benchmarking"))]
pub mod tests;

pub use chain::Chain;
pub use errors::{TriangulationError, PreconditionError, InternalError, ReadPolygonError};
pub use math::{Orientation, orientation, twice_signed_area};

pub use inputs::*;
pub use outputs::*;
