//! Predefined implementations of [DiagonalFormat](crate::DiagonalFormat) and [DiagonalBuilder](crate::DiagonalBuilder)

mod generic_diagonals;
pub(crate) use generic_diagonals::GenericDiagonals;
mod indexed_diagonals;
pub use indexed_diagonals::{IndexedDiagonalFormat, IndexedDiagonalBuilder};
mod deindexed_diagonals;
pub use deindexed_diagonals::{DeindexedDiagonalFormat, DeindexedDiagonalBuilder};
mod point_diagonals;
pub use point_diagonals::{PointDiagonalFormat, PointDiagonalBuilder};
