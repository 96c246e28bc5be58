use std::error;

use crate::{Polygon, TriangulationError};

/// Describes the construction and layout of the diagonals of a triangulation
pub trait DiagonalFormat<'p, P: Polygon<'p>> {
    /// The type responsible for collecting the diagonals.
    ///
    /// This type can be `Self`, if you choose to implement both [DiagonalFormat] and [DiagonalBuilder] on the same type.
    type Builder: DiagonalBuilder<'p, P> + Sized;

    /// Constructs a [DiagonalFormat::Builder], optionally using a reference to the [Polygon] being triangulated.
    fn initialize(self, polygon: &'p P) -> Result<Self::Builder, <Self::Builder as DiagonalBuilder<'p, P>>::Error>;
}

/// Performs the collection of diagonals
pub trait DiagonalBuilder<'p, P: Polygon<'p>> {
    /// The diagonal collection output type
    type Output;
    /// The error type when the builder fails
    type Error: error::Error;

    /// Adds a diagonal between the given indices.
    ///
    /// `vi0` is the vertex the sweep was processing when the diagonal was found; the pair is otherwise unordered.
    fn add_diagonal(&mut self, vi0: P::Index, vi1: P::Index) -> Result<(), Self::Error>;

    /// Called when triangulation has completed to get the resulting output
    fn build(self) -> Result<Self::Output, Self::Error>;

    /// Called when triangulation encounters an error.
    ///
    /// Any required cleanup (e.g. removing the partial output added to an existing [Vec]) should be done here
    fn fail(self, error: &TriangulationError<Self::Error>);
}
