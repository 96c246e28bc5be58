use std::marker::PhantomData;

use crate::{DiagonalBuilder, DiagonalFormat, DiagonalList, Polygon, TriangulationError};

use super::GenericDiagonals;

/// A [DiagonalFormat] which outputs each diagonal as a pair of [Polygon::Index]es
#[derive(Debug)]
pub struct IndexedDiagonalFormat<'p, P: Polygon<'p>, L: DiagonalList<P::Index>> {
    list: L,
    _phantom: PhantomData<&'p P>,
}

impl<'p, P: Polygon<'p>, L: DiagonalList<P::Index>> IndexedDiagonalFormat<'p, P, L> {
    /// Create an indexed format which stores its output in the given [DiagonalList]
    pub fn new(list: L) -> Self {
        Self { list, _phantom: PhantomData, }
    }
}

impl<'p, P: Polygon<'p>, L: DiagonalList<P::Index>> DiagonalFormat<'p, P> for IndexedDiagonalFormat<'p, P, L> {
    type Builder = IndexedDiagonalBuilder<'p, P, L>;

    fn initialize(self, polygon: &'p P) -> Result<Self::Builder, <Self::Builder as DiagonalBuilder<'p, P>>::Error> {
        IndexedDiagonalBuilder::new(self.list, polygon)
    }
}

pub struct IndexedDiagonalBuilder<'p, P: Polygon<'p>, L: DiagonalList<P::Index>> {
    list: GenericDiagonals<L, P::Index>,
    _phantom: PhantomData<&'p P>,
}

impl<'p, P: Polygon<'p>, L: DiagonalList<P::Index>> IndexedDiagonalBuilder<'p, P, L> {
    fn new(list: L, _polygon: &'p P) -> Result<Self, <Self as DiagonalBuilder<'p, P>>::Error> {
        Ok(Self {
            list: GenericDiagonals::new(list),
            _phantom: PhantomData,
        })
    }
}

impl<'p, P: Polygon<'p>, L: DiagonalList<P::Index>> DiagonalBuilder<'p, P> for IndexedDiagonalBuilder<'p, P, L> {
    type Output = L;
    type Error = std::convert::Infallible;

    fn add_diagonal(&mut self, vi0: P::Index, vi1: P::Index) -> Result<(), Self::Error> {
        self.list.new_diagonal(vi0, vi1);
        Ok(())
    }

    fn build(self) -> Result<Self::Output, Self::Error> {
        Ok(self.list.build())
    }

    fn fail(self, _error: &TriangulationError<Self::Error>) {
        self.list.fail();
    }
}
