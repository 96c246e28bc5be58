use std::marker::PhantomData;

use crate::{DiagonalBuilder, DiagonalFormat, DiagonalList, Polygon, TriangulationError};

use super::GenericDiagonals;

/// A [DiagonalFormat] which outputs each diagonal by its actual vertex values, not their indices
#[derive(Debug)]
pub struct DeindexedDiagonalFormat<'p, P: Polygon<'p>, L: DiagonalList<P::Vertex>>
where P::Vertex: Clone {
    list: L,
    _phantom: PhantomData<&'p P>,
}

impl<'p, P: Polygon<'p>, L: DiagonalList<P::Vertex>> DeindexedDiagonalFormat<'p, P, L>
where P::Vertex: Clone {
    /// Create a deindexed format which stores its output in the given [DiagonalList]
    pub fn new(list: L) -> Self {
        Self { list, _phantom: PhantomData, }
    }
}

impl<'p, P: Polygon<'p>, L: DiagonalList<P::Vertex>> DiagonalFormat<'p, P> for DeindexedDiagonalFormat<'p, P, L>
where P::Vertex: Clone {
    type Builder = DeindexedDiagonalBuilder<'p, P, L>;

    fn initialize(self, polygon: &'p P) -> Result<Self::Builder, <Self::Builder as DiagonalBuilder<'p, P>>::Error> {
        DeindexedDiagonalBuilder::new(self.list, polygon)
    }
}

pub struct DeindexedDiagonalBuilder<'p, P: Polygon<'p>, L: DiagonalList<P::Vertex>>
where P::Vertex: Clone {
    list: GenericDiagonals<L, P::Vertex>,
    polygon: &'p P,
}

impl<'p, P: Polygon<'p>, L: DiagonalList<P::Vertex>> DeindexedDiagonalBuilder<'p, P, L>
where P::Vertex: Clone {
    fn new(list: L, polygon: &'p P) -> Result<Self, <Self as DiagonalBuilder<'p, P>>::Error> {
        Ok(Self {
            list: GenericDiagonals::new(list),
            polygon,
        })
    }
}

impl<'p, P: Polygon<'p>, L: DiagonalList<P::Vertex>> DiagonalBuilder<'p, P> for DeindexedDiagonalBuilder<'p, P, L>
where P::Vertex: Clone {
    type Output = L;
    type Error = std::convert::Infallible;

    fn add_diagonal(&mut self, vi0: P::Index, vi1: P::Index) -> Result<(), Self::Error> {
        let (v0, v1) = (self.polygon.get_vertex(vi0).clone(), self.polygon.get_vertex(vi1).clone());
        self.list.new_diagonal(v0, v1);
        Ok(())
    }

    fn build(self) -> Result<Self::Output, Self::Error> {
        Ok(self.list.build())
    }

    fn fail(self, _error: &TriangulationError<Self::Error>) {
        self.list.fail();
    }
}
