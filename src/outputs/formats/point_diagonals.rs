use std::marker::PhantomData;

use crate::{DiagonalBuilder, DiagonalFormat, DiagonalList, Point, Polygon, TriangulationError};

use super::GenericDiagonals;

/// A [DiagonalFormat] which outputs each diagonal as a pair of [Point]s, whatever the polygon's vertex type.
///
/// This is the format the [render](crate::render) functions consume.
#[derive(Debug)]
pub struct PointDiagonalFormat<'p, P: Polygon<'p>, L: DiagonalList<Point>> {
    list: L,
    _phantom: PhantomData<&'p P>,
}

impl<'p, P: Polygon<'p>, L: DiagonalList<Point>> PointDiagonalFormat<'p, P, L> {
    /// Create a point format which stores its output in the given [DiagonalList]
    pub fn new(list: L) -> Self {
        Self { list, _phantom: PhantomData, }
    }
}

impl<'p, P: Polygon<'p>, L: DiagonalList<Point>> DiagonalFormat<'p, P> for PointDiagonalFormat<'p, P, L> {
    type Builder = PointDiagonalBuilder<'p, P, L>;

    fn initialize(self, polygon: &'p P) -> Result<Self::Builder, <Self::Builder as DiagonalBuilder<'p, P>>::Error> {
        Ok(PointDiagonalBuilder {
            list: GenericDiagonals::new(self.list),
            polygon,
        })
    }
}

pub struct PointDiagonalBuilder<'p, P: Polygon<'p>, L: DiagonalList<Point>> {
    list: GenericDiagonals<L, Point>,
    polygon: &'p P,
}

impl<'p, P: Polygon<'p>, L: DiagonalList<Point>> DiagonalBuilder<'p, P> for PointDiagonalBuilder<'p, P, L> {
    type Output = L;
    type Error = std::convert::Infallible;

    fn add_diagonal(&mut self, vi0: P::Index, vi1: P::Index) -> Result<(), Self::Error> {
        let v0 = Point::from_vertex(self.polygon.get_vertex(vi0));
        let v1 = Point::from_vertex(self.polygon.get_vertex(vi1));
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
