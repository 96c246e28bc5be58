use std::{iter, ops, slice};

use crate::{Chain, DiagonalBuilder, DiagonalFormat, PreconditionError, TriangulationError, VertexIndex, monotone::MonotonePolygon};

use super::vertex::Vertex;

/// An indexable x-monotone polygon's vertices
pub trait Polygon<'p>: 'p + Sized {
    /// The type of vertices of the polygon
    type Vertex: Vertex + 'p;
    /// A type used to uniquely identify a [Vertex] (e.g. [usize] for a [Vec<\[i32; 2\]>](Vec))
    type Index: VertexIndex + 'p;
    /// The [Iterator] type that [Polygon::iter_indices] returns
    type Iter<'i>: Iterator<Item=Self::Index>
    where Self: 'i, Self::Vertex: 'i, 'p: 'i;

    /// Provides the number of vertices of the polygon.
    fn vertex_count(&self) -> usize;

    /// Iterate through all [Polygon::Index]es of the polygon.
    /// Indices must be returned in counter-clockwise order, without repeating the initial index.
    fn iter_indices<'i>(&'i self) -> Self::Iter<'i>
    where Self: 'i, Self::Vertex: 'i, 'p: 'i;

    /// Get the [Polygon::Vertex] uniquely identified by the [Polygon::Index] value
    fn get_vertex(&self, index: Self::Index) -> &Self::Vertex;

    /// Label each vertex, in [Polygon::iter_indices] order, with the boundary [Chain] it belongs to
    fn chains(&'p self) -> Vec<Chain> {
        MonotonePolygon::new(self).chains().labels
    }

    /// Check that the polygon satisfies the preconditions of [Polygon::triangulate]:
    /// at least 3 distinct vertices, counter-clockwise, x-monotone and simple, with no vertical edges.
    fn validate(&'p self) -> Result<(), PreconditionError> {
        MonotonePolygon::new(self).validate()
    }

    /// Triangulate the polygon, passing every diagonal to the builder specified by `format`.
    ///
    /// The polygon is assumed to be simple, x-monotone and counter-clockwise. This is not checked:
    /// for other input the result is a deterministic but geometrically meaningless set of diagonals.
    /// Use [Polygon::triangulate_checked] to reject such input instead.
    fn triangulate<F: DiagonalFormat<'p, Self>>(&'p self, format: F) -> Result<<F::Builder as DiagonalBuilder<'p, Self>>::Output, TriangulationError<<F::Builder as DiagonalBuilder<'p, Self>>::Error>> {
        MonotonePolygon::new(self).triangulate(format)
    }

    /// Like [Polygon::triangulate], but validates the polygon first and fails with
    /// [TriangulationError::Precondition] if it is not a simple counter-clockwise x-monotone polygon
    /// free of vertical edges.
    fn triangulate_checked<F: DiagonalFormat<'p, Self>>(&'p self, format: F) -> Result<<F::Builder as DiagonalBuilder<'p, Self>>::Output, TriangulationError<<F::Builder as DiagonalBuilder<'p, Self>>::Error>> {
        let monotone = MonotonePolygon::new(self);
        let vertex_count = self.vertex_count();
        if vertex_count < 3 {
            return Err(TriangulationError::NotEnoughVertices(vertex_count));
        }
        monotone.validate().map_err(TriangulationError::Precondition)?;
        monotone.triangulate(format)
    }
}

impl<'p, V: 'p + Vertex, T: 'p + ops::Deref<Target=[V]>> Polygon<'p> for T {
    type Vertex = V;
    type Index = usize;
    type Iter<'i> = ops::Range<usize>
    where Self: 'i, Self::Vertex: 'i, 'p: 'i;

    fn vertex_count(&self) -> usize {
        (*self).len()
    }

    fn iter_indices<'i>(&'i self) -> Self::Iter<'i>
    where Self: 'i, Self::Vertex: 'i, 'p: 'i {
        0..self.vertex_count()
    }

    fn get_vertex(&self, index: Self::Index) -> &Self::Vertex {
        &(*self)[index]
    }
}

/// A polygon described by an index buffer into shared vertex storage.
///
/// [Polygon::Index] values are positions in the vertex storage, so diagonals produced by an
/// [IndexedDiagonalFormat](crate::formats::IndexedDiagonalFormat) refer directly to the shared vertices.
#[derive(Debug, Clone, Copy)]
pub struct IndexedPolygon<'v, V: Vertex> {
    vertices: &'v [V],
    indices: &'v [usize],
}

impl<'v, V: Vertex> IndexedPolygon<'v, V> {
    /// Every entry of `indices` must be a valid position in `vertices`
    pub fn new(vertices: &'v [V], indices: &'v [usize]) -> Self {
        Self { vertices, indices }
    }

    pub fn vertices(&self) -> &'v [V] {
        self.vertices
    }

    pub fn indices(&self) -> &'v [usize] {
        self.indices
    }
}

impl<'p, V: 'p + Vertex> Polygon<'p> for IndexedPolygon<'p, V> {
    type Vertex = V;
    type Index = usize;
    type Iter<'i> = iter::Copied<slice::Iter<'i, usize>>
    where Self: 'i, Self::Vertex: 'i, 'p: 'i;

    fn vertex_count(&self) -> usize {
        self.indices.len()
    }

    fn iter_indices<'i>(&'i self) -> Self::Iter<'i>
    where Self: 'i, Self::Vertex: 'i, 'p: 'i {
        self.indices.iter().copied()
    }

    fn get_vertex(&self, index: Self::Index) -> &Self::Vertex {
        &self.vertices[index]
    }
}
