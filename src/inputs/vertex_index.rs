use std::fmt::Debug;

/// A type which can be used to identify a specific [Vertex](crate::Vertex) of a [Polygon](crate::Polygon).
///
/// Automatically implemented for all [Clone] + [Debug] types. Indices are [Debug] so that emitted
/// diagonals can be traced through the `log` facade.
pub trait VertexIndex: Clone + Debug { }

impl<T> VertexIndex for T
where T: Clone + Debug
{ }
