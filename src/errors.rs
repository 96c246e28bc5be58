use std::{error, fmt, io, num::ParseIntError};

use backtrace::Backtrace;

/// A triangulation bug, or a precondition violation the sweep happened to trip over
#[derive(Debug)]
pub struct InternalError {
    pub msg: String,
    pub backtrace: Backtrace,
}

impl InternalError {
    #[cold]
    #[inline(always)]
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            backtrace: Backtrace::new_unresolved(),
        }
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{:?}", self.msg, self.backtrace)
    }
}

impl error::Error for InternalError { }

/// Describes which requirement of [Polygon::triangulate_checked](crate::Polygon::triangulate_checked)
/// the polygon failed. Positions are indices into the polygon's vertex order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PreconditionError {
    /// Two vertices share the same coordinates
    DuplicateVertex { first: usize, second: usize },
    /// The vertices are in clockwise order, or all lie on one line
    NotCounterclockwise,
    /// The edge from this vertex to the next one is vertical
    VerticalEdge { position: usize },
    /// The x coordinate reverses direction at this vertex
    NotMonotone { position: usize },
    /// This vertex touches or crosses the opposite boundary chain
    ChainsCross { position: usize },
}

impl fmt::Display for PreconditionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateVertex { first, second } => write!(f, "Vertices {} and {} are identical", first, second),
            Self::NotCounterclockwise => write!(f, "Polygon is not in counter-clockwise order"),
            Self::VerticalEdge { position } => write!(f, "Edge from vertex {} is vertical", position),
            Self::NotMonotone { position } => write!(f, "Polygon is not x-monotone at vertex {}", position),
            Self::ChainsCross { position } => write!(f, "Vertex {} crosses the opposite chain", position),
        }
    }
}

impl error::Error for PreconditionError { }

/// Describes an error which occurred during triangulation
#[derive(Debug)]
#[non_exhaustive]
pub enum TriangulationError<BError: error::Error> {
    /// The polygon has fewer than 3 vertices
    NotEnoughVertices(usize),
    /// The polygon failed validation. Only returned by [Polygon::triangulate_checked](crate::Polygon::triangulate_checked).
    Precondition(PreconditionError),
    /// A triangulation precondition was violated in the provided [Polygon](crate::Polygon),
    /// or a triangulation bug was encountered.
    InternalError(InternalError),
    /// The [DiagonalBuilder](crate::DiagonalBuilder) returned an error.
    Builder(BError),
}

impl<BError: error::Error> TriangulationError<BError> {
    #[cold]
    #[inline(always)]
    pub(crate) fn internal(msg: impl Into<String>) -> Self {
        TriangulationError::InternalError(InternalError::new(msg))
    }
}

impl<BError: error::Error> From<BError> for TriangulationError<BError> {
    fn from(e: BError) -> Self {
        Self::Builder(e)
    }
}

impl<BError: error::Error> fmt::Display for TriangulationError<BError> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughVertices(vertices) => write!(f, "Polygon only contains {} vertices", vertices),
            Self::Precondition(_) => write!(f, "Polygon precondition violated"),
            Self::InternalError(_) => write!(f, "Internal triangulation error"),
            Self::Builder(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl<BError: error::Error> error::Error for TriangulationError<BError> {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Precondition(error) => Some(error),
            Self::InternalError(error) => Some(error),
            Self::Builder(error) => error.source(), // This should be Some(error), but that forces restricting BError to 'static.
            _ => None,
        }
    }
}

/// Describes an error encountered while reading the textual polygon format
#[derive(Debug)]
#[non_exhaustive]
pub enum ReadPolygonError {
    /// The underlying reader failed
    Io(io::Error),
    /// The input has no vertex count line
    MissingVertexCount,
    /// The vertex count is not a non-negative integer
    InvalidVertexCount { line: usize, source: ParseIntError },
    /// A coordinate is not an integer
    InvalidCoordinate { line: usize, source: ParseIntError },
    /// A vertex line has fewer than two coordinates
    MissingCoordinate { line: usize },
    /// A line contains more tokens than expected
    UnexpectedToken { line: usize, token: String },
    /// The number of vertex lines does not match the declared count
    VertexCountMismatch { expected: usize, found: usize },
}

impl fmt::Display for ReadPolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(error) => fmt::Display::fmt(error, f),
            Self::MissingVertexCount => write!(f, "Missing vertex count"),
            Self::InvalidVertexCount { line, source } => write!(f, "Line {}: invalid vertex count ({})", line, source),
            Self::InvalidCoordinate { line, source } => write!(f, "Line {}: invalid coordinate ({})", line, source),
            Self::MissingCoordinate { line } => write!(f, "Line {}: expected two coordinates", line),
            Self::UnexpectedToken { line, token } => write!(f, "Line {}: unexpected token '{}'", line, token),
            Self::VertexCountMismatch { expected, found } => write!(f, "Expected {} vertices, found {}", expected, found),
        }
    }
}

impl error::Error for ReadPolygonError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(error) => Some(error),
            Self::InvalidVertexCount { source, .. } |
            Self::InvalidCoordinate { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for ReadPolygonError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
