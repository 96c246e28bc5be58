mod polygon;
pub use polygon::{Polygon, IndexedPolygon};
mod vertex;
pub use vertex::{Vertex, Point};
pub(crate) use vertex::Coords;
mod vertex_index;
pub use vertex_index::VertexIndex;
mod polygon_file;
pub use polygon_file::{read_polygon, parse_polygon, load_polygon};
