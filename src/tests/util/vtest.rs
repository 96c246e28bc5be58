use crate::inputs::Vertex;

/// A vertex type defined outside the crate's own [Point](crate::Point), with narrow coordinates
#[derive(Default, Copy, Clone, PartialEq, Eq)]
pub struct VTest {
    x: i32,
    y: i32,
}

impl VTest {
    pub fn new(x: i32, y: i32) -> Self { VTest {x, y} }
}

impl std::fmt::Debug for VTest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Vertex for VTest {
    type Coordinate = i32;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate { self.x }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate { self.y }
}

impl From<(i32, i32)> for VTest {
    fn from((x, y): (i32, i32)) -> Self {
        VTest::new(x, y)
    }
}
