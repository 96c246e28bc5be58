use crate::{Point, Polygon, PreconditionError, TriangulationError, formats};

use super::util;

fn checked(polygon: &Vec<Point>) -> Result<Vec<[usize; 2]>, TriangulationError<std::convert::Infallible>> {
    polygon.triangulate_checked(formats::IndexedDiagonalFormat::new(Vec::<[usize; 2]>::new()))
}

#[test]
fn incomplete_polygon() {
    let polygon = vec![Point::new(0, 0), Point::new(1, 1)];
    let result = polygon.triangulate(formats::IndexedDiagonalFormat::new(Vec::<[usize; 2]>::new()));
    assert!(matches!(result, Err(TriangulationError::NotEnoughVertices(2))));
    assert!(matches!(checked(&polygon), Err(TriangulationError::NotEnoughVertices(2))));
}

#[test]
fn empty_polygon() {
    let polygon: Vec<Point> = Vec::new();
    assert!(matches!(checked(&polygon), Err(TriangulationError::NotEnoughVertices(0))));
    assert!(polygon.chains().is_empty());
}

#[test]
fn clockwise_polygon() {
    let polygon = util::polygon::hexagon();
    assert_eq!(polygon.validate(), Err(PreconditionError::NotCounterclockwise));
    assert!(matches!(checked(&polygon), Err(TriangulationError::Precondition(PreconditionError::NotCounterclockwise))));

    let reversed: Vec<Point> = polygon.iter().rev().copied().collect();
    assert!(checked(&reversed).is_ok());
}

#[test]
fn overlapping_vertex() {
    let polygon = vec![Point::new(0, 0), Point::new(4, 0), Point::new(4, 4), Point::new(4, 0), Point::new(0, 4)];
    assert!(matches!(
        checked(&polygon),
        Err(TriangulationError::Precondition(PreconditionError::DuplicateVertex { first: 1, second: 3 })),
    ));
}

#[test]
fn collinear_polygon() {
    let polygon = vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 2), Point::new(3, 3)];
    assert!(matches!(checked(&polygon), Err(TriangulationError::Precondition(PreconditionError::NotCounterclockwise))));
}

#[test]
fn not_monotone() {
    // Both sides pinch inwards, so a vertical line near either end crosses the boundary four times
    let polygon = vec![Point::new(-2, -2), Point::new(2, -2), Point::new(1, 0), Point::new(2, 2), Point::new(-2, 2), Point::new(-1, 0)];
    assert!(matches!(checked(&polygon), Err(TriangulationError::Precondition(PreconditionError::NotMonotone { .. }))));
}

#[test]
fn vertical_edge() {
    // Counter-clockwise and monotone in the loose sense, but (3, 4) and (3, 2) share x
    let polygon = vec![Point::new(4, 0), Point::new(3, 4), Point::new(3, 2), Point::new(1, 2)];
    assert!(matches!(
        checked(&polygon),
        Err(TriangulationError::Precondition(PreconditionError::VerticalEdge { position: 1 })),
    ));
    assert!(matches!(polygon.validate(), Err(PreconditionError::VerticalEdge { position: 1 })));
}
