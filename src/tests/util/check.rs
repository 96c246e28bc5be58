use std::collections::HashSet;

use crate::{Orientation, Point, orientation, twice_signed_area};

fn is_edge(n: usize, a: usize, b: usize) -> bool {
    (a + 1) % n == b || (b + 1) % n == a
}

fn within(p: Point, q: Point, r: Point) -> bool {
    p.x.min(q.x) <= r.x && r.x <= p.x.max(q.x) && p.y.min(q.y) <= r.y && r.y <= p.y.max(q.y)
}

/// Closed segments `p1 p2` and `q1 q2` have at least one point in common
fn segments_touch(p1: Point, p2: Point, q1: Point, q2: Point) -> bool {
    let o1 = orientation(&p1, &p2, &q1);
    let o2 = orientation(&p1, &p2, &q2);
    let o3 = orientation(&q1, &q2, &p1);
    let o4 = orientation(&q1, &q2, &p2);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && within(p1, p2, q1))
        || (o2 == Orientation::Collinear && within(p1, p2, q2))
        || (o3 == Orientation::Collinear && within(q1, q2, p1))
        || (o4 == Orientation::Collinear && within(q1, q2, p2))
}

/// Segments between polygon positions meet anywhere other than a single shared end point
fn overlaps(polygon: &[Point], [a, b]: [usize; 2], [c, d]: [usize; 2]) -> bool {
    let shared = [a, b].iter().filter(|&&v| v == c || v == d).count();
    match shared {
        0 => segments_touch(polygon[a], polygon[b], polygon[c], polygon[d]),
        1 => {
            let (s, p) = if a == c || a == d { (a, b) } else { (b, a) };
            let q = if c == s { d } else { c };
            let (s, p, q) = (polygon[s], polygon[p], polygon[q]);
            let dot = (p.x - s.x) as i128 * (q.x - s.x) as i128 + (p.y - s.y) as i128 * (q.y - s.y) as i128;
            orientation(&s, &p, &q) == Orientation::Collinear && dot > 0
        }
        _ => true,
    }
}

/// Panics unless `diagonals`, given as pairs of positions in `polygon`, split it into `n - 2`
/// non-degenerate triangles which exactly cover its area.
pub fn check_triangulation(polygon: &[Point], diagonals: &[[usize; 2]]) {
    let n = polygon.len();
    assert!(n >= 3, "Not a polygon");
    assert_eq!(diagonals.len(), n - 3, "Wrong number of diagonals");

    let edges: Vec<[usize; 2]> = (0..n).map(|i| [i, (i + 1) % n]).collect();

    let mut seen = HashSet::new();
    for &[a, b] in diagonals {
        assert!(a < n && b < n, "Diagonal {:?} out of range", [a, b]);
        assert_ne!(a, b, "Degenerate diagonal");
        assert!(!is_edge(n, a, b), "Diagonal {:?} is a polygon edge", [a, b]);
        assert!(seen.insert([a.min(b), a.max(b)]), "Diagonal {:?} emitted twice", [a, b]);
    }

    for (i, &d) in diagonals.iter().enumerate() {
        for &other in edges.iter().chain(diagonals[i + 1..].iter()) {
            assert!(!overlaps(polygon, d, other), "Diagonal {:?} meets segment {:?}", d, other);
        }
    }

    let mut adjacent = vec![HashSet::new(); n];
    for &[a, b] in edges.iter().chain(diagonals.iter()) {
        adjacent[a].insert(b);
        adjacent[b].insert(a);
    }

    let mut triangles = Vec::new();
    for a in 0..n {
        for &b in adjacent[a].iter().filter(|&&b| b > a) {
            for &c in adjacent[b].iter().filter(|&&c| c > b) {
                if adjacent[a].contains(&c) {
                    triangles.push([a, b, c]);
                }
            }
        }
    }
    assert_eq!(triangles.len(), n - 2, "Wrong number of triangles");

    let mut covered = 0;
    for &[a, b, c] in &triangles {
        let area = twice_signed_area(&[polygon[a], polygon[b], polygon[c]]).abs();
        assert!(area > 0, "Degenerate triangle {:?}", [a, b, c]);
        covered += area;
    }
    assert_eq!(covered, twice_signed_area(polygon).abs(), "Triangles do not cover the polygon");
}
