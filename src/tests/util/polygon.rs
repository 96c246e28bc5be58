use rand::{Rng, seq::index};

use crate::Point;

use super::vtest::VTest;

fn points(coords: &[(i64, i64)]) -> Vec<Point> {
    coords.iter().copied().map(Point::from).collect()
}

/// The clockwise zig-zag hexagon from the command line's sample input
pub fn hexagon() -> Vec<Point> {
    points(&[(0, 0), (1, 2), (3, 3), (5, 1), (4, -1), (2, -2)])
}

pub fn triangle() -> Vec<Point> {
    points(&[(0, 0), (4, 1), (2, 5)])
}

/// Bottom chain curving down, joined to a single tall vertex on the right
pub fn bowl() -> Vec<Point> {
    points(&[(0, 0), (2, -3), (4, -4), (6, -3), (8, 0), (9, 6)])
}

pub fn pentagon() -> Vec<Point> {
    points(&[(0, 0), (10, 0), (8, 4), (5, 5), (2, 4)])
}

/// A flat base with a saw-tooth top
pub fn comb() -> Vec<Point> {
    points(&[(0, 0), (10, 0), (9, 3), (8, 1), (7, 3), (6, 1), (5, 3), (4, 1), (3, 3), (2, 1), (1, 3)])
}

/// Both chains change direction several times, so the sweep alternates between fans and ears
pub fn wave() -> Vec<Point> {
    points(&[(0, 0), (3, -4), (5, -1), (8, -5), (11, -2), (14, 0), (12, 6), (9, 2), (6, 7), (2, 3)])
}

pub fn vtest_pentagon() -> Vec<VTest> {
    vec![
        (0, 0).into(),
        (10, 0).into(),
        (8, 4).into(),
        (5, 5).into(),
        (2, 4).into(),
    ]
}

/// Counter-clockwise polygons which pass [Polygon::validate](crate::Polygon::validate)
pub fn all() -> Vec<Vec<Point>> {
    vec![triangle(), bowl(), pentagon(), comb(), wave()]
}

/// A random counter-clockwise x-monotone polygon with `n >= 3` vertices.
///
/// All x coordinates are distinct and drawn from `-extent..extent`. The end points sit on `y = 0`,
/// every other vertex is randomly placed above or below it, so the two chains never meet.
/// Large extents make collinear vertices vanishingly unlikely. The first vertex is chosen at random.
pub fn random_monotone<R: Rng>(rng: &mut R, n: usize, extent: i64) -> Vec<Point> {
    assert!(n >= 3);
    let mut xs: Vec<i64> = index::sample(rng, 2 * extent as usize, n)
        .into_iter()
        .map(|x| x as i64 - extent)
        .collect();
    xs.sort_unstable();

    let mut lower = Vec::new();
    let mut upper = Vec::new();
    for &x in &xs[1..n - 1] {
        if rng.gen_bool(0.5) {
            lower.push(Point::new(x, -rng.gen_range(1..=extent)));
        } else {
            upper.push(Point::new(x, rng.gen_range(1..=extent)));
        }
    }

    let mut polygon = Vec::with_capacity(n);
    polygon.push(Point::new(xs[0], 0));
    polygon.extend(lower);
    polygon.push(Point::new(xs[n - 1], 0));
    polygon.extend(upper.into_iter().rev());

    let start = rng.gen_range(0..n);
    polygon.rotate_left(start);
    polygon
}
