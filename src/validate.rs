use crate::{
    PreconditionError,
    chain,
    inputs::Coords,
    math::{Orientation, coords_orientation, coords_twice_signed_area},
};

/// Check that `coords` form a simple, counter-clockwise, x-monotone polygon without repeated vertices
/// or vertical edges.
///
/// Runs in O(n log n) for the duplicate check and O(n) for the rest.
pub(crate) fn validate(coords: &[Coords]) -> Result<(), PreconditionError> {
    check_duplicates(coords)?;

    if coords_twice_signed_area(coords) <= 0 {
        return Err(PreconditionError::NotCounterclockwise);
    }

    check_vertical_edges(coords)?;

    let (left, right) = chain::extremes(coords);
    let forward = walk(coords.len(), left, right);
    let mut backward = walk(coords.len(), right, left);
    backward.reverse();

    check_monotone(coords, &forward)?;
    check_monotone(coords, &backward)?;

    // Counter-clockwise, so the forward chain runs underneath the return chain
    check_separated(coords, &forward, &backward, Orientation::RightTurn)?;
    check_separated(coords, &backward, &forward, Orientation::LeftTurn)?;

    log::debug!("validated {} vertices", coords.len());
    Ok(())
}

fn check_duplicates(coords: &[Coords]) -> Result<(), PreconditionError> {
    let mut sorted: Vec<usize> = (0..coords.len()).collect();
    sorted.sort_by(|&a, &b| coords[a].sweep_cmp(&coords[b]).then(a.cmp(&b)));
    for pair in sorted.windows(2) {
        if coords[pair[0]] == coords[pair[1]] {
            return Err(PreconditionError::DuplicateVertex { first: pair[0], second: pair[1] });
        }
    }
    Ok(())
}

/// The sweep orders vertices of equal x by y alone, which misplaces the ends of a vertical edge
fn check_vertical_edges(coords: &[Coords]) -> Result<(), PreconditionError> {
    let n = coords.len();
    for i in 0..n {
        if coords[i].x() == coords[(i + 1) % n].x() {
            return Err(PreconditionError::VerticalEdge { position: i });
        }
    }
    Ok(())
}

/// Positions from `from` to `to` inclusive, stepping forward through the polygon
fn walk(n: usize, from: usize, to: usize) -> Vec<usize> {
    let mut positions = vec![from];
    let mut i = from;
    while i != to {
        i = (i + 1) % n;
        positions.push(i);
    }
    positions
}

/// `chain` must not decrease in x
fn check_monotone(coords: &[Coords], chain: &[usize]) -> Result<(), PreconditionError> {
    for pair in chain.windows(2) {
        if coords[pair[1]].x() < coords[pair[0]].x() {
            return Err(PreconditionError::NotMonotone { position: pair[1] });
        }
    }
    Ok(())
}

/// Every interior vertex of `chain` must lie strictly on the `side` of `other` (both ordered by x).
///
/// Both chains are piecewise linear over the union of their vertices' x values, so comparing at
/// every vertex is enough to show they never touch between the shared end points.
fn check_separated(coords: &[Coords], chain: &[usize], other: &[usize], side: Orientation) -> Result<(), PreconditionError> {
    if chain.len() < 3 {
        return Ok(());
    }

    let mut j = 0;
    for &v in &chain[1..chain.len() - 1] {
        let p = coords[v];
        while j + 1 < other.len() && coords[other[j + 1]].x() < p.x() {
            j += 1;
        }

        let mut k = j;
        while k < other.len() && coords[other[k]].x() <= p.x() {
            let a = coords[other[k]];
            let clear = if a.x() == p.x() {
                match side {
                    Orientation::RightTurn => p.y() < a.y(),
                    _ => p.y() > a.y(),
                }
            } else if k + 1 < other.len() && coords[other[k + 1]].x() > p.x() {
                coords_orientation(&a, &coords[other[k + 1]], &p) == side
            } else {
                // The segment ends exactly at p.x; its end point is compared directly next iteration
                true
            };

            if !clear {
                return Err(PreconditionError::ChainsCross { position: v });
            }
            k += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(points: &[(i64, i64)]) -> Result<(), PreconditionError> {
        let cs: Vec<Coords> = points.iter().map(|&(x, y)| Coords::new(x, y)).collect();
        validate(&cs)
    }

    #[test]
    fn accepts_monotone() {
        check(&[(0, 0), (2, -3), (4, -4), (6, -3), (8, 0), (9, 6)]).unwrap();
        check(&[(0, 0), (10, 0), (8, 4), (5, 5), (2, 4)]).unwrap();
        check(&[(0, 0), (3, 3), (5, 4), (6, 4), (8, 9), (7, 10)]).unwrap();
    }

    #[test]
    fn accepts_shared_x_across_chains() {
        // (3, -1) and (3, 4) share an x coordinate but are not joined by an edge
        check(&[(0, 1), (3, -1), (6, 1), (3, 4)]).unwrap();
    }

    #[test]
    fn rejects_vertical_edges() {
        assert_eq!(check(&[(0, 0), (0, -2), (4, -2), (4, 0)]), Err(PreconditionError::VerticalEdge { position: 0 }));
        assert_eq!(check(&[(0, 2), (1, 0), (3, 0), (3, 2)]), Err(PreconditionError::VerticalEdge { position: 2 }));
        assert_eq!(check(&[(4, 0), (3, 4), (3, 2), (1, 2)]), Err(PreconditionError::VerticalEdge { position: 1 }));
    }

    #[test]
    fn rejects_duplicates() {
        assert_eq!(
            check(&[(0, 0), (4, 0), (4, 4), (4, 0), (0, 4)]),
            Err(PreconditionError::DuplicateVertex { first: 1, second: 3 }),
        );
    }

    #[test]
    fn rejects_clockwise() {
        assert_eq!(
            check(&[(0, 0), (1, 2), (3, 3), (5, 1), (4, -1), (2, -2)]),
            Err(PreconditionError::NotCounterclockwise),
        );
    }

    #[test]
    fn rejects_collinear() {
        assert_eq!(check(&[(0, 0), (1, 1), (2, 2)]), Err(PreconditionError::NotCounterclockwise));
    }

    #[test]
    fn rejects_non_monotone() {
        // The bottom chain doubles back at (3, -1)
        assert_eq!(
            check(&[(0, 0), (4, -2), (3, -1), (6, 0), (3, 3)]),
            Err(PreconditionError::NotMonotone { position: 2 }),
        );
    }

    #[test]
    fn rejects_crossing_chains() {
        // The bottom chain pokes above the top chain's edge from (5, 5) to (0, 0)
        assert_eq!(
            check(&[(0, 0), (3, 4), (6, 2), (5, 5)]),
            Err(PreconditionError::ChainsCross { position: 1 }),
        );
    }

    #[test]
    fn rejects_touching_chains() {
        // (2, 2) sits on the return edge from (4, 4) to (0, 0)
        assert_eq!(
            check(&[(0, 0), (2, 2), (4, 0), (5, 1), (4, 4)]),
            Err(PreconditionError::ChainsCross { position: 1 }),
        );
    }
}
