use std::fmt;

use crate::inputs::Coords;

/// Which boundary chain of an x-monotone polygon a vertex belongs to.
///
/// The [Upper](Chain::Upper) chain runs forward (in polygon order) from the minimum-x vertex to
/// the maximum-x vertex, and includes both of them. The [Lower](Chain::Lower) chain is
/// everything on the way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chain {
    Upper,
    Lower,
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chain::Upper => write!(f, "UPPER"),
            Chain::Lower => write!(f, "LOWER"),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Chains {
    /// First position with the minimum x
    pub left: usize,
    /// First position with the maximum x
    pub right: usize,
    pub labels: Vec<Chain>,
}

impl Chains {
    #[inline(always)]
    pub fn of(&self, position: usize) -> Chain {
        self.labels[position]
    }
}

/// Positions of the x-extreme vertices. Both ties resolve to the first position scanning from 0.
pub(crate) fn extremes(coords: &[Coords]) -> (usize, usize) {
    let mut left = 0;
    let mut right = 0;
    for (i, c) in coords.iter().enumerate().skip(1) {
        if c.x() < coords[left].x() {
            left = i;
        }
        if c.x() > coords[right].x() {
            right = i;
        }
    }
    (left, right)
}

pub(crate) fn classify(coords: &[Coords]) -> Chains {
    let n = coords.len();
    if n == 0 {
        return Chains { left: 0, right: 0, labels: Vec::new() };
    }

    let (left, right) = extremes(coords);
    let mut labels = vec![Chain::Lower; n];

    let mut i = left;
    loop {
        labels[i] = Chain::Upper;
        if i == right {
            break;
        }
        i = (i + 1) % n;
    }

    // Everything else is already Lower; the walk only has to stop at `left`
    let mut i = right;
    while i != left {
        if i != right {
            labels[i] = Chain::Lower;
        }
        i = (i + 1) % n;
    }

    log::trace!("chains: left {} right {} {:?}", left, right, labels);

    Chains { left, right, labels }
}
