use std::error;

use smallvec::SmallVec;

use crate::{
    Chain, DiagonalBuilder, DiagonalFormat, Polygon, PreconditionError, TriangulationError,
    chain::{self, Chains},
    inputs::Coords,
    math::{Orientation, coords_orientation},
    validate,
};
#[cfg(feature = "debugging")]
use crate::debug;

/// A [Polygon] with its vertices gathered in polygon order, ready to be swept.
///
/// All internal work is done on positions (`0..n` in [Polygon::iter_indices] order); positions are
/// translated back to [Polygon::Index]es only when a diagonal is handed to the builder.
pub(crate) struct MonotonePolygon<'p, P: Polygon<'p>> {
    polygon: &'p P,
    indices: Vec<P::Index>,
    coords: Vec<Coords>,
}

impl<'p, P: Polygon<'p>> MonotonePolygon<'p, P> {
    pub fn new(polygon: &'p P) -> Self {
        let indices: Vec<P::Index> = polygon.iter_indices().collect();
        let coords = indices.iter()
            .map(|vi| Coords::of(polygon.get_vertex(vi.clone())))
            .collect();
        Self { polygon, indices, coords }
    }

    pub fn chains(&self) -> Chains {
        chain::classify(&self.coords)
    }

    pub fn validate(&self) -> Result<(), PreconditionError> {
        validate::validate(&self.coords)
    }

    pub fn triangulate<F: DiagonalFormat<'p, P>>(self, format: F) -> Result<<F::Builder as DiagonalBuilder<'p, P>>::Output, TriangulationError<<F::Builder as DiagonalBuilder<'p, P>>::Error>> {
        let vertex_count = self.coords.len();
        if vertex_count < 3 {
            return Err(TriangulationError::NotEnoughVertices(vertex_count));
        }

        let chains = self.chains();
        let order = sweep_order(&self.coords);
        log::debug!("triangulating {} vertices, x-extremes at positions {} and {}", vertex_count, chains.left, chains.right);

        let mut builder = format.initialize(self.polygon)?;

        let indices = &self.indices;
        let sweep = Sweep::new(&self.coords, &chains, |p0: usize, p1: usize| {
            log::trace!("diagonal {:?} - {:?}", indices[p0], indices[p1]);
            builder.add_diagonal(indices[p0].clone(), indices[p1].clone())
        });
        // Separate out the sweep, so builder error handling can be consolidated to one location
        match sweep.run(&order) {
            Ok(diagonal_count) => {
                log::debug!("emitted {} diagonals", diagonal_count);
                builder.build().map_err(TriangulationError::from)
            }
            Err(error) => {
                log::debug!("triangulation failed: {}", error);
                builder.fail(&error);
                Err(error)
            }
        }
    }
}

/// Positions sorted by x ascending, ties broken by y descending. The sort is stable, so vertices
/// with identical coordinates stay in polygon order.
pub(crate) fn sweep_order(coords: &[Coords]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..coords.len()).collect();
    order.sort_by(|&a, &b| coords[a].sweep_cmp(&coords[b]));
    order
}

/// The state of one left-to-right sweep. Diagonals are reported as position pairs through `emit`,
/// the first position always being the vertex being processed.
struct Sweep<'a, E: error::Error, Emit: FnMut(usize, usize) -> Result<(), E>> {
    coords: &'a [Coords],
    chains: &'a Chains,
    // Vertices still visible from the sweep front, leftmost at the bottom
    stack: SmallVec<[usize; 16]>,
    emit: Emit,
    diagonal_count: usize,
    #[cfg(feature = "debugging")]
    svg: Option<debug::svg::SweepRecorder>,
}

impl<'a, E: error::Error, Emit: FnMut(usize, usize) -> Result<(), E>> Sweep<'a, E, Emit> {
    fn new(coords: &'a [Coords], chains: &'a Chains, emit: Emit) -> Self {
        Self {
            coords,
            chains,
            stack: SmallVec::new(),
            emit,
            diagonal_count: 0,
            #[cfg(feature = "debugging")]
            svg: debug::svg::SweepRecorder::from_env(coords),
        }
    }

    fn run(mut self, order: &[usize]) -> Result<usize, TriangulationError<E>> {
        let n = order.len();
        if n < 3 {
            return Err(TriangulationError::internal(format!("Sweep needs at least 3 vertices, has {}", n)));
        }

        self.stack.push(order[0]);
        self.stack.push(order[1]);

        for i in 2..n - 1 {
            let cur = order[i];
            let top = self.top()?;
            if self.chains.of(cur) != self.chains.of(top) {
                self.fan_across(cur, order[i - 1])?;
            } else {
                self.cut_ears(cur)?;
            }

            #[cfg(feature = "debugging")]
            self.record_step(i, cur);
        }

        let last = order[n - 1];
        self.finish(last)?;

        #[cfg(feature = "debugging")]
        self.record_result();

        Ok(self.diagonal_count)
    }

    /// `cur` lies on the other chain from everything on the stack but the bottom, so all of them see it.
    /// Afterwards only the edge from the sweep predecessor to `cur` remains open.
    fn fan_across(&mut self, cur: usize, predecessor: usize) -> Result<(), TriangulationError<E>> {
        log::trace!("position {} ({}) switches chains against {:?}", cur, self.chains.of(cur), self.stack);
        while self.stack.len() > 1 {
            let v = self.pop()?;
            self.connect(cur, v)?;
        }
        self.stack.clear();
        self.stack.push(predecessor);
        self.stack.push(cur);
        Ok(())
    }

    /// `cur` continues the chain of the stack top. Cut off stacked vertices for as long as they
    /// bulge towards the polygon interior, connecting `cur` to each newly exposed vertex.
    fn cut_ears(&mut self, cur: usize) -> Result<(), TriangulationError<E>> {
        log::trace!("position {} ({}) continues its chain on {:?}", cur, self.chains.of(cur), self.stack);
        let convex = match self.chains.of(cur) {
            Chain::Upper => Orientation::LeftTurn,
            Chain::Lower => Orientation::RightTurn,
        };
        while self.stack.len() >= 2 {
            let a = self.stack[self.stack.len() - 2];
            let b = self.stack[self.stack.len() - 1];
            if coords_orientation(&self.coords[a], &self.coords[b], &self.coords[cur]) != convex {
                break;
            }
            self.stack.pop();
            self.connect(cur, a)?;
        }
        self.stack.push(cur);
        Ok(())
    }

    /// The stack top and bottom are both polygon-edge neighbours of `last`; everything between them gets a diagonal.
    fn finish(&mut self, last: usize) -> Result<(), TriangulationError<E>> {
        log::trace!("position {} closes the sweep on {:?}", last, self.stack);
        self.pop()?;
        while self.stack.len() > 1 {
            let v = self.pop()?;
            self.connect(last, v)?;
        }
        Ok(())
    }

    fn connect(&mut self, p0: usize, p1: usize) -> Result<(), TriangulationError<E>> {
        (self.emit)(p0, p1).map_err(TriangulationError::Builder)?;
        self.diagonal_count += 1;
        #[cfg(feature = "debugging")]
        if let Some(svg) = &mut self.svg {
            svg.add_diagonal(p0, p1);
        }
        Ok(())
    }

    fn top(&self) -> Result<usize, TriangulationError<E>> {
        self.stack.last().copied().ok_or_else(|| TriangulationError::internal("Sweep stack is empty"))
    }

    fn pop(&mut self) -> Result<usize, TriangulationError<E>> {
        self.stack.pop().ok_or_else(|| TriangulationError::internal("Sweep stack underflow"))
    }

    #[cfg(feature = "debugging")]
    fn record_step(&mut self, step: usize, cur: usize) {
        if let Some(svg) = &mut self.svg {
            svg.step(step, self.chains, &self.stack, cur);
        }
    }

    #[cfg(feature = "debugging")]
    fn record_result(&mut self) {
        if let Some(svg) = &mut self.svg {
            svg.result(self.chains);
        }
    }
}
