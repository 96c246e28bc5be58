/// A list of diagonals represented as pairs of vertices of type `V`
pub trait DiagonalList<V> {
    /// Add a new diagonal to the list
    fn push(&mut self, v0: V, v1: V);

    /// The number of diagonals in the list
    fn len(&self) -> usize;

    /// Remove newly added diagonals until there are only `len` remaining
    fn truncate(&mut self, len: usize);

    /// Returns `true` if the collection contains no diagonals
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V> DiagonalList<V> for Vec<V> {
    fn push(&mut self, v0: V, v1: V) {
        self.push(v0);
        self.push(v1);
    }

    fn len(&self) -> usize {
        self.len() / 2
    }

    fn truncate(&mut self, len: usize) {
        self.truncate(len * 2)
    }
}

impl<V> DiagonalList<V> for Vec<[V; 2]> {
    fn push(&mut self, v0: V, v1: V) {
        self.push([v0, v1]);
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn truncate(&mut self, len: usize) {
        self.truncate(len)
    }
}

impl<V> DiagonalList<V> for Vec<(V, V)> {
    fn push(&mut self, v0: V, v1: V) {
        self.push((v0, v1));
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn truncate(&mut self, len: usize) {
        self.truncate(len)
    }
}

impl<V, L: DiagonalList<V>> DiagonalList<V> for &mut L {
    fn push(&mut self, v0: V, v1: V) {
        (**self).push(v0, v1)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn truncate(&mut self, len: usize) {
        (**self).truncate(len)
    }
}
