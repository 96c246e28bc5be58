use std::marker::PhantomData;

use crate::DiagonalList;

pub(crate) struct GenericDiagonals<L: DiagonalList<V>, V> {
    list: L,
    initial_len: usize,
    _phantom: PhantomData<V>,
}

impl<L: DiagonalList<V>, V> GenericDiagonals<L, V> {
    pub fn new(list: L) -> Self {
        let initial_len = list.len();
        Self {
            list,
            initial_len,
            _phantom: PhantomData,
        }
    }

    pub fn new_diagonal(&mut self, v0: V, v1: V) {
        self.list.push(v0, v1);
    }

    pub fn build(self) -> L {
        self.list
    }

    pub fn fail(mut self) {
        self.list.truncate(self.initial_len);
    }
}
