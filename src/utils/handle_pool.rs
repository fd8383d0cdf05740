use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::marker::PhantomData;

use super::handle::{HandleIndex, HandleLike};

#[derive(PartialEq, Eq)]
struct FreeIndex(Reverse<HandleIndex>);

impl PartialOrd for FreeIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FreeIndex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

/// `HandlePool` manages a collection of handles with continuous `index` fields.
/// An odd version marks the index as alive, an even one as freed. Freed indices
/// are reused smallest-first.
pub struct HandlePool<H: HandleLike> {
    versions: Vec<HandleIndex>,
    frees: BinaryHeap<FreeIndex>,
    _phantom: PhantomData<H>,
}

impl<H: HandleLike> Default for HandlePool<H> {
    fn default() -> Self {
        HandlePool::new()
    }
}

impl<H: HandleLike> HandlePool<H> {
    /// Constructs a new, empty `HandlePool`.
    pub fn new() -> Self {
        HandlePool {
            versions: Vec::new(),
            frees: BinaryHeap::new(),
            _phantom: PhantomData,
        }
    }

    /// Creates a unused handle.
    pub fn create(&mut self) -> H {
        if let Some(FreeIndex(Reverse(index))) = self.frees.pop() {
            let i = index as usize;
            self.versions[i] += 1;
            H::new(index, self.versions[i])
        } else {
            self.versions.push(1);
            H::new(self.versions.len() as HandleIndex - 1, 1)
        }
    }

    /// Returns true if this handle was created by `HandlePool`, and has not been
    /// freed yet.
    pub fn is_alive(&self, handle: H) -> bool {
        let index = handle.index() as usize;
        index < self.versions.len()
            && (self.versions[index] & 0x1) == 1
            && self.versions[index] == handle.version()
    }

    /// Recycles the handle index, and marks its version as dead.
    pub fn free(&mut self, handle: H) -> bool {
        if !self.is_alive(handle) {
            return false;
        }

        self.versions[handle.index() as usize] += 1;
        self.frees.push(FreeIndex(Reverse(handle.index())));
        true
    }

    /// Returns the total number of alive handles in this `HandlePool`.
    #[inline]
    pub fn len(&self) -> usize {
        self.versions.len() - self.frees.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::handle::Handle;

    #[test]
    fn lifecycle() {
        let mut pool: HandlePool<Handle> = HandlePool::new();
        assert!(pool.is_empty());

        let e1 = pool.create();
        assert!(e1.is_valid());
        assert!(pool.is_alive(e1));
        assert_eq!(pool.len(), 1);

        assert!(pool.free(e1));
        assert!(!pool.is_alive(e1));
        assert!(!pool.free(e1));
        assert_eq!(pool.len(), 0);

        let e2 = pool.create();
        assert_eq!(e2.index(), e1.index());
        assert_ne!(e2.version(), e1.version());
        assert!(pool.is_alive(e2));
        assert!(!pool.is_alive(e1));
    }

    #[test]
    fn index_reuse() {
        let mut pool: HandlePool<Handle> = HandlePool::new();
        let handles: Vec<_> = (0..10).map(|_| pool.create()).collect();

        pool.free(handles[7]);
        pool.free(handles[3]);

        assert_eq!(pool.create().index(), 3);
        assert_eq!(pool.create().index(), 7);
        assert_eq!(pool.create().index(), 10);
    }
}
