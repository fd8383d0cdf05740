use super::handle::HandleLike;
use super::handle_pool::HandlePool;

/// A named object collection. Every time a handle is created or freed, the
/// attached instance `T` is created or dropped along with it.
pub struct ObjectPool<H: HandleLike, T: Sized> {
    handles: HandlePool<H>,
    entries: Vec<Option<T>>,
}

impl<H: HandleLike, T: Sized> Default for ObjectPool<H, T> {
    fn default() -> Self {
        ObjectPool::new()
    }
}

impl<H: HandleLike, T: Sized> ObjectPool<H, T> {
    /// Constructs a new, empty `ObjectPool`.
    pub fn new() -> Self {
        ObjectPool {
            handles: HandlePool::new(),
            entries: Vec::new(),
        }
    }

    /// Creates a `T` and names it with a handle.
    pub fn create(&mut self, value: T) -> H {
        let handle = self.handles.create();

        if handle.index() as usize >= self.entries.len() {
            self.entries.push(Some(value));
        } else {
            self.entries[handle.index() as usize] = Some(value);
        }

        handle
    }

    /// Returns immutable reference to internal value with name `handle`.
    #[inline]
    pub fn get(&self, handle: H) -> Option<&T> {
        if self.handles.is_alive(handle) {
            self.entries[handle.index() as usize].as_ref()
        } else {
            None
        }
    }

    /// Returns true if this handle was created by `ObjectPool`, and has not been
    /// freed yet.
    #[inline]
    pub fn contains(&self, handle: H) -> bool {
        self.handles.is_alive(handle)
    }

    /// Recycles the value with name `handle`.
    #[inline]
    pub fn free(&mut self, handle: H) -> Option<T> {
        if self.handles.free(handle) {
            self.entries[handle.index() as usize].take()
        } else {
            None
        }
    }

    /// Returns the total number of alive objects in this `ObjectPool`.
    #[inline]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
