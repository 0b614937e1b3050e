use crate::error::{Error, Result};
use crate::ring::{Iter, RingStore};

/// Fixed-capacity double-ended queue that refuses to evict: pushing at
/// capacity fails with `CapacityExceeded` and leaves the queue unchanged.
///
/// This is the storage discipline the monotone queues build on. Their
/// protocol obliges the caller to evict stale entries before inserting, so a
/// full deque means the protocol was broken upstream; overwriting silently
/// would bury that bug.
#[derive(Debug, Clone)]
pub struct CircularDeque<T: Copy + Default> {
    store: RingStore<T>,
}

impl<T: Copy + Default> CircularDeque<T> {
    /// Allocates `capacity` slots up front. Zero capacity is rejected.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            store: RingStore::new(capacity)?,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.store.is_full()
    }

    /// Appends after the newest element. Fails when full.
    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<()> {
        self.store.push_back(value)
    }

    /// Prepends before the oldest element. Fails when full.
    #[inline]
    pub fn push_front(&mut self, value: T) -> Result<()> {
        self.store.push_front(value)
    }

    /// Removes and returns the newest element.
    #[inline]
    pub fn pop_back(&mut self) -> Result<T> {
        self.store.pop_back()
    }

    /// Removes and returns the oldest element.
    #[inline]
    pub fn pop_front(&mut self) -> Result<T> {
        self.store.pop_front()
    }

    /// Value at logical index `i`, where 0 is the oldest element.
    #[inline]
    pub fn get(&self, i: usize) -> Result<T> {
        self.store.get(i)
    }

    /// Overwrites the value at logical index `i` in place.
    #[inline]
    pub fn set(&mut self, i: usize, value: T) -> Result<()> {
        self.store.set(i, value)
    }

    /// Oldest element.
    #[inline]
    pub fn first(&self) -> Result<T> {
        if self.store.is_empty() {
            return Err(Error::EmptyBuffer);
        }
        self.store.get(0)
    }

    /// Newest element.
    #[inline]
    pub fn last(&self) -> Result<T> {
        match self.store.len() {
            0 => Err(Error::EmptyBuffer),
            n => self.store.get(n - 1),
        }
    }

    /// Logically empties the deque without touching the allocation.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Iterates oldest to newest.
    pub fn iter(&self) -> Iter<'_, T> {
        self.store.iter()
    }

    /// Copies the elements into a fresh `Vec`, oldest to newest.
    pub fn to_vec(&self) -> Vec<T> {
        self.store.to_vec()
    }
}
