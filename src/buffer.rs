use num_traits::NumCast;

use crate::convert;
use crate::error::{Error, Result};
use crate::ring::{Iter, RingStore};

/// Fixed-capacity FIFO window over a stream: pushing onto a full buffer
/// silently evicts from the opposite end, so the buffer always holds the most
/// recent `capacity` observations.
///
/// Logical index 0 is the oldest live element. `iter`, `as_slices` and
/// `to_vec` present the window oldest to newest, which is the order streaming
/// indicators consume it in.
#[derive(Debug, Clone)]
pub struct CircularBuffer<T: Copy + Default> {
    store: RingStore<T>,
}

impl<T: Copy + Default> CircularBuffer<T> {
    /// Allocates the whole window up front. Zero capacity is rejected.
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

    /// Appends `value` as the newest element. When the buffer is full the
    /// oldest element is evicted first and returned.
    #[inline]
    pub fn push(&mut self, value: T) -> Option<T> {
        let evicted = if self.store.is_full() {
            self.store.pop_front().ok()
        } else {
            None
        };
        self.store.write_back(value);
        evicted
    }

    /// Prepends `value` as the oldest element. When the buffer is full the
    /// newest element is evicted first and returned.
    #[inline]
    pub fn push_front(&mut self, value: T) -> Option<T> {
        let evicted = if self.store.is_full() {
            self.store.pop_back().ok()
        } else {
            None
        };
        self.store.write_front(value);
        evicted
    }

    /// Removes and returns the newest element.
    #[inline]
    pub fn pop(&mut self) -> Result<T> {
        self.store.pop_back()
    }

    /// Removes and returns the oldest element.
    #[inline]
    pub fn pop_front(&mut self) -> Result<T> {
        self.store.pop_front()
    }

    /// Value at logical index `i`, where 0 is the oldest live element.
    #[inline]
    pub fn get(&self, i: usize) -> Result<T> {
        self.store.get(i)
    }

    /// Overwrites the value at logical index `i` in place.
    #[inline]
    pub fn set(&mut self, i: usize, value: T) -> Result<()> {
        self.store.set(i, value)
    }

    /// Oldest live element.
    #[inline]
    pub fn first(&self) -> Result<T> {
        if self.store.is_empty() {
            return Err(Error::EmptyBuffer);
        }
        self.store.get(0)
    }

    /// Newest live element.
    #[inline]
    pub fn last(&self) -> Result<T> {
        match self.store.len() {
            0 => Err(Error::EmptyBuffer),
            n => self.store.get(n - 1),
        }
    }

    /// Pushes every item in order, evicting as needed. Streaming an iterator
    /// longer than the capacity leaves only its trailing `capacity` items.
    pub fn append<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in items {
            self.push(value);
        }
    }

    /// Pushes items only until the buffer is full, never evicting. Returns
    /// how many items were taken from the iterator.
    pub fn merge_fill<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let mut taken = 0;
        for value in items {
            if self.is_full() {
                break;
            }
            self.push(value);
            taken += 1;
        }
        taken
    }

    /// Pads the buffer to capacity with copies of `value`. Warm-up for
    /// indicators that need a full window before their first output.
    pub fn fill(&mut self, value: T) {
        while !self.is_full() {
            self.push(value);
        }
    }

    /// Converts `value` into the element type and pushes it. The push is
    /// skipped entirely when the value is not exactly representable.
    pub fn push_cast<S>(&mut self, value: S) -> Result<Option<T>>
    where
        S: NumCast + PartialEq + Copy,
        T: NumCast,
    {
        Ok(self.push(convert::checked(value)?))
    }

    /// Logically empties the buffer without touching the allocation.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Iterates the window oldest to newest.
    pub fn iter(&self) -> Iter<'_, T> {
        self.store.iter()
    }

    /// The window as two contiguous runs, `(older, newer)`, without copying.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        self.store.as_slices()
    }

    /// Copies the window into a fresh `Vec`, oldest to newest.
    pub fn to_vec(&self) -> Vec<T> {
        self.store.to_vec()
    }
}
