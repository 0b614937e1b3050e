use core::fmt;

use crate::error::{Error, Result};

/// Fixed-capacity ring storage addressed through a logical begin offset.
///
/// All slots are preallocated at construction and never move: logical index 0
/// is the oldest live element, `begin` is its physical slot, and
/// `(begin + i) % capacity` is the only logical-to-physical mapping. Inserts
/// and removals at either end only step `begin` and `len`; element data is
/// written exactly once per insert.
///
/// The store itself never evicts. Pushing at capacity fails with
/// `CapacityExceeded`, and the policy wrappers ([`CircularBuffer`] overwrites,
/// [`CircularDeque`] refuses) decide what full means.
///
/// [`CircularBuffer`]: crate::buffer::CircularBuffer
/// [`CircularDeque`]: crate::deque::CircularDeque
#[derive(Clone)]
pub struct RingStore<T: Copy + Default> {
    capacity: usize,
    len: usize,
    begin: usize,
    data: Vec<T>,
}

impl<T: Copy + Default> RingStore<T> {
    /// Allocates `capacity` slots up front. Zero capacity is rejected.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity);
        }
        Ok(Self {
            capacity,
            len: 0,
            begin: 0,
            data: vec![T::default(); capacity],
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Physical slot of logical index `i`. Caller guarantees `i < len`.
    #[inline]
    fn slot(&self, i: usize) -> usize {
        debug_assert!(i < self.len);
        (self.begin + i) % self.capacity
    }

    /// Physical slot one past the newest element.
    #[inline]
    fn end(&self) -> usize {
        (self.begin + self.len) % self.capacity
    }

    /// Value at logical index `i`, where 0 is the oldest live element.
    #[inline]
    pub fn get(&self, i: usize) -> Result<T> {
        if i >= self.len {
            return Err(Error::IndexOutOfBounds {
                index: i,
                len: self.len,
            });
        }
        Ok(self.data[self.slot(i)])
    }

    /// Overwrites the value at logical index `i` in place.
    #[inline]
    pub fn set(&mut self, i: usize, value: T) -> Result<()> {
        if i >= self.len {
            return Err(Error::IndexOutOfBounds {
                index: i,
                len: self.len,
            });
        }
        let slot = self.slot(i);
        self.data[slot] = value;
        Ok(())
    }

    /// Appends after the newest element.
    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.write_back(value);
        Ok(())
    }

    /// Prepends before the oldest element, stepping `begin` back circularly.
    #[inline]
    pub fn push_front(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.write_front(value);
        Ok(())
    }

    /// Append without the full check. Caller guarantees `len < capacity`.
    #[inline]
    pub(crate) fn write_back(&mut self, value: T) {
        debug_assert!(!self.is_full());
        let end = self.end();
        self.data[end] = value;
        self.len += 1;
    }

    /// Prepend without the full check. Caller guarantees `len < capacity`.
    #[inline]
    pub(crate) fn write_front(&mut self, value: T) {
        debug_assert!(!self.is_full());
        self.begin = (self.begin + self.capacity - 1) % self.capacity;
        self.data[self.begin] = value;
        self.len += 1;
    }

    /// Removes and returns the newest element.
    #[inline]
    pub fn pop_back(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(Error::EmptyBuffer);
        }
        let value = self.data[self.slot(self.len - 1)];
        self.len -= 1;
        Ok(value)
    }

    /// Removes and returns the oldest element, stepping `begin` forward.
    #[inline]
    pub fn pop_front(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(Error::EmptyBuffer);
        }
        let value = self.data[self.begin];
        self.begin = (self.begin + 1) % self.capacity;
        self.len -= 1;
        Ok(value)
    }

    /// Logically empties the store. Slots keep stale values until overwritten.
    pub fn clear(&mut self) {
        self.begin = 0;
        self.len = 0;
    }

    /// Iterates the live elements oldest to newest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { store: self, i: 0 }
    }

    /// Live elements as two contiguous runs, `(older, newer)`, without
    /// copying. The second run is empty unless the window wraps the physical
    /// end of storage.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        if self.len == 0 {
            return (&[], &[]);
        }
        let first_run = self.len.min(self.capacity - self.begin);
        let older = &self.data[self.begin..self.begin + first_run];
        let newer = &self.data[..self.len - first_run];
        (older, newer)
    }

    /// Copies the live elements into a fresh `Vec`, oldest to newest.
    pub fn to_vec(&self) -> Vec<T> {
        let (older, newer) = self.as_slices();
        let mut out = Vec::with_capacity(self.len);
        out.extend_from_slice(older);
        out.extend_from_slice(newer);
        out
    }
}

impl<T: Copy + Default> fmt::Debug for RingStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingStore")
            .field("capacity", &self.capacity)
            .field("len", &self.len)
            .field("begin", &self.begin)
            .finish_non_exhaustive()
    }
}

/// Borrowing iterator over live elements, oldest to newest.
pub struct Iter<'a, T: Copy + Default> {
    store: &'a RingStore<T>,
    i: usize,
}

impl<'a, T: Copy + Default> Iterator for Iter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.store.len {
            return None;
        }
        let value = self.store.data[self.store.slot(self.i)];
        self.i += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.store.len - self.i;
        (remaining, Some(remaining))
    }
}

impl<'a, T: Copy + Default> ExactSizeIterator for Iter<'a, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_is_rejected() {
        assert_eq!(RingStore::<f64>::new(0).unwrap_err(), Error::InvalidCapacity);
        assert!(RingStore::<f64>::new(1).is_ok());
    }

    #[test]
    fn push_back_then_pop_front_is_fifo() {
        let mut store = RingStore::new(4).unwrap();
        for v in 1..=4 {
            store.push_back(v).unwrap();
        }
        assert!(store.is_full());
        assert_eq!(store.pop_front().unwrap(), 1);
        assert_eq!(store.pop_front().unwrap(), 2);
        store.push_back(5).unwrap();
        assert_eq!(store.to_vec(), vec![3, 4, 5]);
    }

    #[test]
    fn push_front_wraps_begin_to_last_slot() {
        let mut store = RingStore::new(3).unwrap();
        store.push_back(2).unwrap();
        store.push_front(1).unwrap();
        // begin stepped from 0 back to slot 2
        assert_eq!(store.get(0).unwrap(), 1);
        assert_eq!(store.get(1).unwrap(), 2);
        assert_eq!(store.pop_back().unwrap(), 2);
        assert_eq!(store.pop_back().unwrap(), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn full_store_rejects_both_ends_unchanged() {
        let mut store = RingStore::new(2).unwrap();
        store.push_back(10).unwrap();
        store.push_back(20).unwrap();
        assert_eq!(
            store.push_back(30).unwrap_err(),
            Error::CapacityExceeded { capacity: 2 }
        );
        assert_eq!(
            store.push_front(0).unwrap_err(),
            Error::CapacityExceeded { capacity: 2 }
        );
        assert_eq!(store.to_vec(), vec![10, 20]);
    }

    #[test]
    fn get_and_set_reject_indices_past_len() {
        let mut store = RingStore::new(4).unwrap();
        store.push_back(1.0).unwrap();
        store.push_back(2.0).unwrap();
        assert_eq!(
            store.get(2).unwrap_err(),
            Error::IndexOutOfBounds { index: 2, len: 2 }
        );
        assert_eq!(
            store.set(5, 9.0).unwrap_err(),
            Error::IndexOutOfBounds { index: 5, len: 2 }
        );
        store.set(0, 1.5).unwrap();
        assert_eq!(store.get(0).unwrap(), 1.5);
    }

    #[test]
    fn as_slices_splits_only_when_wrapped() {
        let mut store = RingStore::new(4).unwrap();
        store.push_back(1).unwrap();
        store.push_back(2).unwrap();
        store.push_back(3).unwrap();
        let (older, newer) = store.as_slices();
        assert_eq!(older, &[1, 2, 3]);
        assert!(newer.is_empty());

        // wrap: drop two from the front, append two past the physical end
        store.pop_front().unwrap();
        store.pop_front().unwrap();
        store.push_back(4).unwrap();
        store.push_back(5).unwrap();
        let (older, newer) = store.as_slices();
        assert_eq!(older, &[3, 4]);
        assert_eq!(newer, &[5]);
        assert_eq!(store.to_vec(), vec![3, 4, 5]);
    }

    #[test]
    fn empty_pops_report_empty_buffer() {
        let mut store = RingStore::<i64>::new(2).unwrap();
        assert_eq!(store.pop_back().unwrap_err(), Error::EmptyBuffer);
        assert_eq!(store.pop_front().unwrap_err(), Error::EmptyBuffer);
    }

    #[test]
    fn clear_resets_for_reuse() {
        let mut store = RingStore::new(3).unwrap();
        store.push_back(7).unwrap();
        store.push_back(8).unwrap();
        store.clear();
        assert!(store.is_empty());
        assert_eq!(
            store.get(0).unwrap_err(),
            Error::IndexOutOfBounds { index: 0, len: 0 }
        );
        store.push_back(9).unwrap();
        assert_eq!(store.to_vec(), vec![9]);
    }

    #[test]
    fn iterator_tracks_logical_order_across_wrap() {
        let mut store = RingStore::new(3).unwrap();
        for v in 0..3 {
            store.push_back(v).unwrap();
        }
        store.pop_front().unwrap();
        store.push_back(3).unwrap();
        let collected: Vec<i32> = store.iter().collect();
        assert_eq!(collected, vec![1, 2, 3]);
        assert_eq!(store.iter().len(), 3);
    }
}
