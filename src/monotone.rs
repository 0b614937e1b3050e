use core::fmt;
use core::marker::PhantomData;

use crate::deque::CircularDeque;
use crate::error::{Error, Result};
use crate::ring::Iter;

/// One retained observation: the value competing for the extremum and the
/// stream position it arrived at. Ordering only ever compares `value`;
/// `index` exists for window eviction.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sample<T> {
    pub value: T,
    pub index: i64,
}

/// Which end of the ordering a monotone queue tracks.
///
/// `beats` must be strict. Equal values at different indices are all
/// retained: a non-strict comparison would purge a peer that becomes the
/// extremum once the nominal one expires out of the window.
pub trait Polarity {
    fn beats<T: PartialOrd>(incoming: &T, kept: &T) -> bool;
}

/// Marker for running-maximum queues.
#[derive(Debug, Clone, Copy)]
pub struct Max;

impl Polarity for Max {
    #[inline]
    fn beats<T: PartialOrd>(incoming: &T, kept: &T) -> bool {
        incoming > kept
    }
}

/// Marker for running-minimum queues.
#[derive(Debug, Clone, Copy)]
pub struct Min;

impl Polarity for Min {
    #[inline]
    fn beats<T: PartialOrd>(incoming: &T, kept: &T) -> bool {
        incoming < kept
    }
}

/// Monotonic deque over `(value, index)` samples answering the running
/// extremum of an externally driven window in O(1) amortized time.
///
/// The caller drives the window: before pushing the observation at stream
/// position `i`, call `evict_before(i - w)` to bound the window to width `w`.
/// `push` then pops every back entry the new value strictly dominates and
/// appends, which keeps the deque ordered front to back and the front entry
/// the current extremum.
///
/// Values must order totally. Feeding NaN breaks the retention invariant and
/// yields unspecified (never panicking) extrema.
#[derive(Clone)]
pub struct MonotoneQueue<T: Copy + Default, P> {
    entries: CircularDeque<Sample<T>>,
    _polarity: PhantomData<P>,
}

/// Running-maximum queue; the deque is non-increasing front to back.
pub type MaxQueue<T> = MonotoneQueue<T, Max>;

/// Running-minimum queue; the deque is non-decreasing front to back.
pub type MinQueue<T> = MonotoneQueue<T, Min>;

impl<T, P> MonotoneQueue<T, P>
where
    T: Copy + Default + PartialOrd,
    P: Polarity,
{
    /// `capacity` bounds the retained samples. The window width is always
    /// enough: a window evicted per protocol never retains more than `w`
    /// samples.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            entries: CircularDeque::new(capacity)?,
            _polarity: PhantomData,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when a push of `value` can complete: a slot is free, or popping
    /// the dominated back entry will free one.
    #[inline]
    fn has_room_for(&self, value: &T) -> bool {
        if !self.entries.is_full() {
            return true;
        }
        self.entries
            .last()
            .map_or(false, |kept| P::beats(value, &kept.value))
    }

    /// Pops every strictly dominated back entry, then appends
    /// `(value, index)`.
    ///
    /// `CapacityExceeded` means the caller broke the eviction protocol; the
    /// queue is left unchanged in that case. Stream positions must be fed in
    /// nondecreasing order.
    pub fn push(&mut self, value: T, index: i64) -> Result<()> {
        if !self.has_room_for(&value) {
            return Err(Error::CapacityExceeded {
                capacity: self.entries.capacity(),
            });
        }
        while let Ok(kept) = self.entries.last() {
            if !P::beats(&value, &kept.value) {
                break;
            }
            self.entries.pop_back()?;
        }
        self.entries.push_back(Sample { value, index })
    }

    /// Pops every front entry with `index <= threshold`. Returns how many
    /// samples expired.
    pub fn evict_before(&mut self, threshold: i64) -> usize {
        let mut expired = 0;
        while let Ok(front) = self.entries.first() {
            if front.index > threshold {
                break;
            }
            if self.entries.pop_front().is_ok() {
                expired += 1;
            }
        }
        expired
    }

    /// Current extremum value.
    #[inline]
    pub fn peek(&self) -> Result<T> {
        Ok(self.front()?.value)
    }

    /// Front sample: the extremum value plus the stream position it came
    /// from.
    #[inline]
    pub fn front(&self) -> Result<Sample<T>> {
        self.entries.first().map_err(|_| Error::EmptyQueue)
    }

    /// Iterates the retained samples, extremum first.
    pub fn iter(&self) -> Iter<'_, Sample<T>> {
        self.entries.iter()
    }

    /// Drops every retained sample.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T: Copy + Default, P> fmt::Debug for MonotoneQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonotoneQueue")
            .field("len", &self.entries.len())
            .field("capacity", &self.entries.capacity())
            .finish_non_exhaustive()
    }
}

/// Twin monotone queues answering both window extrema per observation, in
/// the high/low shape bar streams arrive in. Scalar streams pass the same
/// value for both sides.
///
/// `high` must not order below `low` for the same observation; the structure
/// does not check this.
#[derive(Debug, Clone)]
pub struct MinMaxQueue<T: Copy + Default> {
    maxs: MaxQueue<T>,
    mins: MinQueue<T>,
}

impl<T> MinMaxQueue<T>
where
    T: Copy + Default + PartialOrd,
{
    /// Both sides get `capacity` retained slots. Zero capacity is rejected.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            maxs: MaxQueue::new(capacity)?,
            mins: MinQueue::new(capacity)?,
        })
    }

    /// Feeds one observation: `high` competes for the maximum and `low` for
    /// the minimum, both tagged with `index`.
    ///
    /// Room is verified on both sides before either is touched, so a
    /// `CapacityExceeded` leaves the whole structure unchanged.
    pub fn update(&mut self, high: T, low: T, index: i64) -> Result<()> {
        if !self.maxs.has_room_for(&high) || !self.mins.has_room_for(&low) {
            return Err(Error::CapacityExceeded {
                capacity: self.maxs.capacity(),
            });
        }
        self.maxs.push(high, index)?;
        self.mins.push(low, index)
    }

    /// Pops expired samples from both sides. Returns the total number
    /// expired.
    pub fn evict_before(&mut self, threshold: i64) -> usize {
        self.maxs.evict_before(threshold) + self.mins.evict_before(threshold)
    }

    /// Window maximum.
    #[inline]
    pub fn max(&self) -> Result<T> {
        self.maxs.peek()
    }

    /// Window minimum.
    #[inline]
    pub fn min(&self) -> Result<T> {
        self.mins.peek()
    }

    /// The maximum-side queue, for inspecting retained samples.
    #[inline]
    pub fn maxs(&self) -> &MaxQueue<T> {
        &self.maxs
    }

    /// The minimum-side queue, for inspecting retained samples.
    #[inline]
    pub fn mins(&self) -> &MinQueue<T> {
        &self.mins
    }

    pub fn is_empty(&self) -> bool {
        self.maxs.is_empty() && self.mins.is_empty()
    }

    pub fn clear(&mut self) {
        self.maxs.clear();
        self.mins.clear();
    }
}
