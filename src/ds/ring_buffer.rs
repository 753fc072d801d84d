//! Fixed-capacity ring buffer with a per-write overwrite policy.
//!
//! Values are read back oldest-first. Capacity is fixed at construction: the
//! slot array is allocated once and never grows, and no operation allocates
//! afterwards.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                      RingBuffer<T> (capacity = 4)                           │
//! │                                                                             │
//! │   slots: Box<[Option<T>]>     head: oldest unread slot                      │
//! │   len:   occupied slots       tail: (head + len) % capacity                 │
//! │                                                                             │
//! │   After write(AllowOverwrite, [1, 2, 3, 4, 5, 6]):                          │
//! │                                                                             │
//! │   Index:     0     1     2     3                                            │
//! │            ┌─────┬─────┬─────┬─────┐                                        │
//! │   slots:   │  3  │  4  │  5  │  6  │     returns Ok(2): 1 and 2 were lost   │
//! │            └─────┴─────┴─────┴─────┘                                        │
//! │              ▲                                                              │
//! │           head = 0, len = 4                                                 │
//! │                                                                             │
//! │   read() → 3 ; write(AllowOverwrite, [7, 8]) → Ok(1)  (4 is evicted)        │
//! │                                                                             │
//! │   Index:     0     1     2     3                                            │
//! │            ┌─────┬─────┬─────┬─────┐                                        │
//! │   slots:   │  7  │  8  │  5  │  6  │                                        │
//! │            └─────┴─────┴─────┴─────┘                                        │
//! │                          ▲                                                  │
//! │                       head = 2, len = 4                                     │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Write Modes
//!
//! | Mode               | Not enough free slots                                 |
//! |--------------------|-------------------------------------------------------|
//! | `AllowOverwrite`   | Oldest values are evicted; returns how many were lost |
//! | `PreventOverwrite` | Whole batch rejected with [`WriteRejected`]; no change|
//!
//! Under `AllowOverwrite` the lost count is `(len + n).saturating_sub(capacity)`
//! and includes values of the same batch that later values of that batch would
//! overwrite; those are counted but never stored.
//!
//! ## Operations
//!
//! | Operation   | Time  | Notes                                   |
//! |-------------|-------|-----------------------------------------|
//! | `write`     | O(n)  | n = values written; no allocation       |
//! | `write_one` | O(1)  |                                         |
//! | `read`      | O(1)  | `None` when empty                       |
//! | `peek`      | O(1)  | Does not remove                         |
//! | `len`       | O(1)  |                                         |
//! | `clear`     | O(n)  | Drops stored values                     |
//!
//! ## Example Usage
//!
//! ```
//! use algokit::ds::{RingBuffer, WriteMode};
//!
//! let mut ring = RingBuffer::with_capacity(3);
//! assert_eq!(ring.write(WriteMode::AllowOverwrite, [1, 2, 3, 4]), Ok(1));
//! assert_eq!(ring.peek(), Some(&2));
//!
//! // Full: a non-overwriting write is refused outright
//! assert!(ring.write(WriteMode::PreventOverwrite, [5]).is_err());
//!
//! assert_eq!(ring.read(), Some(2));
//! assert_eq!(ring.write(WriteMode::PreventOverwrite, [5]), Ok(0));
//! assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
//! ```
//!
//! ## Notes
//! - Capacity 0 is valid: every write under `AllowOverwrite` loses all its
//!   values, every non-empty write under `PreventOverwrite` is rejected.
//! - `check_invariants()` verifies cursor/slot consistency.

use tracing::{debug, trace};

use crate::error::{InvariantError, WriteRejected};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::RingBufferMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::RingBufferMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    MetricsReset, MetricsSnapshotProvider, RingBufferMetricsRecorder,
    SequenceMetricsReadRecorder, SequenceMetricsRecorder,
};
use crate::traits::Container;

/// How [`RingBuffer::write`] behaves when the batch does not fit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WriteMode {
    /// Evict the oldest values so every written value is stored (or, for
    /// batches longer than the capacity, the last `capacity` of them).
    #[default]
    AllowOverwrite,
    /// Only write if all values fit in the free slots; otherwise change nothing.
    PreventOverwrite,
}

/// Fixed-capacity circular FIFO buffer.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    slots: Box<[Option<T>]>,
    head: usize,
    len: usize,
    #[cfg(feature = "metrics")]
    metrics: RingBufferMetrics,
}

impl<T> RingBuffer<T> {
    /// Creates an empty buffer holding at most `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_slots((0..capacity).map(|_| None).collect(), 0)
    }

    /// Creates a full buffer from `values`; its capacity is the number of values
    /// and the first value is the first read.
    ///
    /// ```
    /// use algokit::ds::RingBuffer;
    ///
    /// let mut ring = RingBuffer::from_values(["a", "b"]);
    /// assert!(ring.is_full());
    /// assert_eq!(ring.read(), Some("a"));
    /// ```
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        let slots: Box<[Option<T>]> = values.into_iter().map(Some).collect();
        let len = slots.len();
        Self::from_slots(slots, len)
    }

    fn from_slots(slots: Box<[Option<T>]>, len: usize) -> Self {
        Self {
            slots,
            head: 0,
            len,
            #[cfg(feature = "metrics")]
            metrics: RingBufferMetrics::default(),
        }
    }

    /// Returns the fixed number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of unread values.
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
        self.len == self.capacity()
    }

    /// Returns the number of values that can be written without overwriting.
    #[inline]
    pub fn free(&self) -> usize {
        self.capacity() - self.len
    }

    /// Writes `values` according to `mode`.
    ///
    /// Returns the number of values lost to overwriting (always `0` under
    /// [`WriteMode::PreventOverwrite`]).
    ///
    /// # Errors
    ///
    /// Returns [`WriteRejected`] under [`WriteMode::PreventOverwrite`] when the
    /// batch is larger than [`free`](Self::free); the buffer is left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use algokit::ds::{RingBuffer, WriteMode};
    ///
    /// let mut ring = RingBuffer::with_capacity(2);
    /// assert_eq!(ring.write(WriteMode::AllowOverwrite, vec![1, 2, 3, 4, 5]), Ok(3));
    /// assert_eq!(ring.read(), Some(4));
    /// assert_eq!(ring.read(), Some(5));
    /// ```
    pub fn write<I>(&mut self, mode: WriteMode, values: I) -> Result<usize, WriteRejected>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = values.into_iter();
        let n = iter.len();
        let cap = self.capacity();
        #[cfg(feature = "metrics")]
        self.metrics.record_write_call();

        let lost = (self.len + n).saturating_sub(cap);
        if lost > 0 && mode == WriteMode::PreventOverwrite {
            debug!(
                requested = n,
                available = self.free(),
                "ring buffer write rejected"
            );
            #[cfg(feature = "metrics")]
            self.metrics.record_write_rejected();
            return Err(WriteRejected {
                requested: n,
                available: self.free(),
            });
        }

        let evicted = lost.min(self.len);
        for _ in 0..evicted {
            self.pop_front();
        }

        // Leading values of an oversized batch would be overwritten by its tail.
        let skipped = n.saturating_sub(cap);
        let room = self.free();
        let mut stored = 0;
        for value in iter.skip(skipped).take(room) {
            self.push_back(value);
            stored += 1;
        }

        if lost > 0 {
            debug!(
                evicted,
                skipped,
                capacity = cap,
                "ring buffer overwrote values"
            );
        }
        trace!(stored, len = self.len, "ring buffer write");
        #[cfg(feature = "metrics")]
        {
            self.metrics.record_push(stored);
            self.metrics.record_overwritten(lost);
        }
        Ok(lost)
    }

    /// Writes a single value; see [`write`](Self::write).
    pub fn write_one(&mut self, mode: WriteMode, value: T) -> Result<usize, WriteRejected> {
        self.write(mode, std::iter::once(value))
    }

    /// Removes and returns the oldest value, or `None` if the buffer is empty.
    pub fn read(&mut self) -> Option<T> {
        let value = self.pop_front();
        #[cfg(feature = "metrics")]
        {
            if value.is_some() {
                self.metrics.record_pop_hit();
            } else {
                self.metrics.record_pop_empty();
            }
        }
        value
    }

    /// Like [`read`](Self::read) but returns `T::default()` when empty.
    pub fn read_or_default(&mut self) -> T
    where
        T: Default,
    {
        self.read().unwrap_or_default()
    }

    /// Returns the oldest value without removing it.
    pub fn peek(&self) -> Option<&T> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_call();
        if self.len == 0 {
            return None;
        }
        let oldest = self.slots[self.head].as_ref();
        #[cfg(feature = "metrics")]
        {
            if oldest.is_some() {
                (&self.metrics).record_peek_found();
            }
        }
        oldest
    }

    /// Iterates over unread values, oldest first.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { ring: self, pos: 0 }
    }

    /// Drops all unread values. Capacity is unchanged.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.len = 0;
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
    }

    /// Verifies cursor and slot occupancy invariants.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError`] describing the first violated invariant.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let cap = self.capacity();
        if self.len > cap {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.len, cap
            )));
        }
        if cap == 0 {
            if self.head != 0 {
                return Err(InvariantError::new("head must be 0 for zero capacity"));
            }
            return Ok(());
        }
        if self.head >= cap {
            return Err(InvariantError::new(format!(
                "head {} out of bounds for capacity {}",
                self.head, cap
            )));
        }
        for offset in 0..cap {
            let idx = (self.head + offset) % cap;
            let occupied = self.slots[idx].is_some();
            if occupied != (offset < self.len) {
                return Err(InvariantError::new(format!(
                    "slot {} occupancy {} disagrees with head {} and len {}",
                    idx, occupied, self.head, self.len
                )));
            }
        }
        Ok(())
    }

    #[inline]
    fn slot_index(&self, offset: usize) -> usize {
        (self.head + offset) % self.capacity()
    }

    fn push_back(&mut self, value: T) {
        debug_assert!(self.len < self.capacity());
        let idx = self.slot_index(self.len);
        self.slots[idx] = Some(value);
        self.len += 1;
    }

    fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.slots[self.head].take();
        self.head = self.slot_index(1);
        self.len -= 1;
        value
    }
}

impl<T> Container for RingBuffer<T> {
    fn len(&self) -> usize {
        RingBuffer::len(self)
    }

    fn clear(&mut self) {
        RingBuffer::clear(self);
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsSnapshotProvider<RingBufferMetricsSnapshot> for RingBuffer<T> {
    fn snapshot(&self) -> RingBufferMetricsSnapshot {
        self.metrics.snapshot(self.len, self.capacity())
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsReset for RingBuffer<T> {
    fn reset_metrics(&mut self) {
        self.metrics = RingBufferMetrics::default();
    }
}

// ---------------------------------------------------------------------------
// Iterator
// ---------------------------------------------------------------------------

/// Borrowed iterator over a [`RingBuffer`], oldest value first.
///
/// Created by [`RingBuffer::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    ring: &'a RingBuffer<T>,
    pos: usize, // offset from head
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.ring.len {
            return None;
        }
        let idx = self.ring.slot_index(self.pos);
        self.pos += 1;
        self.ring.slots[idx].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.ring.len - self.pos.min(self.ring.len);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
