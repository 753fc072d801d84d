//! FIFO (First In, First Out) queue.
//!
//! Values leave the queue in the order they were enqueued.
//!
//! ## Architecture
//!
//! ```text
//!   enqueue(1, 2, 3)         dequeue() → 1
//!
//!   items: VecDeque<T>
//!   ┌─────┬─────┬─────┐      ┌─────┬─────┐
//!   │  1  │  2  │  3  │  ──► │  2  │  3  │
//!   └─────┴─────┴─────┘      └─────┴─────┘
//!     ▲ front       ▲ back     ▲ front
//! ```
//!
//! The backing `VecDeque` reuses the slots freed by `dequeue`, so a long-lived
//! queue never pins a backing array larger than its peak occupancy.
//!
//! ## Operations
//!
//! | Operation  | Time        | Notes                              |
//! |------------|-------------|------------------------------------|
//! | `enqueue`  | O(k) amort. | k = number of values               |
//! | `push`     | O(1) amort. |                                    |
//! | `dequeue`  | O(1)        | `None` when empty                  |
//! | `peek`     | O(1)        | Does not remove                    |
//! | `len`      | O(1)        |                                    |
//!
//! ## Example Usage
//!
//! ```
//! use algokit::ds::Queue;
//!
//! let mut queue = Queue::from_values([1, 2]);
//! queue.enqueue([3, 4]);
//!
//! assert_eq!(queue.peek(), Some(&1));
//! assert_eq!(queue.dequeue(), Some(1));
//! assert_eq!(queue.len(), 3);
//!
//! let rest: Vec<_> = std::iter::from_fn(|| queue.dequeue()).collect();
//! assert_eq!(rest, vec![2, 3, 4]);
//! assert_eq!(queue.dequeue(), None);
//! ```
//!
//! ## Thread Safety
//!
//! `Queue` is a plain single-owner value; wrap it in external synchronization
//! to share it across threads.

use std::collections::VecDeque;

#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::SequenceMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::SequenceMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    MetricsReset, MetricsSnapshotProvider, SequenceMetricsReadRecorder, SequenceMetricsRecorder,
};
use crate::traits::Container;

/// First-in-first-out queue.
///
/// A `Queue::default()` is empty and ready to use.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
    #[cfg(feature = "metrics")]
    metrics: SequenceMetrics,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty queue with room for at least `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            #[cfg(feature = "metrics")]
            metrics: SequenceMetrics::default(),
        }
    }

    /// Creates a queue holding `values`; the first value is the first dequeued.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        let iter = values.into_iter();
        let mut queue = Self::with_capacity(iter.size_hint().0);
        queue.enqueue(iter);
        queue
    }

    /// Returns the number of queued values.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends `values` in order, so the first supplied is the first dequeued.
    pub fn enqueue<I: IntoIterator<Item = T>>(&mut self, values: I) {
        #[cfg(feature = "metrics")]
        let before = self.items.len();
        self.items.extend(values);
        #[cfg(feature = "metrics")]
        self.metrics.record_push(self.items.len() - before);
    }

    /// Appends a single value at the back.
    pub fn push(&mut self, value: T) {
        self.items.push_back(value);
        #[cfg(feature = "metrics")]
        self.metrics.record_push(1);
    }

    /// Removes and returns the front value, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        let value = self.items.pop_front();
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

    /// Like [`dequeue`](Self::dequeue) but returns `T::default()` when empty.
    ///
    /// ```
    /// use algokit::ds::Queue;
    ///
    /// let mut queue: Queue<i32> = Queue::new();
    /// assert_eq!(queue.dequeue_or_default(), 0);
    /// ```
    pub fn dequeue_or_default(&mut self) -> T
    where
        T: Default,
    {
        self.dequeue().unwrap_or_default()
    }

    /// Returns the front value without removing it.
    pub fn peek(&self) -> Option<&T> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_call();
        let front = self.items.front();
        #[cfg(feature = "metrics")]
        {
            if front.is_some() {
                (&self.metrics).record_peek_found();
            }
        }
        front
    }

    /// Iterates from front (next to dequeue) to back.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.items.iter()
    }

    /// Removes all values, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
    }
}

impl<T> Container for Queue<T> {
    fn len(&self) -> usize {
        Queue::len(self)
    }

    fn clear(&mut self) {
        Queue::clear(self);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.enqueue(iter);
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Consumes the queue, yielding values in dequeue order.
impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = std::collections::vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsSnapshotProvider<SequenceMetricsSnapshot> for Queue<T> {
    fn snapshot(&self) -> SequenceMetricsSnapshot {
        self.metrics.snapshot(self.items.len(), self.items.capacity())
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsReset for Queue<T> {
    fn reset_metrics(&mut self) {
        self.metrics = SequenceMetrics::default();
    }
}
