//! LIFO (Last In, First Out) stack.
//!
//! A `Vec`-backed stack: pushes append to the top, pops remove from the top.
//!
//! ```text
//!   push(A, B, C)            pop() → C
//!
//!   ┌─────────────────┐      ┌────────────┐
//!   │ [A] [B] [C]     │ ──►  │ [A] [B]    │
//!   │  ↑        ↑     │      │  ↑    ↑    │
//!   │ bottom   top    │      │ bottom top │
//!   └─────────────────┘      └────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```
//! use algokit::ds::Stack;
//!
//! let mut stack = Stack::from_values([1, 2]);
//! stack.push([3]);
//! assert_eq!(stack.peek(), Some(&3));
//! assert_eq!(stack.pop(), Some(3));
//! assert_eq!(stack.pop(), Some(2));
//! assert_eq!(stack.pop(), Some(1));
//! assert_eq!(stack.pop(), None);
//! ```

#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::SequenceMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::SequenceMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    MetricsReset, MetricsSnapshotProvider, SequenceMetricsReadRecorder, SequenceMetricsRecorder,
};
use crate::traits::Container;

/// Last-in-first-out stack. `Stack::default()` is empty and ready to use.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    /// Top of the stack is the last element.
    items: Vec<T>,
    #[cfg(feature = "metrics")]
    metrics: SequenceMetrics,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            #[cfg(feature = "metrics")]
            metrics: SequenceMetrics::default(),
        }
    }

    /// Creates a stack holding `values`; the last value is the first popped.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        let iter = values.into_iter();
        let mut stack = Self::with_capacity(iter.size_hint().0);
        stack.push(iter);
        stack
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes `values` in order, so the last supplied is the first popped.
    pub fn push<I: IntoIterator<Item = T>>(&mut self, values: I) {
        #[cfg(feature = "metrics")]
        let before = self.items.len();
        self.items.extend(values);
        #[cfg(feature = "metrics")]
        self.metrics.record_push(self.items.len() - before);
    }

    pub fn push_one(&mut self, value: T) {
        self.items.push(value);
        #[cfg(feature = "metrics")]
        self.metrics.record_push(1);
    }

    /// Removes and returns the top value, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        let value = self.items.pop();
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

    /// Like [`pop`](Self::pop) but returns `T::default()` when empty.
    pub fn pop_or_default(&mut self) -> T
    where
        T: Default,
    {
        self.pop().unwrap_or_default()
    }

    /// Returns the top value without removing it.
    pub fn peek(&self) -> Option<&T> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_call();
        let top = self.items.last();
        #[cfg(feature = "metrics")]
        {
            if top.is_some() {
                (&self.metrics).record_peek_found();
            }
        }
        top
    }

    /// Iterates from bottom (oldest) to top (next to pop).
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
    }
}

impl<T> Container for Stack<T> {
    fn len(&self) -> usize {
        Stack::len(self)
    }

    fn clear(&mut self) {
        Stack::clear(self);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push(iter);
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsSnapshotProvider<SequenceMetricsSnapshot> for Stack<T> {
    fn snapshot(&self) -> SequenceMetricsSnapshot {
        self.metrics.snapshot(self.items.len(), self.items.capacity())
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsReset for Stack<T> {
    fn reset_metrics(&mut self) {
        self.metrics = SequenceMetrics::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_default_is_empty() {
        let mut stack: Stack<u32> = Stack::default();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.peek(), None);
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn stack_pops_in_reverse_order() {
        let mut stack = Stack::new();
        stack.push([1, 2, 3]);
        stack.push_one(4);
        assert_eq!(stack.pop(), Some(4));
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn stack_peek_sees_top_without_removing() {
        let stack = Stack::from_values(["x", "y"]);
        assert_eq!(stack.peek(), Some(&"y"));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn stack_pop_or_default() {
        let mut stack = Stack::from_values([9]);
        assert_eq!(stack.pop_or_default(), 9);
        assert_eq!(stack.pop_or_default(), 0);
    }

    #[test]
    fn stack_iter_is_bottom_to_top() {
        let stack: Stack<_> = (1..=3).collect();
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn stack_clear_keeps_usable() {
        let mut stack = Stack::with_capacity(4);
        stack.push([1, 2]);
        stack.clear();
        assert!(stack.is_empty());
        stack.extend([5]);
        assert_eq!(stack.pop(), Some(5));
    }

    #[cfg(feature = "metrics")]
    #[test]
    fn stack_metrics_track_pushes() {
        let mut stack = Stack::new();
        stack.push([1, 2, 3]);
        stack.push_one(4);
        stack.pop();

        let snap = stack.snapshot();
        assert_eq!(snap.push_calls, 2);
        assert_eq!(snap.pushed_values, 4);
        assert_eq!(snap.pop_hits, 1);
        assert_eq!(snap.len, 3);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: pop until empty yields reverse insertion order
            #[cfg_attr(miri, ignore)]
            #[test]
            fn prop_pop_reverses_insertion_order(
                values in prop::collection::vec(any::<i32>(), 0..100)
            ) {
                let mut stack = Stack::from_values(values.iter().copied());

                let mut out = Vec::with_capacity(values.len());
                while let Some(v) = stack.pop() {
                    out.push(v);
                }
                let expected: Vec<i32> = values.into_iter().rev().collect();
                prop_assert_eq!(out, expected);
            }
        }
    }
}
