//! Stable top-down merge sort that leaves its input untouched.
//!
//! ```text
//!   [5, 2, 4, 1]
//!        │ split at midpoint
//!   [5, 2]   [4, 1]
//!     │         │
//!   [2, 5]   [1, 4]      (recursive)
//!        │ merge: take the smaller front; on ties take from the left
//!   [1, 2, 4, 5]
//! ```
//!
//! Each merge allocates one output buffer the size of its two halves, so the
//! sort uses O(n) extra space per level and O(n log n) time.

use std::cmp::Ordering;

use crate::traits::Ordered;

/// Returns a sorted copy of `values` in ascending order.
///
/// ```
/// use algokit::algo::merge_sort;
///
/// let values = [3, 1, 2];
/// assert_eq!(merge_sort(&values), vec![1, 2, 3]);
/// assert_eq!(values, [3, 1, 2]);
/// ```
pub fn merge_sort<T: Ordered + Clone>(values: &[T]) -> Vec<T> {
    merge_sort_by(values, T::cmp)
}

/// Returns a copy of `values` sorted with `cmp`. Equal elements keep their
/// relative order.
///
/// ```
/// use algokit::algo::merge_sort_by;
///
/// let pairs = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
/// let sorted = merge_sort_by(&pairs, |a, b| a.0.cmp(&b.0));
/// assert_eq!(sorted, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// ```
pub fn merge_sort_by<T, F>(values: &[T], mut cmp: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    split_sort(values, &mut cmp)
}

fn split_sort<T, F>(values: &[T], cmp: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if values.len() < 2 {
        return values.to_vec();
    }
    let (left, right) = values.split_at(values.len() / 2);
    let left = split_sort(left, cmp);
    let right = split_sort(right, cmp);
    merge(left, right, cmp)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, cmp: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        // Ties go left to keep the sort stable.
        let next = if cmp(r, l) == Ordering::Less {
            right.next()
        } else {
            left.next()
        };
        out.extend(next);
    }
    out.extend(left);
    out.extend(right);
    out
}
