//! Iterative binary search over sorted slices.
//!
//! ```text
//!   values: [ 1, 3, 5, 7, 9, 11 ]      target = 9
//!
//!   [start, end) = [0, 6)  mid = 3  values[3] = 7  < 9  ──► start = 4
//!   [start, end) = [4, 6)  mid = 5  values[5] = 11 > 9  ──► end = 5
//!   [start, end) = [4, 5)  mid = 4  values[4] = 9  == 9 ──► Some(4)
//! ```
//!
//! The midpoint is `start + (end - start) / 2`, which cannot overflow. With
//! duplicates, the index of any equal element may be returned. An unsorted
//! slice yields an unspecified (but memory-safe) answer.

use std::cmp::Ordering;

use crate::traits::Ordered;

/// Returns the index of `target` in the ascending slice `values`, or `None`.
///
/// ```
/// use algokit::algo::binary_search;
///
/// let values = [1, 3, 5, 7];
/// assert_eq!(binary_search(&values, &5), Some(2));
/// assert_eq!(binary_search(&values, &4), None);
/// assert_eq!(binary_search::<i32>(&[], &4), None);
/// ```
pub fn binary_search<T: Ordered>(values: &[T], target: &T) -> Option<usize> {
    binary_search_by(values, |probe| probe.cmp(target))
}

/// Binary search driven by `cmp`, which returns the ordering of the probed
/// element relative to the target.
///
/// `values` must be sorted consistently with `cmp`.
///
/// ```
/// use algokit::algo::binary_search_by;
///
/// // Descending order: invert the comparison.
/// let values = [9, 7, 5, 3];
/// assert_eq!(binary_search_by(&values, |probe| 3.cmp(probe)), Some(3));
///
/// // Search by key.
/// let people = [("ada", 36), ("bob", 41), ("cy", 57)];
/// assert_eq!(binary_search_by(&people, |p| p.1.cmp(&41)), Some(1));
/// ```
pub fn binary_search_by<T, F>(values: &[T], mut cmp: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let mut start = 0;
    let mut end = values.len();
    while start < end {
        let mid = start + (end - start) / 2;
        match cmp(&values[mid]) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => start = mid + 1,
            Ordering::Greater => end = mid,
        }
    }
    None
}
