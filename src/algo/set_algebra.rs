//! Multi-set algebra: union, intersection, difference and symmetric difference
//! over any number of [`Set`]s.
//!
//! Every operation comes in two flavors:
//!
//! - a pure variant (`union`, `intersect`, ...) returning a fresh set, empty
//!   when given no inputs;
//! - an `_into` variant merging the result into a caller-supplied destination
//!   **without clearing it**. Pre-existing destination contents are never
//!   removed and never take part in the computation.
//!
//! ## Strategy
//!
//! ```text
//!   intersect_into(dst, [A, B, C, D])      inputs sorted by len: A ≤ B ≤ C ≤ D
//!
//!   1 input   ──► copy A into dst
//!   2 inputs  ──► for x in A: if x ∈ B { dst ← x }              (no scratch)
//!   ≥3 inputs ──► scratch = { x ∈ A | x ∈ B }
//!                 for S in middle: scratch.retain(x ∈ S)
//!                 last:  dst ← { x ∈ scratch | x ∈ D }
//!
//!   scratch is dst itself when dst starts empty, else a separate set.
//!
//!   diff_into(dst, [Base, R1, R2, ...])    Base keeps position; R* sorted desc
//!     same 1 / 2 / ≥3 shape with membership inverted
//!
//!   symmetric_diff_into(dst, inputs)
//!     ledger: x ──► Keep (seen once) | Drop (seen twice or more)
//!     dst ← every Keep
//! ```
//!
//! ## Example Usage
//!
//! ```
//! use algokit::algo::set_algebra::{diff, intersect, symmetric_diff, union};
//! use algokit::ds::Set;
//!
//! let a: Set<i32> = Set::from([1, 3, 4, 6]);
//! let b: Set<i32> = Set::from([3, 4]);
//! let c: Set<i32> = Set::from([3, 4, 5]);
//! let d: Set<i32> = Set::from([2, 3, 6]);
//! let inputs = [&a, &b, &c, &d];
//!
//! assert_eq!(intersect(&inputs), Set::from([3]));
//! assert_eq!(diff(&inputs), Set::from([1]));
//! assert_eq!(symmetric_diff(&inputs), Set::from([1, 2, 5]));
//! assert_eq!(union(&inputs), Set::from([1, 2, 3, 4, 5, 6]));
//! ```

use std::cmp::Reverse;
use std::hash::BuildHasher;

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::ds::Set;
use crate::traits::Comparable;

/// Returns the union of all `sets`.
///
/// The result is pre-sized with the sum of the input cardinalities.
pub fn union<T, S>(sets: &[&Set<T, S>]) -> Set<T, S>
where
    T: Comparable + Clone,
    S: BuildHasher + Clone + Default,
{
    let mut dst = Set::with_hasher(S::default());
    union_into(&mut dst, sets);
    dst
}

/// Adds every element of every input to `dst`, reserving room for the sum
/// of the input cardinalities first.
pub fn union_into<T, S>(dst: &mut Set<T, S>, sets: &[&Set<T, S>])
where
    T: Comparable + Clone,
    S: BuildHasher + Clone,
{
    trace!(inputs = sets.len(), "union");
    dst.reserve(sets.iter().map(|set| set.len()).sum());
    for set in sets {
        dst.add(set.iter().cloned());
    }
}

/// Returns the elements present in every input.
pub fn intersect<T, S>(sets: &[&Set<T, S>]) -> Set<T, S>
where
    T: Comparable + Clone,
    S: BuildHasher + Clone + Default,
{
    let capacity = sets.iter().map(|set| set.len()).min().unwrap_or(0);
    let mut dst = Set::with_capacity_and_hasher(capacity, S::default());
    intersect_into(&mut dst, sets);
    dst
}

/// Adds to `dst` the elements present in every input.
///
/// With no inputs `dst` is untouched; with one input its elements are all
/// added.
///
/// ```
/// use algokit::algo::set_algebra::intersect_into;
/// use algokit::ds::Set;
///
/// let mut dst: Set<i32> = Set::from([4, 55]);
/// let a: Set<i32> = Set::from([1, 2, 3, 4]);
/// let b: Set<i32> = Set::from([1, 2]);
/// let c: Set<i32> = Set::from([1]);
///
/// intersect_into(&mut dst, &[&a, &b, &c]);
/// assert_eq!(dst, Set::from([1, 4, 55]));
/// ```
pub fn intersect_into<T, S>(dst: &mut Set<T, S>, sets: &[&Set<T, S>])
where
    T: Comparable + Clone,
    S: BuildHasher + Clone,
{
    // The smallest input bounds the result.
    let mut ordered = sets.to_vec();
    ordered.sort_by_key(|set| set.len());

    match ordered.as_slice() {
        [] => trace!("intersect: no inputs"),
        [only] => {
            trace!(inputs = 1, "intersect: copy");
            dst.add(only.iter().cloned());
        }
        [small, large] => {
            trace!(inputs = 2, "intersect: direct");
            dst.add(small.iter().filter(|v| large.contains(v)).cloned());
        }
        [first, second, middle @ .., last] => {
            let in_place = dst.is_empty();
            trace!(inputs = ordered.len(), in_place, "intersect: scratch");
            if in_place {
                dst.add(first.iter().filter(|v| second.contains(v)).cloned());
                for set in middle {
                    dst.retain(|v| set.contains(v));
                }
                dst.retain(|v| last.contains(v));
            } else {
                let mut scratch =
                    Set::with_capacity_and_hasher(first.len(), dst.hasher().clone());
                scratch.add(first.iter().filter(|v| second.contains(v)).cloned());
                for set in middle {
                    scratch.retain(|v| set.contains(v));
                }
                dst.add(scratch.drain().filter(|v| last.contains(v)));
            }
        }
    }
}

/// Returns the elements of the first input absent from every other input.
pub fn diff<T, S>(sets: &[&Set<T, S>]) -> Set<T, S>
where
    T: Comparable + Clone,
    S: BuildHasher + Clone + Default,
{
    let capacity = sets.first().map_or(0, |base| base.len());
    let mut dst = Set::with_capacity_and_hasher(capacity, S::default());
    diff_into(&mut dst, sets);
    dst
}

/// Adds to `dst` the elements of `sets[0]` that no other input holds.
///
/// With no inputs `dst` is untouched; with one input its elements are all
/// added.
pub fn diff_into<T, S>(dst: &mut Set<T, S>, sets: &[&Set<T, S>])
where
    T: Comparable + Clone,
    S: BuildHasher + Clone,
{
    let Some((base, rest)) = sets.split_first() else {
        trace!("diff: no inputs");
        return;
    };

    // Largest subtrahends first so the candidates shrink fastest.
    let mut ordered = rest.to_vec();
    ordered.sort_by_key(|set| Reverse(set.len()));

    match ordered.as_slice() {
        [] => {
            trace!(inputs = 1, "diff: copy");
            dst.add(base.iter().cloned());
        }
        [other] => {
            trace!(inputs = 2, "diff: direct");
            dst.add(base.iter().filter(|v| !other.contains(v)).cloned());
        }
        [first, middle @ .., last] => {
            let in_place = dst.is_empty();
            trace!(inputs = sets.len(), in_place, "diff: scratch");
            if in_place {
                dst.add(base.iter().filter(|v| !first.contains(v)).cloned());
                for set in middle {
                    dst.retain(|v| !set.contains(v));
                }
                dst.retain(|v| !last.contains(v));
            } else {
                let mut scratch =
                    Set::with_capacity_and_hasher(base.len(), dst.hasher().clone());
                scratch.add(base.iter().filter(|v| !first.contains(v)).cloned());
                for set in middle {
                    scratch.retain(|v| !set.contains(v));
                }
                dst.add(scratch.drain().filter(|v| !last.contains(v)));
            }
        }
    }
}

/// Returns the elements present in exactly one input.
pub fn symmetric_diff<T, S>(sets: &[&Set<T, S>]) -> Set<T, S>
where
    T: Comparable + Clone,
    S: BuildHasher + Clone + Default,
{
    let mut dst = Set::with_hasher(S::default());
    symmetric_diff_into(&mut dst, sets);
    dst
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Keep,
    Drop,
}

/// Adds to `dst` the elements present in exactly one input.
///
/// An element held by two or more inputs is excluded whatever the count, so
/// this is not the pairwise XOR fold. Zero or one input behaves like
/// [`union_into`].
///
/// ```
/// use algokit::algo::set_algebra::symmetric_diff_into;
/// use algokit::ds::Set;
///
/// let mut dst: Set<i32> = Set::new();
/// let a: Set<i32> = Set::from([1, 2, 3]);
/// let b: Set<i32> = Set::from([1, 2]);
/// let c: Set<i32> = Set::from([4]);
///
/// symmetric_diff_into(&mut dst, &[&a, &b, &c]);
/// assert_eq!(dst, Set::from([3, 4]));
/// ```
pub fn symmetric_diff_into<T, S>(dst: &mut Set<T, S>, sets: &[&Set<T, S>])
where
    T: Comparable + Clone,
    S: BuildHasher + Clone,
{
    if sets.len() < 2 {
        union_into(dst, sets);
        return;
    }

    let capacity = sets.iter().map(|set| set.len()).max().unwrap_or(0);
    let mut ledger: FxHashMap<&T, Mark> =
        FxHashMap::with_capacity_and_hasher(capacity, Default::default());
    for set in sets {
        for value in set.iter() {
            ledger
                .entry(value)
                .and_modify(|mark| *mark = Mark::Drop)
                .or_insert(Mark::Keep);
        }
    }
    trace!(
        inputs = sets.len(),
        distinct = ledger.len(),
        "symmetric_diff"
    );

    dst.add(
        ledger
            .into_iter()
            .filter(|(_, mark)| *mark == Mark::Keep)
            .map(|(value, _)| value.clone()),
    );
}
