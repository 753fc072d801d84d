//! Hash-backed unordered set with subset/superset predicates.
//!
//! `Set` wraps a `HashSet` keyed by [`FxBuildHasher`] by default. The hasher is
//! a type parameter so callers that need DoS-resistant hashing can plug in
//! `std::collections::hash_map::RandomState`.
//!
//! ## Architecture
//!
//! ```text
//!   Set<T, S = FxBuildHasher>
//!   ┌───────────────────────────────────────────┐
//!   │ items: HashSet<T, S>                      │
//!   │                                           │
//!   │   add / insert      ──► O(1) expected     │
//!   │   delete / remove   ──► O(1) expected     │
//!   │   contains          ──► O(1) expected     │
//!   │                                           │
//!   │   is_subset(other, strict)                │
//!   │     1. cardinality check (short-circuit)  │
//!   │     2. every element of self ∈ other      │
//!   │                                           │
//!   │   is_disjoint(other)                      │
//!   │     scans the smaller of the two sets     │
//!   └───────────────────────────────────────────┘
//! ```
//!
//! Iteration order is unspecified and may differ between two equal sets.
//! Multi-set algebra (union, intersection, ...) lives in
//! [`algo::set_algebra`](crate::algo::set_algebra).
//!
//! ## Example Usage
//!
//! ```
//! use algokit::ds::Set;
//!
//! let mut small: Set<i32> = Set::from_values([1, 2]);
//! let big: Set<i32> = Set::from_values([1, 2, 3]);
//!
//! assert!(small.is_subset(&big, true));
//! assert!(big.is_superset(&small, false));
//!
//! small.add([3]);
//! assert!(small.is_equal(&big));
//! assert!(!small.is_subset(&big, true));
//! ```

use std::collections::HashSet;
use std::collections::hash_set;
use std::fmt;
use std::hash::BuildHasher;

use rustc_hash::FxBuildHasher;

use crate::traits::{Comparable, Container};

/// Unordered collection of distinct values.
#[derive(Clone)]
pub struct Set<T, S = FxBuildHasher> {
    items: HashSet<T, S>,
}

impl<T: Comparable> Set<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::with_hasher(FxBuildHasher)
    }

    /// Creates an empty set with room for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, FxBuildHasher)
    }
}

impl<T: Comparable, S: BuildHasher> Set<T, S> {
    /// Creates an empty set that hashes with `hasher`.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            items: HashSet::with_hasher(hasher),
        }
    }

    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            items: HashSet::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Creates a set holding the distinct `values`.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self
    where
        S: Default,
    {
        let mut set = Self::with_hasher(S::default());
        set.add(values);
        set
    }

    /// Returns a reference to the set's hasher builder.
    pub fn hasher(&self) -> &S {
        self.items.hasher()
    }

    /// Returns the number of distinct elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
    }

    /// Inserts every value; duplicates are ignored.
    pub fn add<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.items.extend(values);
    }

    /// Inserts `value`, returning `true` if it was not already present.
    pub fn insert(&mut self, value: T) -> bool {
        self.items.insert(value)
    }

    /// Removes every listed value; absent values are ignored.
    pub fn delete<'a, I>(&mut self, values: I)
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        for value in values {
            self.items.remove(value);
        }
    }

    /// Removes `value`, returning `true` if it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        self.items.remove(value)
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Returns a snapshot of the elements in unspecified order.
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().cloned().collect()
    }

    /// Iterates over the elements in unspecified order.
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.items.iter()
    }

    /// Removes all elements, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns `true` if the two sets share no element.
    ///
    /// Scans the smaller set and probes the larger one.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().all(|value| !large.contains(value))
    }

    /// Returns `true` if every element of `self` is in `other`.
    ///
    /// With `strict`, `other` must also hold at least one element `self`
    /// lacks.
    ///
    /// ```
    /// use algokit::ds::Set;
    ///
    /// let a: Set<u8> = Set::from_values([1, 2]);
    /// assert!(a.is_subset(&a, false));
    /// assert!(!a.is_subset(&a, true));
    /// ```
    pub fn is_subset(&self, other: &Self, strict: bool) -> bool {
        let fits = if strict {
            self.len() < other.len()
        } else {
            self.len() <= other.len()
        };
        fits && self.iter().all(|value| other.contains(value))
    }

    /// Returns `true` if `other` is a subset of `self` (strictly, if `strict`).
    pub fn is_superset(&self, other: &Self, strict: bool) -> bool {
        other.is_subset(self, strict)
    }

    /// Returns `true` if both sets hold exactly the same elements.
    pub fn is_equal(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other, false)
    }

    /// Keeps only the elements for which `keep` returns `true`.
    pub(crate) fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) {
        self.items.retain(keep);
    }

    /// Moves every element of `self` out, leaving it empty but allocated.
    pub(crate) fn drain(&mut self) -> hash_set::Drain<'_, T> {
        self.items.drain()
    }
}

impl<T: Comparable, S: BuildHasher + Default> Default for Set<T, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T: fmt::Debug, S> fmt::Debug for Set<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

impl<T: Comparable, S: BuildHasher> PartialEq for Set<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl<T: Comparable, S: BuildHasher> Eq for Set<T, S> {}

impl<T: Comparable, S: BuildHasher> Container for Set<T, S> {
    fn len(&self) -> usize {
        Set::len(self)
    }

    fn clear(&mut self) {
        Set::clear(self);
    }
}

impl<T: Comparable, S: BuildHasher + Default> FromIterator<T> for Set<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T: Comparable, S: BuildHasher + Default, const N: usize> From<[T; N]> for Set<T, S> {
    fn from(values: [T; N]) -> Self {
        let mut set = Self::with_capacity_and_hasher(N, S::default());
        set.add(values);
        set
    }
}

impl<T: Comparable, S: BuildHasher> Extend<T> for Set<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl<'a, T, S> IntoIterator for &'a Set<T, S> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T, S> IntoIterator for Set<T, S> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::RandomState;

    fn sorted(set: &Set<i32>) -> Vec<i32> {
        let mut values = set.values();
        values.sort_unstable();
        values
    }

    #[test]
    fn set_new_is_empty() {
        let set: Set<i32> = Set::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.values().is_empty());
    }

    #[test]
    fn set_default_behaves_like_new() {
        let set: Set<i32> = Set::default();
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
        assert!(set.values().is_empty());
        assert!(!set.contains(&1));
        assert!(set.is_subset(&Set::new(), false));
        assert!(!set.is_subset(&Set::new(), true));
        assert!(set.is_equal(&Set::new()));
        assert!(set.is_disjoint(&Set::from([1, 2])));
        assert_eq!(set, Set::new());
    }

    #[test]
    fn set_reserve_keeps_contents() {
        let mut set: Set<i32> = Set::from([1, 2, 3]);
        set.reserve(64);
        assert_eq!(sorted(&set), vec![1, 2, 3]);
        set.add(4..70);
        assert_eq!(set.len(), 69);
    }

    #[test]
    fn set_add_ignores_duplicates() {
        let mut set = Set::new();
        set.add([1, 2, 2, 3, 1]);
        assert_eq!(set.len(), 3);
        assert_eq!(sorted(&set), vec![1, 2, 3]);
        assert!(!set.insert(2));
        assert!(set.insert(4));
    }

    #[test]
    fn set_delete_ignores_missing() {
        let mut set: Set<i32> = Set::from_values([1, 2, 3]);
        set.delete(&[2, 9]);
        assert_eq!(sorted(&set), vec![1, 3]);
        assert!(set.remove(&1));
        assert!(!set.remove(&1));
        assert!(set.contains(&3));
        assert!(!set.contains(&2));
    }

    #[test]
    fn set_clear_keeps_usable() {
        let mut set: Set<i32> = (0..50).collect();
        set.clear();
        assert!(set.is_empty());
        set.insert(7);
        assert_eq!(sorted(&set), vec![7]);
    }

    #[test]
    fn set_disjoint() {
        let a: Set<i32> = Set::from([1, 2, 3]);
        let b: Set<i32> = Set::from([4, 5]);
        let c: Set<i32> = Set::from([3, 9, 10, 11]);
        assert!(a.is_disjoint(&b));
        assert!(b.is_disjoint(&a));
        assert!(!a.is_disjoint(&c));
        assert!(!c.is_disjoint(&a));
        assert!(Set::<i32>::new().is_disjoint(&Set::new()));
    }

    #[test]
    fn set_subset_strict_and_non_strict() {
        let small: Set<i32> = Set::from([1, 2]);
        let big: Set<i32> = Set::from([1, 2, 3]);
        let other: Set<i32> = Set::from([1, 4, 5]);

        assert!(small.is_subset(&big, true));
        assert!(small.is_subset(&big, false));
        assert!(big.is_subset(&big, false));
        assert!(!big.is_subset(&big, true));
        assert!(!big.is_subset(&small, false));
        assert!(!small.is_subset(&other, false));

        let empty: Set<i32> = Set::new();
        assert!(empty.is_subset(&small, true));
        assert!(empty.is_subset(&empty, false));
        assert!(!empty.is_subset(&empty, true));
    }

    #[test]
    fn set_superset_mirrors_subset() {
        let small: Set<i32> = Set::from([1, 2]);
        let big: Set<i32> = Set::from([1, 2, 3]);
        assert!(big.is_superset(&small, true));
        assert!(big.is_superset(&big, false));
        assert!(!big.is_superset(&big, true));
        assert!(!small.is_superset(&big, false));
    }

    #[test]
    fn set_equality_ignores_insertion_order() {
        let a: Set<i32> = Set::from_values([3, 1, 2]);
        let b: Set<i32> = Set::from_values([1, 2, 3]);
        let c: Set<i32> = Set::from_values([1, 2, 4]);
        assert!(a.is_equal(&b));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn set_with_custom_hasher() {
        let mut set: Set<&str, RandomState> = Set::with_hasher(RandomState::new());
        set.add(["a", "b"]);
        assert!(set.contains(&"a"));

        let same: Set<&str, RandomState> = Set::from_values(["b", "a"]);
        assert_eq!(set, same);
    }

    #[test]
    fn set_retain_and_drain() {
        let mut set: Set<i32> = (1..=6).collect();
        set.retain(|v| v % 2 == 0);
        assert_eq!(sorted(&set), vec![2, 4, 6]);

        let mut drained: Vec<i32> = set.drain().collect();
        drained.sort_unstable();
        assert_eq!(drained, vec![2, 4, 6]);
        assert!(set.is_empty());
    }

    #[test]
    fn set_debug_lists_elements() {
        let set: Set<i32> = Set::from([5]);
        assert_eq!(format!("{:?}", set), "{5}");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;
        use std::collections::BTreeSet;

        proptest! {
            /// Property: set content matches a BTreeSet reference
            #[cfg_attr(miri, ignore)]
            #[test]
            fn prop_matches_reference(
                adds in prop::collection::vec(0i32..64, 0..64),
                dels in prop::collection::vec(0i32..64, 0..32)
            ) {
                let mut set: Set<i32> = Set::new();
                set.add(adds.iter().copied());
                set.delete(&dels);

                let mut reference: BTreeSet<i32> = adds.into_iter().collect();
                for d in &dels {
                    reference.remove(d);
                }

                prop_assert_eq!(set.len(), reference.len());
                let mut values = set.values();
                values.sort_unstable();
                prop_assert_eq!(values, reference.into_iter().collect::<Vec<_>>());
            }

            /// Property: subset/superset/disjoint agree with BTreeSet
            #[cfg_attr(miri, ignore)]
            #[test]
            fn prop_predicates_match_reference(
                a in prop::collection::btree_set(0u8..16, 0..12),
                b in prop::collection::btree_set(0u8..16, 0..12)
            ) {
                let sa: Set<u8> = a.iter().copied().collect();
                let sb: Set<u8> = b.iter().copied().collect();

                prop_assert_eq!(sa.is_subset(&sb, false), a.is_subset(&b));
                prop_assert_eq!(sa.is_subset(&sb, true), a.is_subset(&b) && a != b);
                prop_assert_eq!(sa.is_superset(&sb, false), a.is_superset(&b));
                prop_assert_eq!(sa.is_disjoint(&sb), a.is_disjoint(&b));
                prop_assert_eq!(sa.is_equal(&sb), a == b);
            }
        }
    }
}
