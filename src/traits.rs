//! # Capability Bounds and Container Trait
//!
//! Element-type capabilities used across the crate, plus the small trait every
//! container implements.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────┐        ┌─────────────────────────┐
//!   │   Comparable            │        │   Ordered               │
//!   │   Eq + Hash             │        │   Ord                   │
//!   │                         │        │                         │
//!   │   used by: Set,         │        │   used by:              │
//!   │   set_algebra           │        │   binary_search,        │
//!   └─────────────────────────┘        │   merge_sort            │
//!                                      └─────────────────────────┘
//!
//!                    ┌─────────────────────────────────┐
//!                    │          Container              │
//!                    │                                 │
//!                    │  len(&) → usize                 │
//!                    │  is_empty(&) → bool             │
//!                    │  clear(&mut)                    │
//!                    └────────────────┬────────────────┘
//!                                     │
//!        ┌───────────────┬────────────┴──┬─────────────────┐
//!        ▼               ▼               ▼                 ▼
//!    Queue<T>        Stack<T>      RingBuffer<T>      Set<T, S>
//! ```
//!
//! `Comparable` and `Ordered` are blanket-implemented, so they never need to
//! be implemented by hand. They exist to name the requirement at API
//! boundaries; all dispatch is static.
//!
//! ## Example Usage
//!
//! ```
//! use algokit::ds::{Queue, Stack};
//! use algokit::traits::Container;
//!
//! fn drain_all<C: Container>(c: &mut C) -> usize {
//!     let n = c.len();
//!     c.clear();
//!     n
//! }
//!
//! let mut q = Queue::from_values([1, 2, 3]);
//! let mut s = Stack::from_values(["a", "b"]);
//! assert_eq!(drain_all(&mut q), 3);
//! assert_eq!(drain_all(&mut s), 2);
//! assert!(q.is_empty() && s.is_empty());
//! ```

use std::hash::Hash;

/// Element types that can be stored in a [`Set`](crate::ds::Set).
///
/// Blanket-implemented for every `T: Eq + Hash`.
pub trait Comparable: Eq + Hash {}

impl<T: Eq + Hash + ?Sized> Comparable for T {}

/// Element types with a total order consistent with equality.
///
/// Blanket-implemented for every `T: Ord`.
pub trait Ordered: Ord {}

impl<T: Ord + ?Sized> Ordered for T {}

/// Operations shared by every container in the crate.
pub trait Container {
    /// Returns the number of stored elements.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all elements, keeping allocated storage.
    fn clear(&mut self);
}
