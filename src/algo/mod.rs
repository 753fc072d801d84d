//! Algorithms over slices and sets.
//!
//! - [`binary_search`]: bisection over sorted slices.
//! - [`merge_sort`]: stable, non-mutating merge sort.
//! - [`set_algebra`]: union, intersection, difference and symmetric
//!   difference across any number of [`Set`](crate::ds::Set)s.

pub mod binary_search;
pub mod merge_sort;
pub mod set_algebra;

pub use binary_search::{binary_search, binary_search_by};
pub use merge_sort::{merge_sort, merge_sort_by};
pub use set_algebra::{
    diff, diff_into, intersect, intersect_into, symmetric_diff, symmetric_diff_into, union,
    union_into,
};
