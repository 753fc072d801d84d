//! algokit: generic containers and algorithms.
//!
//! - [`ds`]: queue, stack, fixed-capacity ring buffer and hash set.
//! - [`algo`]: multi-set algebra, binary search and merge sort.
//! - `metrics` (feature `metrics`): per-container counters and exporters.
//!
//! Empty reads and failed searches return `None`; the only error surfaced by
//! normal operation is [`error::WriteRejected`] from a non-overwriting ring
//! buffer write.

pub mod algo;
pub mod ds;
pub mod error;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;
