pub use crate::algo::{
    binary_search, binary_search_by, diff, diff_into, intersect, intersect_into, merge_sort,
    merge_sort_by, symmetric_diff, symmetric_diff_into, union, union_into,
};
pub use crate::ds::{Queue, RingBuffer, Set, Stack, WriteMode};
pub use crate::error::{InvariantError, WriteRejected};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::{RingBufferMetricsSnapshot, SequenceMetricsSnapshot};
pub use crate::traits::{Comparable, Container, Ordered};
