//! Optional container metrics (enabled with the `metrics` feature).
//!
//! Containers own their recorders; callers read them through
//! [`MetricsSnapshotProvider`](traits::MetricsSnapshotProvider) and publish
//! them with a [`MetricsExporter`](traits::MetricsExporter).
//!
//! ```
//! # #[cfg(feature = "metrics")]
//! # {
//! use algokit::ds::{RingBuffer, WriteMode};
//! use algokit::metrics::snapshot::RingBufferMetricsSnapshot;
//! use algokit::metrics::traits::MetricsSnapshotProvider;
//!
//! let mut ring = RingBuffer::with_capacity(2);
//! ring.write(WriteMode::AllowOverwrite, [1, 2, 3]).unwrap();
//! let snap: RingBufferMetricsSnapshot = ring.snapshot();
//! assert_eq!(snap.overwritten_values, 1);
//! # }
//! ```

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
