//! # Metrics Trait Hierarchy
//!
//! Separates *recording*, *snapshotting*, and *export* responsibilities into
//! small, composable traits so containers stay free of monitoring concerns.
//!
//! ## Architecture
//!
//! ```text
//!                     ┌─────────────────────────────┐
//!                     │  SequenceMetricsRecorder    │
//!                     │  push/pop_hit/pop_empty     │
//!                     │  clear                      │
//!                     └──────────────┬──────────────┘
//!                                    │
//!            ┌───────────────────────┴───────────────────────┐
//!            │                                               │
//!            ▼                                               ▼
//!    ┌────────────────┐                       ┌──────────────────────────────┐
//!    │ Queue / Stack  │                       │ RingBufferMetricsRecorder    │
//!    │ SequenceMetrics│                       │ write/overwritten/rejected   │
//!    └────────────────┘                       └──────────────────────────────┘
//!
//!   Consumption (decoupled from recording):
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```
//!
//! ## Design Goals
//! - **Single responsibility**: recorders only write counters; providers only
//!   read/snapshot; exporters only publish.
//! - **Shared hierarchy**: the ring buffer extends the sequence recorder with
//!   write-policy signals.

/// Counters common to every sequence container.
pub trait SequenceMetricsRecorder {
    fn record_push(&mut self, values: usize);
    fn record_pop_hit(&mut self);
    fn record_pop_empty(&mut self);
    fn record_clear(&mut self);
}

/// Read-only sequence metrics for `&self` methods (uses interior mutability).
pub trait SequenceMetricsReadRecorder {
    fn record_peek_call(&self);
    fn record_peek_found(&self);
}

/// Metrics for ring-buffer write policies.
pub trait RingBufferMetricsRecorder: SequenceMetricsRecorder {
    fn record_write_call(&mut self);
    fn record_overwritten(&mut self, values: usize);
    fn record_write_rejected(&mut self);
}

/// Read-only snapshot provider for tests and benchmarks.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&mut self);
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
