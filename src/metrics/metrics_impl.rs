use crate::metrics::cell::MetricsCell;
use crate::metrics::snapshot::{RingBufferMetricsSnapshot, SequenceMetricsSnapshot};
use crate::metrics::traits::{
    RingBufferMetricsRecorder, SequenceMetricsReadRecorder, SequenceMetricsRecorder,
};

// ---------------------------------------------------------------------------
// SequenceMetrics (Queue, Stack)
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct SequenceMetrics {
    pub push_calls: u64,
    pub pushed_values: u64,
    pub pop_calls: u64,
    pub pop_hits: u64,
    pub pop_empty: u64,
    pub clear_calls: u64,
    pub peek_calls: MetricsCell,
    pub peek_found: MetricsCell,
}

impl SequenceMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures counters plus the gauges supplied by the owning container.
    pub fn snapshot(&self, len: usize, capacity: usize) -> SequenceMetricsSnapshot {
        SequenceMetricsSnapshot {
            push_calls: self.push_calls,
            pushed_values: self.pushed_values,
            pop_calls: self.pop_calls,
            pop_hits: self.pop_hits,
            pop_empty: self.pop_empty,
            clear_calls: self.clear_calls,
            peek_calls: self.peek_calls.get(),
            peek_found: self.peek_found.get(),
            len,
            capacity,
        }
    }
}

impl SequenceMetricsRecorder for SequenceMetrics {
    fn record_push(&mut self, values: usize) {
        self.push_calls += 1;
        self.pushed_values += values as u64;
    }

    fn record_pop_hit(&mut self) {
        self.pop_calls += 1;
        self.pop_hits += 1;
    }

    fn record_pop_empty(&mut self) {
        self.pop_calls += 1;
        self.pop_empty += 1;
    }

    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}

impl SequenceMetricsReadRecorder for &SequenceMetrics {
    fn record_peek_call(&self) {
        self.peek_calls.incr();
    }

    fn record_peek_found(&self) {
        self.peek_found.incr();
    }
}

// ---------------------------------------------------------------------------
// RingBufferMetrics
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct RingBufferMetrics {
    pub sequence: SequenceMetrics,
    pub write_calls: u64,
    pub overwritten_values: u64,
    pub rejected_writes: u64,
}

impl RingBufferMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self, len: usize, capacity: usize) -> RingBufferMetricsSnapshot {
        RingBufferMetricsSnapshot {
            sequence: self.sequence.snapshot(len, capacity),
            write_calls: self.write_calls,
            overwritten_values: self.overwritten_values,
            rejected_writes: self.rejected_writes,
        }
    }
}

impl SequenceMetricsRecorder for RingBufferMetrics {
    fn record_push(&mut self, values: usize) {
        self.sequence.record_push(values);
    }

    fn record_pop_hit(&mut self) {
        self.sequence.record_pop_hit();
    }

    fn record_pop_empty(&mut self) {
        self.sequence.record_pop_empty();
    }

    fn record_clear(&mut self) {
        self.sequence.record_clear();
    }
}

impl RingBufferMetricsRecorder for RingBufferMetrics {
    fn record_write_call(&mut self) {
        self.write_calls += 1;
    }

    fn record_overwritten(&mut self, values: usize) {
        self.overwritten_values += values as u64;
    }

    fn record_write_rejected(&mut self) {
        self.rejected_writes += 1;
    }
}

impl SequenceMetricsReadRecorder for &RingBufferMetrics {
    fn record_peek_call(&self) {
        (&self.sequence).record_peek_call();
    }

    fn record_peek_found(&self) {
        (&self.sequence).record_peek_found();
    }
}
