#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SequenceMetricsSnapshot {
    pub push_calls: u64,
    pub pushed_values: u64,

    pub pop_calls: u64,
    pub pop_hits: u64,
    pub pop_empty: u64,

    pub peek_calls: u64,
    pub peek_found: u64,

    pub clear_calls: u64,

    // gauges captured at snapshot time
    pub len: usize,
    pub capacity: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RingBufferMetricsSnapshot {
    pub sequence: SequenceMetricsSnapshot,

    pub write_calls: u64,
    pub overwritten_values: u64, // stored or same-batch values lost to AllowOverwrite
    pub rejected_writes: u64,
}
