use std::io::Write;
use std::sync::Mutex;

use crate::metrics::snapshot::{RingBufferMetricsSnapshot, SequenceMetricsSnapshot};
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for container metrics snapshots.
///
/// Writes in the Prometheus text exposition format so it can be scraped by
/// Prometheus or forwarded to an OpenTelemetry collector.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_metric(&self, kind: &str, name: &str, value: u64) {
        let mut writer = match self.writer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, name: &str, value: u64) {
        self.write_metric("counter", name, value);
    }

    fn write_gauge(&self, name: &str, value: u64) {
        self.write_metric("gauge", name, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send> MetricsExporter<SequenceMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &SequenceMetricsSnapshot) {
        self.write_counter(&self.metric_name("push_calls_total"), snapshot.push_calls);
        self.write_counter(
            &self.metric_name("pushed_values_total"),
            snapshot.pushed_values,
        );
        self.write_counter(&self.metric_name("pop_calls_total"), snapshot.pop_calls);
        self.write_counter(&self.metric_name("pop_hits_total"), snapshot.pop_hits);
        self.write_counter(&self.metric_name("pop_empty_total"), snapshot.pop_empty);
        self.write_counter(&self.metric_name("peek_calls_total"), snapshot.peek_calls);
        self.write_counter(&self.metric_name("peek_found_total"), snapshot.peek_found);
        self.write_counter(
            &self.metric_name("clear_calls_total"),
            snapshot.clear_calls,
        );
        self.write_gauge(&self.metric_name("len"), snapshot.len as u64);
        self.write_gauge(&self.metric_name("capacity"), snapshot.capacity as u64);
    }
}

impl<W: Write + Send> MetricsExporter<RingBufferMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &RingBufferMetricsSnapshot) {
        self.export(&snapshot.sequence);
        self.write_counter(
            &self.metric_name("write_calls_total"),
            snapshot.write_calls,
        );
        self.write_counter(
            &self.metric_name("overwritten_values_total"),
            snapshot.overwritten_values,
        );
        self.write_counter(
            &self.metric_name("rejected_writes_total"),
            snapshot.rejected_writes,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_export_writes_prefixed_counters_and_gauges() {
        let exporter = PrometheusTextExporter::new("queue", Vec::new());
        let snapshot = SequenceMetricsSnapshot {
            push_calls: 3,
            pop_hits: 2,
            len: 1,
            capacity: 4,
            ..Default::default()
        };
        exporter.export(&snapshot);

        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.contains("# TYPE queue_push_calls_total counter\nqueue_push_calls_total 3\n"));
        assert!(text.contains("queue_pop_hits_total 2\n"));
        assert!(text.contains("# TYPE queue_len gauge\nqueue_len 1\n"));
        assert!(text.contains("queue_capacity 4\n"));
    }

    #[test]
    fn ring_export_includes_sequence_and_write_counters() {
        let exporter = PrometheusTextExporter::new("", Vec::new());
        let snapshot = RingBufferMetricsSnapshot {
            write_calls: 5,
            overwritten_values: 7,
            rejected_writes: 1,
            ..Default::default()
        };
        exporter.export(&snapshot);

        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.contains("write_calls_total 5\n"));
        assert!(text.contains("overwritten_values_total 7\n"));
        assert!(text.contains("rejected_writes_total 1\n"));
        assert!(text.contains("pop_calls_total 0\n"));
    }
}
