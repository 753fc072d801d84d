// ==============================================
// CROSS-CONTAINER INVARIANT TESTS (integration)
// ==============================================
//
// Behavior shared by every container through the `Container` trait, plus
// ordering guarantees that span more than one module.

use algokit::prelude::*;

fn fill_and_clear<C: Container>(container: &mut C, expected_len: usize) {
    assert_eq!(container.len(), expected_len);
    assert_eq!(container.is_empty(), expected_len == 0);
    container.clear();
    assert_eq!(container.len(), 0);
    assert!(container.is_empty());
}

// ==============================================
// Container trait
// ==============================================

#[test]
fn every_container_clears_through_trait() {
    let mut queue = Queue::from_values([1, 2, 3]);
    let mut stack = Stack::from_values([1, 2]);
    let mut ring = RingBuffer::from_values([1, 2, 3, 4]);
    let mut set: Set<i32> = Set::from([1, 1, 2]);

    fill_and_clear(&mut queue, 3);
    fill_and_clear(&mut stack, 2);
    fill_and_clear(&mut ring, 4);
    fill_and_clear(&mut set, 2);

    assert_eq!(ring.capacity(), 4);
    ring.check_invariants().unwrap();
}

#[test]
fn empty_reads_return_none_everywhere() {
    let mut queue: Queue<u8> = Queue::new();
    let mut stack: Stack<u8> = Stack::new();
    let mut ring: RingBuffer<u8> = RingBuffer::with_capacity(2);

    assert_eq!(queue.dequeue(), None);
    assert_eq!(stack.pop(), None);
    assert_eq!(ring.read(), None);

    assert_eq!(queue.dequeue_or_default(), 0);
    assert_eq!(stack.pop_or_default(), 0);
    assert_eq!(ring.read_or_default(), 0);
}

// ==============================================
// Ordering
// ==============================================

#[test]
fn queue_and_ring_agree_while_under_capacity() {
    let mut queue = Queue::new();
    let mut ring = RingBuffer::with_capacity(32);

    for round in 0..20u32 {
        let batch = [round, round + 100];
        queue.enqueue(batch);
        ring.write(WriteMode::PreventOverwrite, batch).unwrap();

        assert_eq!(queue.dequeue(), ring.read());
        assert_eq!(queue.len(), ring.len());
    }
    let from_queue: Vec<u32> = queue.iter().copied().collect();
    let from_ring: Vec<u32> = ring.iter().copied().collect();
    assert_eq!(from_queue, from_ring);
}

#[test]
fn stack_reverses_what_queue_preserves() {
    let values = ["a", "b", "c", "d"];
    let mut queue = Queue::from_values(values);
    let mut stack = Stack::from_values(values);

    let fifo: Vec<&str> = std::iter::from_fn(|| queue.dequeue()).collect();
    let mut lifo: Vec<&str> = std::iter::from_fn(|| stack.pop()).collect();
    lifo.reverse();
    assert_eq!(fifo, lifo);
}

// ==============================================
// Ring buffer write policies
// ==============================================

#[test]
fn ring_rejection_reports_free_slots() {
    let mut ring = RingBuffer::with_capacity(4);
    ring.write(WriteMode::AllowOverwrite, [1, 2, 3]).unwrap();

    let err = ring.write(WriteMode::PreventOverwrite, [4, 5]).unwrap_err();
    assert_eq!(err.requested, 2);
    assert_eq!(err.available, 1);
    assert_eq!(
        err.to_string(),
        "write of 2 values rejected: only 1 free slots"
    );

    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.to_string().contains("rejected"));
}

#[test]
fn ring_overwrite_then_drain_sorted_matches_merge_sort() {
    let mut ring = RingBuffer::with_capacity(5);
    let lost = ring.write(WriteMode::AllowOverwrite, [9, 3, 7, 1, 8, 2, 6]).unwrap();
    assert_eq!(lost, 2);

    let kept: Vec<i32> = ring.iter().copied().collect();
    assert_eq!(kept, vec![7, 1, 8, 2, 6]);

    let sorted = merge_sort(&kept);
    assert_eq!(sorted, vec![1, 2, 6, 7, 8]);
    assert_eq!(binary_search(&sorted, &6), Some(2));
    assert_eq!(binary_search(&sorted, &9), None);
}

// ==============================================
// Metrics
// ==============================================

#[cfg(feature = "metrics")]
mod metrics_export {
    use algokit::metrics::exporter::PrometheusTextExporter;
    use algokit::metrics::traits::{MetricsExporter, MetricsSnapshotProvider};
    use algokit::prelude::*;

    #[test]
    fn ring_snapshot_exports_as_prometheus_text() {
        let mut ring = RingBuffer::with_capacity(2);
        ring.write(WriteMode::AllowOverwrite, [1, 2, 3]).unwrap();
        let _ = ring.write(WriteMode::PreventOverwrite, [4]);

        let exporter = PrometheusTextExporter::new("ring", Vec::new());
        exporter.export(&ring.snapshot());

        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.contains("ring_overwritten_values_total 1\n"));
        assert!(text.contains("ring_rejected_writes_total 1\n"));
        assert!(text.contains("ring_len 2\n"));
        assert!(text.contains("ring_capacity 2\n"));
    }

    #[test]
    fn queue_snapshot_exports_sequence_counters() {
        let mut queue = Queue::from_values([1, 2, 3]);
        queue.dequeue();

        let exporter = PrometheusTextExporter::new("queue", Vec::new());
        exporter.export(&queue.snapshot());

        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.contains("queue_pushed_values_total 3\n"));
        assert!(text.contains("queue_pop_hits_total 1\n"));
        assert!(text.contains("queue_len 2\n"));
    }
}
