#![no_main]

use std::collections::VecDeque;

use algokit::ds::{RingBuffer, WriteMode};
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on RingBuffer
//
// Mirrors every operation on a bounded VecDeque and checks contents, length
// and invariants after each step.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // First byte picks the capacity (0-31)
    let capacity = (data[0] % 32) as usize;
    let mut ring = RingBuffer::with_capacity(capacity);
    let mut reference: VecDeque<u8> = VecDeque::new();

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 5;
        let arg = data[idx + 1];

        match op {
            0 | 1 => {
                let mode = if op == 0 {
                    WriteMode::AllowOverwrite
                } else {
                    WriteMode::PreventOverwrite
                };
                let batch: Vec<u8> = (0..arg % 40).map(|i| i.wrapping_add(arg)).collect();
                let lost = (reference.len() + batch.len()).saturating_sub(capacity);

                match ring.write(mode, batch.clone()) {
                    Ok(n) => {
                        assert_eq!(n, lost);
                        reference.extend(batch);
                        while reference.len() > capacity {
                            reference.pop_front();
                        }
                    }
                    Err(err) => {
                        assert_eq!(mode, WriteMode::PreventOverwrite);
                        assert!(lost > 0);
                        assert_eq!(err.requested, batch.len());
                        assert_eq!(err.available, capacity - reference.len());
                    }
                }
            }
            2 => {
                assert_eq!(ring.read(), reference.pop_front());
            }
            3 => {
                assert_eq!(ring.peek(), reference.front());
            }
            4 => {
                if arg % 16 == 0 {
                    ring.clear();
                    reference.clear();
                }
            }
            _ => unreachable!(),
        }

        assert_eq!(ring.len(), reference.len());
        assert_eq!(ring.free(), capacity - reference.len());
        assert!(ring.iter().eq(reference.iter()));
        ring.check_invariants().unwrap();

        idx += 2;
    }
});
