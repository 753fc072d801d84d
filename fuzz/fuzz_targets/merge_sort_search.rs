#![no_main]

use algokit::algo::{binary_search, merge_sort, merge_sort_by};
use libfuzzer_sys::fuzz_target;

// Sort arbitrary bytes, then search for every byte value
//
// Checks ordering, stability on (key, index) pairs, and that binary search
// finds exactly the values present.
fuzz_target!(|data: &[u8]| {
    let sorted = merge_sort(data);
    assert_eq!(sorted.len(), data.len());
    assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

    let mut expected = data.to_vec();
    expected.sort();
    assert_eq!(sorted, expected);

    let tagged: Vec<(u8, usize)> = data.iter().map(|b| b % 8).zip(0..).collect();
    let stable = merge_sort_by(&tagged, |a, b| a.0.cmp(&b.0));
    for w in stable.windows(2) {
        if w[0].0 == w[1].0 {
            assert!(w[0].1 < w[1].1);
        }
    }

    for target in 0..=u8::MAX {
        match binary_search(&sorted, &target) {
            Some(i) => assert_eq!(sorted[i], target),
            None => assert!(!data.contains(&target)),
        }
    }
});
