#![no_main]

use algokit::algo::set_algebra::{
    diff, diff_into, intersect, intersect_into, symmetric_diff, symmetric_diff_into, union,
};
use algokit::ds::Set;
use libfuzzer_sys::fuzz_target;

// Property checks for n-ary set algebra
//
// Splits the input into sets on 0xFF separators, then checks subset and
// disjointness laws plus `_into` merge semantics with a non-empty destination.
fuzz_target!(|data: &[u8]| {
    let sets: Vec<Set<u8>> = data
        .split(|b| *b == 0xFF)
        .take(8)
        .map(|chunk| chunk.iter().map(|b| b % 64).collect())
        .collect();
    let refs: Vec<&Set<u8>> = sets.iter().collect();

    let all = union(&refs);
    let common = intersect(&refs);
    let base_only = diff(&refs);
    let exactly_one = symmetric_diff(&refs);

    for set in &sets {
        assert!(common.is_subset(set, false));
        assert!(all.is_superset(set, false));
    }
    if let Some((base, rest)) = sets.split_first() {
        assert!(base_only.is_subset(base, false));
        for set in rest {
            assert!(base_only.is_disjoint(set));
        }
    }
    for value in exactly_one.iter() {
        assert_eq!(sets.iter().filter(|s| s.contains(value)).count(), 1);
    }

    // Destination contents survive and merge with the pure result
    let seed: Set<u8> = Set::from([200, 201]);
    let mut dst = seed.clone();
    intersect_into(&mut dst, &refs);
    assert_eq!(dst, union(&[&seed, &common]));

    let mut dst = seed.clone();
    diff_into(&mut dst, &refs);
    assert_eq!(dst, union(&[&seed, &base_only]));

    let mut dst = seed.clone();
    symmetric_diff_into(&mut dst, &refs);
    assert_eq!(dst, union(&[&seed, &exactly_one]));
});
