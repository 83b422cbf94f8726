//! Cross-checks for the sequence utilities.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tinware_util::{CopyInto, Shuffle, copy_from_iter};

#[test]
fn shuffle_then_copy_back_restores_nothing_but_the_multiset() {
    let original: Vec<u32> = (0..64).collect();

    let mut shuffled = original.clone();
    shuffled.shuffle_with(&mut SmallRng::seed_from_u64(99));

    // Copy the shuffled content over a scratch buffer and compare
    // multisets; the two utilities agree on length and content.
    let mut scratch = vec![0u32; 64];
    shuffled.copy_into(&mut scratch, 0);

    let mut sorted = scratch;
    sorted.sort_unstable();
    assert_eq!(sorted, original);
}

#[test]
fn ranged_copy_splices_two_sources() {
    let front = [1u8, 2, 3, 4];
    let back = [9u8, 8, 7, 6];

    let mut merged = [0u8; 6];
    front.copy_range_into(0, &mut merged, 0, 3);
    back.copy_range_into(1, &mut merged, 3, 3);

    assert_eq!(merged, [1, 2, 3, 8, 7, 6]);
}

#[test]
fn iterator_copy_fills_a_window() {
    let mut buf = [0u16; 8];
    copy_from_iter((100..104).map(|v| v * 2), &mut buf, 2);
    assert_eq!(buf, [0, 0, 200, 202, 204, 206, 0, 0]);
}
