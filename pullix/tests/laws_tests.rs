// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Algebraic properties the operator chains must uphold.

use pullix::prelude::*;
use pullix_test_utils::tracked;

#[test]
fn test_range_materializes_in_order() {
    for (start, count) in [(0i64, 0usize), (5, 1), (-2, 5)] {
        let expected: Vec<i64> = (start..start + count as i64).collect();
        assert_eq!(range(start, count).to_vec().unwrap(), expected);
    }
}

#[test]
fn test_take_yields_at_most_the_requested_prefix() {
    for n in 0..8usize {
        let out = range(0, 5).take(n).to_vec().unwrap();
        let expected: Vec<i64> = (0..5i64).take(n).collect();
        assert_eq!(out, expected);
    }
}

#[test]
fn test_take_never_overpulls() {
    let (source, stats) = tracked(&range(0, 100));

    source.take(3).to_vec().unwrap();

    assert_eq!(stats.next_calls(), 3);
}

#[test]
fn test_group_by_partitions_the_multiset() {
    // Every element lands in exactly one group, keyed by equality.
    let source = from_vec(vec![4, 7, 4, 1, 7, 7]);

    let groups = source.group_by(|v| *v).to_vec().unwrap();
    let mut regrouped = Vec::new();
    for group in &groups {
        let values = group.values().to_vec().unwrap();
        assert!(values.iter().all(|v| v == group.key()));
        regrouped.extend(values);
    }
    regrouped.sort_unstable();

    assert_eq!(regrouped, vec![1, 4, 4, 7, 7, 7]);
}

#[test]
fn test_tumbling_window_count_and_reassembly() {
    for n in [0usize, 1, 3, 7, 9] {
        let windows = range(0, n).window(3).to_vec().unwrap();
        assert_eq!(windows.len(), n.div_ceil(3));

        let mut flattened = Vec::new();
        for (position, window) in windows.iter().enumerate() {
            let values = window.values().to_vec().unwrap();
            if position + 1 < windows.len() {
                assert_eq!(values.len(), 3);
            }
            flattened.extend(values);
        }
        let expected: Vec<i64> = (0..n as i64).collect();
        assert_eq!(flattened, expected);
    }
}

#[test]
fn test_overlapping_buffers_adjacent_lists_share_tail() {
    let size = 5;
    let skip = 2;
    let buffers = range(0, 20).buffer_with_skip(size, skip).to_vec().unwrap();

    for pair in buffers.windows(2) {
        if pair[0].len() == size && pair[1].len() >= size - skip {
            assert_eq!(pair[0][skip..], pair[1][..size - skip]);
        }
    }
}

#[test]
fn test_ordered_merge_of_sorted_inputs_is_sorted_union() {
    let left = vec![1i32, 2, 5, 5, 9];
    let right = vec![0i32, 5, 6];

    let merged = ordered_merge(vec![from_vec(left.clone()), from_vec(right.clone())])
        .to_vec()
        .unwrap();

    let mut expected = left;
    expected.extend(right);
    expected.sort_unstable();
    assert_eq!(merged, expected);
    assert!(merged.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_has_next_is_idempotent_through_a_chain() {
    // Arrange
    let (source, stats) = tracked(&range(0, 3));
    let chain = source.map(|v| v + 1).filter(|v| *v > 0);
    let mut cursor = chain.cursor();

    // Act: probe repeatedly without consuming
    assert!(cursor.has_next().unwrap());
    assert!(cursor.has_next().unwrap());
    assert!(cursor.has_next().unwrap());

    // Assert: the upstream advanced exactly once
    assert_eq!(stats.next_calls(), 1);
    assert_eq!(cursor.next().unwrap(), 1);
}

#[test]
fn test_re_iteration_starts_over() {
    let (source, stats) = tracked(&range(0, 4));
    let chain = source.map(|v| v * 2);

    assert_eq!(chain.to_vec().unwrap(), vec![0, 2, 4, 6]);
    assert_eq!(chain.to_vec().unwrap(), vec![0, 2, 4, 6]);
    assert_eq!(stats.cursors(), 2);
    assert_eq!(stats.next_calls(), 8);
}
