// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pullix_core::{Cursor, Seq};
use pullix_multi::ordered_merge::{ordered_merge_by_impl, ordered_merge_impl};
use pullix_sources::from_vec;
use pullix_test_utils::{assert_elements, collect, tracked};

#[test]
fn test_merge_two_sorted_sequences() {
    let merged = ordered_merge_impl(vec![
        from_vec(vec![1, 4, 7]),
        from_vec(vec![2, 3, 8, 9]),
    ]);

    assert_elements(&merged, &[1, 2, 3, 4, 7, 8, 9]);
}

#[test]
fn test_merge_multiset_union_law() {
    // The merged multiset equals the union of the input multisets.
    let left = vec![1, 3, 3, 5];
    let right = vec![2, 3, 4];
    let merged = ordered_merge_impl(vec![from_vec(left.clone()), from_vec(right.clone())]);

    let mut expected = left;
    expected.extend(right);
    expected.sort_unstable();
    assert_eq!(collect(&merged), expected);
}

#[test]
fn test_merge_ties_prefer_earlier_source() {
    #[derive(Clone, Debug, PartialEq)]
    struct Tagged {
        key: i32,
        source: &'static str,
    }

    let left = from_vec(vec![
        Tagged { key: 1, source: "left" },
        Tagged { key: 2, source: "left" },
    ]);
    let right = from_vec(vec![
        Tagged { key: 1, source: "right" },
        Tagged { key: 3, source: "right" },
    ]);

    let merged = ordered_merge_by_impl(vec![left, right], |a, b| a.key.cmp(&b.key));
    let sources: Vec<_> = collect(&merged).into_iter().map(|t| t.source).collect();

    assert_eq!(sources, vec!["left", "right", "left", "right"]);
}

#[test]
fn test_merge_excludes_completed_sources() {
    let merged = ordered_merge_impl(vec![
        from_vec(vec![1]),
        from_vec(vec![5, 6, 7]),
        Seq::empty(),
    ]);

    assert_elements(&merged, &[1, 5, 6, 7]);
}

#[test]
fn test_merge_of_empty_sources_is_empty() {
    let merged = ordered_merge_impl(vec![Seq::<i32>::empty(), Seq::empty()]);

    assert!(collect(&merged).is_empty());
    assert!(collect(&ordered_merge_impl::<i32>(vec![])).is_empty());
}

#[test]
fn test_merge_advances_only_the_winning_source() {
    // Arrange: track the "slow" source whose head is large
    let (slow, stats) = tracked(&from_vec(vec![100, 101]));
    let merged = ordered_merge_impl(vec![from_vec(vec![1, 2, 3]), slow]);
    let mut cursor = merged.cursor();

    // Act: consume the three small elements
    for expected in [1, 2, 3] {
        assert_eq!(cursor.next().unwrap(), expected);
    }

    // Assert: the slow source only ever supplied its lookahead element
    assert_eq!(stats.next_calls(), 1);
    assert_eq!(cursor.next().unwrap(), 100);
    assert_eq!(cursor.next().unwrap(), 101);
    assert!(!cursor.has_next().unwrap());
}
