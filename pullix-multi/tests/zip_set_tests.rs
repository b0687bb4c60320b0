// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pullix_core::{Cursor, Seq};
use pullix_multi::set_ops::{except_impl, intersect_impl, union_impl};
use pullix_multi::zip::{zip3_impl, zip_impl, zip_with_impl};
use pullix_sources::{from_vec, range, repeat_forever};
use pullix_test_utils::{assert_elements, collect, tracked};

#[test]
fn test_zip_pairs_positionally() {
    let zipped = zip_impl(&range(1, 3), &from_vec(vec!["a", "b", "c"]));

    assert_elements(&zipped, &[(1, "a"), (2, "b"), (3, "c")]);
}

#[test]
fn test_zip_stops_at_shorter_side() {
    let zipped = zip_impl(&range(0, 2), &from_vec(vec!["x", "y", "z"]));

    assert_eq!(collect(&zipped).len(), 2);
}

#[test]
fn test_zip_bounds_an_infinite_source() {
    let zipped = zip_impl(&from_vec(vec![10, 20]), &repeat_forever(0));

    assert_elements(&zipped, &[(10, 0), (20, 0)]);
}

#[test]
fn test_zip_does_not_overpull_longer_side() {
    let (long, stats) = tracked(&range(0, 100));
    let zipped = zip_impl(&range(0, 2), &long);

    assert_eq!(collect(&zipped).len(), 2);
    assert_eq!(stats.next_calls(), 2);
}

#[test]
fn test_zip_with_combines() {
    let sums = zip_with_impl(&range(1, 3), &range(10, 3), |a, b| a + b);

    assert_elements(&sums, &[11, 13, 15]);
}

#[test]
fn test_zip3() {
    let tripled = zip3_impl(&range(1, 2), &from_vec(vec!["a", "b"]), &range(9, 2));

    assert_elements(&tripled, &[(1, "a", 9), (2, "b", 10)]);
}

#[test]
fn test_union_first_appearance_order() {
    let union = union_impl(&from_vec(vec![3, 1, 3]), &from_vec(vec![2, 1, 4]));

    assert_elements(&union, &[3, 1, 2, 4]);
}

#[test]
fn test_intersect() {
    let common = intersect_impl(&from_vec(vec![1, 2, 2, 3, 4]), &from_vec(vec![2, 4, 6]));

    assert_elements(&common, &[2, 4]);
}

#[test]
fn test_except() {
    let only_left = except_impl(&from_vec(vec![1, 2, 2, 3, 4]), &from_vec(vec![2, 4]));

    assert_elements(&only_left, &[1, 3]);
}

#[test]
fn test_set_ops_with_empty_sides() {
    let empty = Seq::<i32>::empty();
    let some = from_vec(vec![1, 2]);

    assert_elements(&union_impl(&empty, &some), &[1, 2]);
    assert!(collect(&intersect_impl(&some, &empty)).is_empty());
    assert_elements(&except_impl(&some, &empty), &[1, 2]);
}

#[test]
fn test_set_other_side_materializes_lazily() {
    // The membership set is built on the first pull, not at composition.
    let (other, stats) = tracked(&range(0, 10));
    let filtered = intersect_impl(&from_vec(vec![5, 50]), &other);

    assert_eq!(stats.cursors(), 0);
    let mut cursor = filtered.cursor();
    assert!(cursor.has_next().unwrap());
    assert_eq!(stats.cursors(), 1);
    assert_eq!(stats.next_calls(), 10);
    assert_eq!(cursor.next().unwrap(), 5);
}
