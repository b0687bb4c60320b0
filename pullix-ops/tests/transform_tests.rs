// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pullix_core::Cursor;
use pullix_ops::distinct::{
    distinct_impl, distinct_until_changed_by_impl, distinct_until_changed_impl,
};
use pullix_ops::every_nth::every_nth_impl;
use pullix_ops::filter::{filter_impl, remove_if_impl, retain_impl};
use pullix_ops::map::map_impl;
use pullix_ops::scan::scan_impl;
use pullix_ops::skip_take::{skip_impl, skip_last_impl, take_impl, take_last_impl};
use pullix_sources::{from_vec, range};
use pullix_test_utils::{assert_elements, collect, tracked};

#[test]
fn test_map_transforms_each_element() {
    let doubled = map_impl(&range(1, 4), |v| v * 2);

    assert_elements(&doubled, &[2, 4, 6, 8]);
}

#[test]
fn test_map_is_lazy() {
    // Arrange
    let (source, stats) = tracked(&range(0, 100));
    let mapped = map_impl(&source, |v| v + 1);

    // Act: composing pulls nothing
    assert_eq!(stats.cursors(), 0);
    let mut cursor = mapped.cursor();
    assert_eq!(cursor.next().unwrap(), 1);
    assert_eq!(cursor.next().unwrap(), 2);

    // Assert: exactly two upstream elements were consumed
    assert_eq!(stats.next_calls(), 2);
}

#[test]
fn test_filter_keeps_matching_elements() {
    let evens = filter_impl(&range(0, 10), |v| v % 2 == 0);

    assert_elements(&evens, &[0, 2, 4, 6, 8]);
}

#[test]
fn test_filter_has_next_is_idempotent() {
    // Arrange: a filter that drops most elements
    let (source, stats) = tracked(&range(0, 10));
    let filtered = filter_impl(&source, |v| *v == 7);
    let mut cursor = filtered.cursor();

    // Act: probe repeatedly before consuming
    assert!(cursor.has_next().unwrap());
    let consumed_after_first_probe = stats.next_calls();
    assert!(cursor.has_next().unwrap());
    assert!(cursor.has_next().unwrap());

    // Assert: the extra probes pulled nothing further upstream
    assert_eq!(stats.next_calls(), consumed_after_first_probe);
    assert_eq!(cursor.next().unwrap(), 7);
}

#[test]
fn test_retain_and_remove_if_are_complements() {
    let source = from_vec(vec![1, 2, 3, 4, 5, 6]);

    assert_elements(&retain_impl(&source, |v| v % 3 == 0), &[3, 6]);
    assert_elements(&remove_if_impl(&source, |v| v % 3 == 0), &[1, 2, 4, 5]);
}

#[test]
fn test_remove_passes_through_to_read_only_source() {
    let filtered = filter_impl(&from_vec(vec![1, 2, 3]), |v| *v > 1);
    let mut cursor = filtered.cursor();

    assert_eq!(cursor.next().unwrap(), 2);
    // The backing array sequence is read-only, so the forwarded removal
    // request surfaces as Unsupported.
    assert!(cursor.remove().unwrap_err().is_unsupported());
}

#[test]
fn test_skip_then_take_window() {
    // range(1,5).skip(2).take(2) == [3, 4]
    let windowed = take_impl(&skip_impl(&range(1, 5), 2), 2);

    assert_elements(&windowed, &[3, 4]);
}

#[test]
fn test_skip_more_than_length_is_empty() {
    assert!(collect(&skip_impl(&range(0, 3), 10)).is_empty());
}

#[test]
fn test_take_caps_at_source_length() {
    assert_elements(&take_impl(&range(0, 3), 10), &[0, 1, 2]);
    assert!(collect(&take_impl(&range(0, 3), 0)).is_empty());
}

#[test]
fn test_take_never_overpulls_upstream() {
    // Arrange
    let (source, stats) = tracked(&range(0, 100));
    let limited = take_impl(&source, 3);

    // Act
    assert_eq!(collect(&limited), vec![0, 1, 2]);

    // Assert: min(n, |S|) elements pulled, nothing beyond the cut-off
    assert_eq!(stats.next_calls(), 3);
}

#[test]
fn test_skip_last_drops_suffix() {
    assert_elements(&skip_last_impl(&range(1, 5), 2), &[1, 2, 3]);
    assert!(collect(&skip_last_impl(&range(1, 3), 5)).is_empty());
    assert_elements(&skip_last_impl(&range(1, 3), 0), &[1, 2, 3]);
}

#[test]
fn test_take_last_keeps_suffix() {
    assert_elements(&take_last_impl(&range(1, 5), 2), &[4, 5]);
    assert_elements(&take_last_impl(&range(1, 3), 5), &[1, 2, 3]);
    assert!(collect(&take_last_impl(&range(1, 5), 0)).is_empty());
}

#[test]
fn test_distinct_keeps_first_appearance_order() {
    let source = from_vec(vec![3, 1, 3, 2, 1, 4]);

    assert_elements(&distinct_impl(&source), &[3, 1, 2, 4]);
}

#[test]
fn test_distinct_until_changed_drops_consecutive_duplicates() {
    let source = from_vec(vec![1, 1, 2, 2, 2, 3, 2]);

    assert_elements(&distinct_until_changed_impl(&source), &[1, 2, 3, 2]);
}

#[test]
fn test_distinct_until_changed_by_key() {
    let source = from_vec(vec!["apple", "avocado", "banana", "cherry", "citrus"]);
    let by_initial = distinct_until_changed_by_impl(&source, |word: &&str| word.as_bytes()[0]);

    assert_elements(&by_initial, &["apple", "banana", "cherry"]);
}

#[test]
fn test_every_nth_selects_stride() {
    assert_elements(&every_nth_impl(&range(0, 10), 3), &[0, 3, 6, 9]);
    assert_elements(&every_nth_impl(&range(0, 4), 1), &[0, 1, 2, 3]);
}

#[test]
fn test_scan_emits_running_totals() {
    let totals = scan_impl(&range(1, 4), 0, |acc, v| acc + v);

    assert_elements(&totals, &[1, 3, 6, 10]);
}

#[test]
fn test_scan_of_empty_is_empty() {
    let totals = scan_impl(&range(1, 0), 100, |acc, v| acc + v);

    assert!(collect(&totals).is_empty());
}
