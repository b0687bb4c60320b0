// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pullix_core::{Cursor, Seq};
use pullix_sources::range;
use pullix_test_utils::{collect, tracked};
use pullix_windowing::window::{window_impl, window_with_skip_impl};

fn materialize<T: Clone + 'static>(windows: &Seq<pullix_windowing::WindowSeq<T>>) -> Vec<Vec<T>> {
    collect(windows).iter().map(|w| collect(&w.values())).collect()
}

#[test]
fn test_tumbling_windows_of_exact_multiples() {
    // Arrange
    let source = range(1, 6);

    // Act
    let windows = materialize(&window_impl(&source, 3));

    // Assert
    assert_eq!(windows, vec![vec![1, 2, 3], vec![4, 5, 6]]);
}

#[test]
fn test_tumbling_final_window_may_be_short() {
    let windows = materialize(&window_impl(&range(0, 7), 3));

    assert_eq!(windows, vec![vec![0, 1, 2], vec![3, 4, 5], vec![6]]);
}

#[test]
fn test_tumbling_window_count_law() {
    // n elements with window size k yield ceil(n / k) windows.
    for n in [1usize, 4, 9, 10] {
        let windows = collect(&window_impl(&range(0, n), 4));
        assert_eq!(windows.len(), n.div_ceil(4));
    }
}

#[test]
fn test_overlapping_windows_fan_elements_out() {
    let windows = materialize(&window_with_skip_impl(&range(0, 5), 3, 1));

    assert_eq!(
        windows,
        vec![
            vec![0, 1, 2],
            vec![1, 2, 3],
            vec![2, 3, 4],
            vec![3, 4],
            vec![4],
        ]
    );
}

#[test]
fn test_skipping_windows_drop_elements_between() {
    let windows = materialize(&window_with_skip_impl(&range(0, 8), 2, 3));

    assert_eq!(windows, vec![vec![0, 1], vec![3, 4], vec![6, 7]]);
}

#[test]
fn test_window_of_empty_source_is_empty() {
    assert!(collect(&window_impl(&Seq::<i32>::empty(), 3)).is_empty());
}

#[test]
fn test_window_values_are_single_use() {
    let windows = collect(&window_impl(&range(0, 4), 2));
    let first = &windows[0];

    assert_eq!(collect(&first.values()), vec![0, 1]);

    let mut second = first.values().cursor();
    assert!(second.has_next().unwrap_err().is_invalid_state());
}

#[test]
fn test_window_pulls_only_on_demand() {
    // Arrange
    let (source, stats) = tracked(&range(0, 100));
    let windows = window_impl(&source, 3);
    let mut outer = windows.cursor();

    // Act: fully read the first window, never touch the rest
    let first = outer.next().unwrap();
    let values = collect(&first.values());

    // Assert: exactly one window's worth of elements was pulled
    assert_eq!(values, vec![0, 1, 2]);
    assert_eq!(stats.next_calls(), 3);
}

#[test]
#[should_panic(expected = "window size must be at least 1")]
fn test_window_size_zero_panics() {
    let _ = window_impl(&range(0, 3), 0);
}

#[test]
#[should_panic(expected = "window skip must be at least 1")]
fn test_window_skip_zero_panics() {
    let _ = window_with_skip_impl(&range(0, 3), 2, 0);
}
