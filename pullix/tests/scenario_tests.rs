// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! End-to-end checks of short representative chains.

use pullix::prelude::*;

#[test]
fn test_sort_a_small_array() {
    // Arrange
    let source = from_vec(vec![3, 1, 2]);

    // Act
    let sorted = source.sorted().to_vec().unwrap();

    // Assert
    assert_eq!(sorted, vec![1, 2, 3]);
}

#[test]
fn test_skip_then_take_from_a_range() {
    let out = range(1, 5).skip(2).take(2).to_vec().unwrap();

    assert_eq!(out, vec![3, 4]);
}

#[test]
fn test_characters_yield_code_points() {
    let out = characters("ab").to_vec().unwrap();

    assert_eq!(out, vec![97, 98]);
}

#[test]
fn test_tumbling_windows_reassemble_the_range() {
    // Arrange
    let windows = range(1, 6).window(3);

    // Act
    let realized = windows.to_vec().unwrap();
    let mut flattened = Vec::new();
    for window in &realized {
        flattened.extend(window.values().to_vec().unwrap());
    }

    // Assert
    assert_eq!(realized.len(), 2);
    assert_eq!(flattened, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_flat_map_over_an_empty_source() {
    let out = Seq::<i32>::empty().flat_map(Seq::just).to_vec().unwrap();

    assert!(out.is_empty());
}
