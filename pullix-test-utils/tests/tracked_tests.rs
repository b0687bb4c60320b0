// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pullix_core::{Cursor, Seq};
use pullix_test_utils::{assert_elements, collect, fruits, tracked, try_collect};

#[test]
fn test_tracked_counts_cursors_and_pulls() {
    // Arrange
    let (seq, stats) = tracked(&Seq::just(5));

    // Act
    let mut cursor = seq.cursor();
    assert!(cursor.has_next().unwrap());
    assert_eq!(cursor.next().unwrap(), 5);
    assert!(!cursor.has_next().unwrap());

    // Assert
    assert_eq!(stats.cursors(), 1);
    assert_eq!(stats.has_next_calls(), 2);
    assert_eq!(stats.next_calls(), 1);
}

#[test]
fn test_tracked_is_transparent() {
    let (seq, _) = tracked(&Seq::just(9));

    assert_elements(&seq, &[9]);
}

#[test]
fn test_collect_helpers_agree() {
    let (seq, _) = tracked(&Seq::just("x"));

    assert_eq!(collect(&seq), try_collect(&seq).unwrap());
}

#[test]
fn test_fruit_fixture_shape() {
    let all = fruits();

    assert_eq!(all.len(), 5);
    assert_eq!(all[0].name, "apple");
    assert_eq!(
        all.iter().filter(|f| f.color == "red").count(),
        2
    );
}
