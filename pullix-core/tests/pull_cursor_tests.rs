// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cell::Cell;
use std::rc::Rc;

use pullix_core::{pull_cursor, Cursor, PullCursor, SeqError, Step};

fn counting_range(limit: i32) -> (PullCursor<i32, impl FnMut() -> pullix_core::Result<Step<i32>>>, Rc<Cell<usize>>) {
    let advances = Rc::new(Cell::new(0));
    let counter = Rc::clone(&advances);
    let mut next = 0;
    let cursor = PullCursor::new(move || {
        counter.set(counter.get() + 1);
        if next < limit {
            let value = next;
            next += 1;
            Ok(Step::Yield(value))
        } else {
            Ok(Step::Done)
        }
    });
    (cursor, advances)
}

#[test]
fn test_has_next_is_idempotent() {
    // Arrange
    let (mut cursor, advances) = counting_range(2);

    // Act: query repeatedly without consuming
    assert!(cursor.has_next().unwrap());
    assert!(cursor.has_next().unwrap());
    assert!(cursor.has_next().unwrap());

    // Assert: the advance closure ran exactly once
    assert_eq!(advances.get(), 1);
    assert_eq!(cursor.next().unwrap(), 0);
    assert_eq!(advances.get(), 1);
}

#[test]
fn test_no_elements_skipped_or_duplicated() {
    let (mut cursor, _) = counting_range(3);

    let mut seen = Vec::new();
    while cursor.has_next().unwrap() {
        cursor.has_next().unwrap(); // extra probe must be harmless
        seen.push(cursor.next().unwrap());
    }

    assert_eq!(seen, vec![0, 1, 2]);
}

#[test]
fn test_next_past_end_fails_with_exhausted() {
    let (mut cursor, _) = counting_range(1);

    assert_eq!(cursor.next().unwrap(), 0);
    let err = cursor.next().unwrap_err();
    assert!(err.is_exhausted());
}

#[test]
fn test_terminal_state_stops_upstream_interaction() {
    // Arrange
    let (mut cursor, advances) = counting_range(0);

    // Act
    assert!(!cursor.has_next().unwrap());
    let after_first = advances.get();
    assert!(!cursor.has_next().unwrap());
    assert!(!cursor.has_next().unwrap());

    // Assert: once terminal, the state machine is never touched again
    assert_eq!(advances.get(), after_first);
}

#[test]
fn test_error_latches_terminal_state() {
    let mut calls = 0;
    let mut cursor = PullCursor::new(move || -> pullix_core::Result<Step<i32>> {
        calls += 1;
        if calls == 1 {
            Ok(Step::Yield(1))
        } else {
            Err(SeqError::user_message("step failed"))
        }
    });

    assert_eq!(cursor.next().unwrap(), 1);
    assert!(cursor.has_next().is_err());
    // After the failure the cursor is terminal, not retried.
    assert!(!cursor.has_next().unwrap());
}

#[test]
fn test_remove_defaults_to_unsupported() {
    let mut cursor = pull_cursor::<i32, _>(|| Ok(Step::Done));

    let err = cursor.remove().unwrap_err();
    assert!(err.is_unsupported());
}
