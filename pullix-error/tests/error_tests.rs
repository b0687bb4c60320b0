// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pullix_error::SeqError;

#[test]
fn test_exhausted_classification() {
    let err = SeqError::exhausted();

    assert!(err.is_exhausted());
    assert!(!err.is_invalid_state());
    assert!(!err.is_unsupported());
    assert!(!err.is_out_of_range());
}

#[test]
fn test_invalid_state_message() {
    let err = SeqError::invalid_state("group already consumed");

    assert!(err.is_invalid_state());
    assert_eq!(err.to_string(), "Invalid state: group already consumed");
}

#[test]
fn test_out_of_range_display() {
    let err = SeqError::out_of_range(2, 9, 5);

    assert!(err.is_out_of_range());
    assert_eq!(err.to_string(), "Range [2, 9) out of bounds for length 5");
}

#[test]
fn test_unsupported_display() {
    let err = SeqError::unsupported("remove");

    assert!(err.is_unsupported());
    assert_eq!(err.to_string(), "Unsupported operation: remove");
}

#[test]
fn test_user_error_wraps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
    let err = SeqError::user(io);

    assert_eq!(err.to_string(), "Generator error: boom");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_user_message() {
    let err = SeqError::user_message("generator refused");

    assert_eq!(err.to_string(), "Generator error: generator refused");
}
