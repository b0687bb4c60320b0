// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! First/last consumption with the resolved-scalar fast path.

use pullix_core::{Cursor, Element, Seq};
use pullix_error::{Result, SeqError};

/// First element of `source`.
///
/// Sequences known to resolve to exactly one precomputed value answer
/// without constructing a cursor.
///
/// # Errors
/// Returns [`SeqError::Exhausted`] if the sequence is empty.
pub fn first_impl<T: Element>(source: &Seq<T>) -> Result<T> {
    if let Some(value) = source.scalar() {
        return Ok(value);
    }
    let mut cursor = source.cursor();
    if cursor.has_next()? {
        cursor.next()
    } else {
        Err(SeqError::exhausted())
    }
}

/// First element of `source`, or `default` when empty.
///
/// # Errors
/// Propagates any traversal failure.
pub fn first_or_impl<T: Element>(source: &Seq<T>, default: T) -> Result<T> {
    match first_impl(source) {
        Err(error) if error.is_exhausted() => Ok(default),
        other => other,
    }
}

/// Last element of `source`.
///
/// Drains the whole upstream unless the scalar fast path answers directly.
///
/// # Errors
/// Returns [`SeqError::Exhausted`] if the sequence is empty.
pub fn last_impl<T: Element>(source: &Seq<T>) -> Result<T> {
    if let Some(value) = source.scalar() {
        return Ok(value);
    }
    let mut cursor = source.cursor();
    let mut last = None;
    while cursor.has_next()? {
        last = Some(cursor.next()?);
    }
    last.ok_or_else(SeqError::exhausted)
}

/// Last element of `source`, or `default` when empty.
///
/// # Errors
/// Propagates any traversal failure.
pub fn last_or_impl<T: Element>(source: &Seq<T>, default: T) -> Result<T> {
    match last_impl(source) {
        Err(error) if error.is_exhausted() => Ok(default),
        other => other,
    }
}
