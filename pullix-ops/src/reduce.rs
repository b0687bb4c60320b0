// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fold-to-scalar reductions.

use pullix_core::{Cursor, Element, Seq};
use pullix_error::{Result, SeqError};

/// Fold `source` into a scalar starting from `seed`.
///
/// Drives the whole upstream; this is a terminal operation.
///
/// # Errors
/// Propagates any traversal failure.
pub fn fold_impl<T, A, F>(source: &Seq<T>, seed: A, fold: F) -> Result<A>
where
    T: Element,
    F: Fn(A, T) -> A,
{
    let mut cursor = source.cursor();
    let mut accumulator = seed;
    while cursor.has_next()? {
        accumulator = fold(accumulator, cursor.next()?);
    }
    Ok(accumulator)
}

/// Fold `source` into a scalar using its first element as the seed.
///
/// # Errors
/// Returns [`SeqError::Exhausted`] if the sequence is empty.
pub fn reduce_impl<T, F>(source: &Seq<T>, fold: F) -> Result<T>
where
    T: Element,
    F: Fn(T, T) -> T,
{
    let mut cursor = source.cursor();
    if !cursor.has_next()? {
        return Err(SeqError::exhausted());
    }
    let mut accumulator = cursor.next()?;
    while cursor.has_next()? {
        accumulator = fold(accumulator, cursor.next()?);
    }
    Ok(accumulator)
}
