// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Terminal queries: counting, extrema, membership, sequence equality.

use std::cmp::Ordering;

use pullix_core::{Cursor, Element, Seq};
use pullix_error::{Result, SeqError};

/// Number of elements in `source`.
///
/// # Errors
/// Propagates any traversal failure.
pub fn count_impl<T: Element>(source: &Seq<T>) -> Result<usize> {
    let mut cursor = source.cursor();
    let mut count = 0;
    while cursor.has_next()? {
        cursor.next()?;
        count += 1;
    }
    Ok(count)
}

/// Smallest element of `source` per `compare`.
///
/// Ties keep the earlier element.
///
/// # Errors
/// Returns [`SeqError::Exhausted`] if the sequence is empty.
pub fn min_by_impl<T, F>(source: &Seq<T>, compare: F) -> Result<T>
where
    T: Element,
    F: Fn(&T, &T) -> Ordering,
{
    extremum(source, |candidate, best| compare(candidate, best) == Ordering::Less)
}

/// Largest element of `source` per `compare`.
///
/// Ties keep the earlier element.
///
/// # Errors
/// Returns [`SeqError::Exhausted`] if the sequence is empty.
pub fn max_by_impl<T, F>(source: &Seq<T>, compare: F) -> Result<T>
where
    T: Element,
    F: Fn(&T, &T) -> Ordering,
{
    extremum(source, |candidate, best| compare(candidate, best) == Ordering::Greater)
}

fn extremum<T, F>(source: &Seq<T>, replaces: F) -> Result<T>
where
    T: Element,
    F: Fn(&T, &T) -> bool,
{
    let mut cursor = source.cursor();
    if !cursor.has_next()? {
        return Err(SeqError::exhausted());
    }
    let mut best = cursor.next()?;
    while cursor.has_next()? {
        let candidate = cursor.next()?;
        if replaces(&candidate, &best) {
            best = candidate;
        }
    }
    Ok(best)
}

/// Whether `source` produces an element equal to `value`.
///
/// Stops pulling as soon as a match is found.
///
/// # Errors
/// Propagates any traversal failure.
pub fn contains_impl<T>(source: &Seq<T>, value: &T) -> Result<bool>
where
    T: Element + PartialEq,
{
    let mut cursor = source.cursor();
    while cursor.has_next()? {
        if cursor.next()? == *value {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Whether two sequences produce equal elements in the same order.
///
/// # Errors
/// Propagates any traversal failure from either side.
pub fn seq_eq_impl<T>(left: &Seq<T>, right: &Seq<T>) -> Result<bool>
where
    T: Element + PartialEq,
{
    seq_eq_by_impl(left, right, |a, b| a == b)
}

/// Whether two sequences are equal element-wise per `eq`, in lockstep.
///
/// # Errors
/// Propagates any traversal failure from either side.
pub fn seq_eq_by_impl<T, F>(left: &Seq<T>, right: &Seq<T>, eq: F) -> Result<bool>
where
    T: Element,
    F: Fn(&T, &T) -> bool,
{
    let mut left = left.cursor();
    let mut right = right.cursor();
    loop {
        let left_more = left.has_next()?;
        let right_more = right.has_next()?;
        if left_more != right_more {
            return Ok(false);
        }
        if !left_more {
            return Ok(true);
        }
        if !eq(&left.next()?, &right.next()?) {
            return Ok(false);
        }
    }
}
