// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Assertion and draining helpers built on the raw cursor contract.

use std::fmt::Debug;

use pullix_core::{Cursor, Element, Seq};
use pullix_error::Result;

/// Drain a sequence into a `Vec`, propagating any traversal error.
pub fn try_collect<T: Element>(seq: &Seq<T>) -> Result<Vec<T>> {
    let mut cursor = seq.cursor();
    let mut out = Vec::new();
    while cursor.has_next()? {
        out.push(cursor.next()?);
    }
    Ok(out)
}

/// Drain a sequence into a `Vec`.
///
/// # Panics
/// Panics if any pull fails; tests that expect errors use [`try_collect`].
pub fn collect<T: Element>(seq: &Seq<T>) -> Vec<T> {
    try_collect(seq).expect("sequence traversal failed")
}

/// Assert that `seq` produces exactly `expected`, in order.
pub fn assert_elements<T>(seq: &Seq<T>, expected: &[T])
where
    T: Element + PartialEq + Debug,
{
    assert_eq!(collect(seq), expected);
}
