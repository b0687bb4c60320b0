// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sequences backed by caller-supplied storage.

use std::rc::Rc;

use pullix_core::{pull_cursor, Element, Seq, Step};
use pullix_error::{Result, SeqError};

/// A re-iterable sequence over `values`, in order.
///
/// The storage is shared between traversals; each cursor clones elements out
/// as it advances.
#[must_use]
pub fn from_vec<T: Element>(values: Vec<T>) -> Seq<T> {
    let len = values.len();
    slice_seq(Rc::from(values), 0, len)
}

/// A re-iterable sequence over `values[start..end]`.
///
/// # Errors
/// Fails at construction with [`SeqError::OutOfRange`] if the half-open
/// range does not lie within the storage.
pub fn from_slice<T: Element>(values: Vec<T>, start: usize, end: usize) -> Result<Seq<T>> {
    if start > end || end > values.len() {
        return Err(SeqError::out_of_range(start, end, values.len()));
    }
    Ok(slice_seq(Rc::from(values), start, end))
}

fn slice_seq<T: Element>(values: Rc<[T]>, start: usize, end: usize) -> Seq<T> {
    Seq::from_factory(move || {
        let values = Rc::clone(&values);
        let mut index = start;
        pull_cursor(move || {
            if index < end {
                let value = values[index].clone();
                index += 1;
                Ok(Step::Yield(value))
            } else {
                Ok(Step::Done)
            }
        })
    })
}
