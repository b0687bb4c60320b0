// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sequences wrapping caller-supplied iterables.

use pullix_core::{pull_cursor, Element, Seq, Step};

/// Wrap a re-invocable iterable as a sequence.
///
/// `factory` runs once per traversal and hands back anything iterable, so
/// the returned sequence stays re-iterable even though a single iterator is
/// single-use. A sequence that already exists needs no wrapping; cloning its
/// handle is the identity.
///
/// # Examples
///
/// ```
/// use pullix_core::Cursor;
/// use pullix_sources::from_iter;
///
/// let seq = from_iter(|| 1..=3);
/// let mut cursor = seq.cursor();
/// assert_eq!(cursor.next().unwrap(), 1);
/// assert_eq!(cursor.next().unwrap(), 2);
/// assert_eq!(cursor.next().unwrap(), 3);
/// assert!(!cursor.has_next().unwrap());
/// ```
#[must_use]
pub fn from_iter<T, I, F>(factory: F) -> Seq<T>
where
    T: Element,
    I: IntoIterator<Item = T>,
    I::IntoIter: 'static,
    F: Fn() -> I + 'static,
{
    Seq::from_factory(move || {
        let mut iter = factory().into_iter();
        pull_cursor(move || match iter.next() {
            Some(value) => Ok(Step::Yield(value)),
            None => Ok(Step::Done),
        })
    })
}
