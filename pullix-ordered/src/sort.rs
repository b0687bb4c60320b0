// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sorting operators.

use std::cmp::Ordering;
use std::rc::Rc;
use std::vec::IntoIter;

use pullix_core::{pull_cursor, BoxCursor, Cursor, Element, Seq, Step};
use pullix_error::Result;

/// Sort direction for [`sorted_by_key_impl`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Emit the elements of `source` sorted by their natural order.
///
/// The sort is stable: equal elements keep their upstream order.
pub fn sorted_impl<T: Element + Ord>(source: &Seq<T>) -> Seq<T> {
    sorted_by_impl(source, T::cmp)
}

/// Emit the elements of `source` sorted by `compare` (stable).
///
/// The upstream is fully drained on the first pull of each cursor.
pub fn sorted_by_impl<T, F>(source: &Seq<T>, compare: F) -> Seq<T>
where
    T: Element,
    F: Fn(&T, &T) -> Ordering + 'static,
{
    let compare = Rc::new(compare);
    let source = source.clone();
    Seq::from_factory(move || {
        let mut upstream = source.cursor();
        let compare = Rc::clone(&compare);
        let mut drained: Option<IntoIter<T>> = None;
        pull_cursor(move || {
            let iter = match drained.as_mut() {
                Some(iter) => iter,
                None => {
                    let mut all = drain(&mut upstream)?;
                    all.sort_by(|a, b| compare(a, b));
                    drained.insert(all.into_iter())
                }
            };
            match iter.next() {
                Some(value) => Ok(Step::Yield(value)),
                None => Ok(Step::Done),
            }
        })
    })
}

/// Emit the elements of `source` sorted by the projection `key`, in the
/// given [`Direction`] (stable in both directions).
pub fn sorted_by_key_impl<T, K, F>(source: &Seq<T>, key: F, direction: Direction) -> Seq<T>
where
    T: Element,
    K: Ord,
    F: Fn(&T) -> K + 'static,
{
    sorted_by_impl(source, move |a, b| {
        let ordering = key(a).cmp(&key(b));
        match direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    })
}

pub(crate) fn drain<T>(upstream: &mut BoxCursor<T>) -> Result<Vec<T>> {
    let mut all = Vec::new();
    while upstream.has_next()? {
        all.push(upstream.next()?);
    }
    Ok(all)
}
