// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Ordered k-way merge by comparator.

use std::cmp::Ordering;
use std::rc::Rc;

use pullix_core::{pull_cursor, BoxCursor, Cursor, Element, Seq, SeqError, Step};

/// Merge already-sorted sequences into one sorted sequence.
///
/// Holds one lookahead slot per source. Each produced element is the
/// smallest lookahead per `compare`; only the source that supplied it is
/// advanced. Ties resolve toward the lowest-index source, which makes the
/// merge stable with respect to source order. Sources that complete are
/// marked done and excluded from further comparison; the merge completes
/// when every source is done.
///
/// The result is sorted only if every input is sorted under the same
/// comparator; the operator itself never reorders within a source.
pub fn ordered_merge_by_impl<T, F>(sources: Vec<Seq<T>>, compare: F) -> Seq<T>
where
    T: Element,
    F: Fn(&T, &T) -> Ordering + 'static,
{
    let compare = Rc::new(compare);
    let sources = Rc::new(sources);
    Seq::from_factory(move || {
        let compare = Rc::clone(&compare);
        let mut cursors: Vec<BoxCursor<T>> = sources.iter().map(Seq::cursor).collect();
        let mut lookahead: Vec<Option<T>> = cursors.iter().map(|_| None).collect();
        let mut done = vec![false; cursors.len()];
        pull_cursor(move || {
            // Fill empty lookahead slots from sources still live.
            for (index, cursor) in cursors.iter_mut().enumerate() {
                if lookahead[index].is_none() && !done[index] {
                    if cursor.has_next()? {
                        lookahead[index] = Some(cursor.next()?);
                    } else {
                        done[index] = true;
                    }
                }
            }

            let mut min_index = None;
            let mut min_value: Option<&T> = None;
            for (index, slot) in lookahead.iter().enumerate() {
                if let Some(value) = slot {
                    let replaces =
                        min_value.map_or(true, |current| compare(value, current) == Ordering::Less);
                    if replaces {
                        min_index = Some(index);
                        min_value = Some(value);
                    }
                }
            }

            match min_index {
                Some(index) => lookahead[index]
                    .take()
                    .map(Step::Yield)
                    .ok_or_else(|| SeqError::invalid_state("merge lookahead slot emptied")),
                None => Ok(Step::Done),
            }
        })
    })
}

/// Merge already-sorted sequences of `Ord` elements.
pub fn ordered_merge_impl<T>(sources: Vec<Seq<T>>) -> Seq<T>
where
    T: Element + Ord,
{
    ordered_merge_by_impl(sources, T::cmp)
}
