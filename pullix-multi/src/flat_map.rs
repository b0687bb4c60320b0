// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Flattening of nested sequences.

use std::rc::Rc;

use pullix_core::{pull_cursor, BoxCursor, Cursor, Element, Seq, Step};

/// Map each element to a sequence and concatenate the results in order.
///
/// The cursor holds at most one live inner cursor. Inner sequences that
/// resolve to a single precomputed scalar are emitted directly, without
/// constructing an inner cursor at all - the common map-one-to-one case.
/// Empty inner sequences are skipped transparently, never surfaced as gaps.
pub fn flat_map_impl<T, R, F>(source: &Seq<T>, mapper: F) -> Seq<R>
where
    T: Element,
    R: Element,
    F: Fn(T) -> Seq<R> + 'static,
{
    let mapper = Rc::new(mapper);
    let source = source.clone();
    Seq::from_factory(move || {
        let mapper = Rc::clone(&mapper);
        let mut outer = source.cursor();
        let mut inner: Option<BoxCursor<R>> = None;
        pull_cursor(move || {
            loop {
                if let Some(cursor) = inner.as_mut() {
                    if cursor.has_next()? {
                        return Ok(Step::Yield(cursor.next()?));
                    }
                }
                inner = None;
                if !outer.has_next()? {
                    return Ok(Step::Done);
                }
                let produced = mapper(outer.next()?);
                // Resolved-scalar fast path: no cursor allocation.
                if let Some(value) = produced.scalar() {
                    return Ok(Step::Yield(value));
                }
                inner = Some(produced.cursor());
            }
        })
    })
}

/// Concatenate a sequence of sequences in order.
pub fn flatten_impl<T: Element>(source: &Seq<Seq<T>>) -> Seq<T> {
    flat_map_impl(source, |inner| inner)
}
