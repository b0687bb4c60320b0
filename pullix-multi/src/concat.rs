// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Concatenation of sequences.

use std::rc::Rc;

use pullix_core::{pull_cursor, BoxCursor, Cursor, Element, Seq, Step};

use crate::flat_map::flatten_impl;

/// Concatenate a lazily produced sequence of sequences.
pub fn concat_impl<T: Element>(sources: &Seq<Seq<T>>) -> Seq<T> {
    flatten_impl(sources)
}

/// Concatenate a fixed collection of sequences in order.
pub fn concat_array_impl<T: Element>(sources: Vec<Seq<T>>) -> Seq<T> {
    let sources = Rc::new(sources);
    Seq::from_factory(move || {
        let sources = Rc::clone(&sources);
        let mut index = 0;
        let mut inner: Option<BoxCursor<T>> = None;
        pull_cursor(move || {
            loop {
                if let Some(cursor) = inner.as_mut() {
                    if cursor.has_next()? {
                        return Ok(Step::Yield(cursor.next()?));
                    }
                }
                inner = None;
                if index == sources.len() {
                    return Ok(Step::Done);
                }
                inner = Some(sources[index].cursor());
                index += 1;
            }
        })
    })
}
