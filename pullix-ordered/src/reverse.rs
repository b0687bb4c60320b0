// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Reversal operator.

use pullix_core::{pull_cursor, Element, Seq, Step};

use crate::sort::drain;

/// Emit the elements of `source` in reverse order.
///
/// The upstream is fully drained on the first pull of each cursor; elements
/// are then popped from the back of the materialized buffer.
pub fn reverse_impl<T: Element>(source: &Seq<T>) -> Seq<T> {
    let source = source.clone();
    Seq::from_factory(move || {
        let mut upstream = source.cursor();
        let mut buffered: Option<Vec<T>> = None;
        pull_cursor(move || {
            let all = match buffered.as_mut() {
                Some(all) => all,
                None => buffered.insert(drain(&mut upstream)?),
            };
            match all.pop() {
                Some(value) => Ok(Step::Yield(value)),
                None => Ok(Step::Done),
            }
        })
    })
}
