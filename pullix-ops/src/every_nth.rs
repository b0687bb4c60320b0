// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stride selection.

use pullix_core::{pull_cursor, Element, Seq, Step};

/// Emit the first element and every `stride`-th element after it.
///
/// # Panics
///
/// Panics if `stride` is 0.
pub fn every_nth_impl<T: Element>(source: &Seq<T>, stride: usize) -> Seq<T> {
    assert!(stride >= 1, "every_nth: stride must be at least 1");

    let source = source.clone();
    Seq::from_factory(move || {
        let mut upstream = source.cursor();
        let mut index = 0usize;
        pull_cursor(move || {
            while upstream.has_next()? {
                let value = upstream.next()?;
                let selected = index % stride == 0;
                index += 1;
                if selected {
                    return Ok(Step::Yield(value));
                }
            }
            Ok(Step::Done)
        })
    })
}
