// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Repeated-value sequences.

use pullix_core::{pull_cursor, Element, Seq, Step};

/// `value`, repeated exactly `count` times.
#[must_use]
pub fn repeat<T: Element>(value: T, count: usize) -> Seq<T> {
    Seq::from_factory(move || {
        let value = value.clone();
        let mut remaining = count;
        pull_cursor(move || {
            if remaining > 0 {
                remaining -= 1;
                Ok(Step::Yield(value.clone()))
            } else {
                Ok(Step::Done)
            }
        })
    })
}

/// `value`, repeated without an upper bound.
///
/// Consumers are expected to bound the traversal themselves (`take`, `zip`,
/// a window, ...); the cursor never signals completion.
#[must_use]
pub fn repeat_forever<T: Element>(value: T) -> Seq<T> {
    Seq::from_factory(move || {
        let value = value.clone();
        pull_cursor(move || Ok(Step::Yield(value.clone())))
    })
}
