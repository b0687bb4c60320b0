// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Running accumulation.

use std::rc::Rc;

use pullix_core::{pull_cursor, Element, Seq, Step};

/// Emit the running accumulation of `source`.
///
/// Starting from `seed`, folds each upstream element into the accumulator
/// and emits the updated accumulator once per element. The seed itself is
/// not emitted; an empty upstream yields an empty sequence.
pub fn scan_impl<T, A, F>(source: &Seq<T>, seed: A, fold: F) -> Seq<A>
where
    T: Element,
    A: Element,
    F: Fn(A, T) -> A + 'static,
{
    let fold = Rc::new(fold);
    let source = source.clone();
    Seq::from_factory(move || {
        let fold = Rc::clone(&fold);
        let mut upstream = source.cursor();
        let mut accumulator = seed.clone();
        pull_cursor(move || {
            if !upstream.has_next()? {
                return Ok(Step::Done);
            }
            accumulator = fold(accumulator.clone(), upstream.next()?);
            Ok(Step::Yield(accumulator.clone()))
        })
    })
}
