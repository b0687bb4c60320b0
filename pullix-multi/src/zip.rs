// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lockstep pairing of sequences.

use std::rc::Rc;

use pullix_core::{pull_cursor, Cursor, Element, Seq, Step};

/// Pair elements of two sequences positionally.
///
/// Ends as soon as either side ends; the longer side is never advanced past
/// the pairing point.
pub fn zip_impl<A, B>(left: &Seq<A>, right: &Seq<B>) -> Seq<(A, B)>
where
    A: Element,
    B: Element,
{
    zip_with_impl(left, right, |a, b| (a, b))
}

/// Combine elements of two sequences positionally with `combine`.
pub fn zip_with_impl<A, B, R, F>(left: &Seq<A>, right: &Seq<B>, combine: F) -> Seq<R>
where
    A: Element,
    B: Element,
    R: Element,
    F: Fn(A, B) -> R + 'static,
{
    let combine = Rc::new(combine);
    let left = left.clone();
    let right = right.clone();
    Seq::from_factory(move || {
        let combine = Rc::clone(&combine);
        let mut first = left.cursor();
        let mut second = right.cursor();
        pull_cursor(move || {
            if !first.has_next()? || !second.has_next()? {
                return Ok(Step::Done);
            }
            let a = first.next()?;
            let b = second.next()?;
            Ok(Step::Yield(combine(a, b)))
        })
    })
}

/// Triple-wise positional pairing.
pub fn zip3_impl<A, B, C>(first: &Seq<A>, second: &Seq<B>, third: &Seq<C>) -> Seq<(A, B, C)>
where
    A: Element,
    B: Element,
    C: Element,
{
    let paired = zip_impl(first, second);
    zip_with_impl(&paired, third, |(a, b), c| (a, b, c))
}
