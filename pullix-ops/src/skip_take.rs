// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prefix and suffix trimming.

use pullix_core::{pull_cursor, Element, RingQueue, Seq, Step};

/// Drop the first `count` elements of `source`.
///
/// The prefix is discarded lazily, on the first pull of the returned
/// sequence, not at composition time.
pub fn skip_impl<T: Element>(source: &Seq<T>, count: usize) -> Seq<T> {
    let source = source.clone();
    Seq::from_factory(move || {
        let mut upstream = source.cursor();
        let mut skipped = false;
        pull_cursor(move || {
            if !skipped {
                skipped = true;
                for _ in 0..count {
                    if !upstream.has_next()? {
                        return Ok(Step::Done);
                    }
                    upstream.next()?;
                }
            }
            if upstream.has_next()? {
                Ok(Step::Yield(upstream.next()?))
            } else {
                Ok(Step::Done)
            }
        })
    })
}

/// Keep at most the first `count` elements of `source`.
///
/// Exactly `min(count, |source|)` upstream elements are pulled; the upstream
/// is never advanced past the cut-off.
pub fn take_impl<T: Element>(source: &Seq<T>, count: usize) -> Seq<T> {
    let source = source.clone();
    Seq::from_factory(move || {
        let mut upstream = source.cursor();
        let mut remaining = count;
        pull_cursor(move || {
            if remaining == 0 || !upstream.has_next()? {
                return Ok(Step::Done);
            }
            remaining -= 1;
            Ok(Step::Yield(upstream.next()?))
        })
    })
}

/// Drop the last `count` elements of `source`.
///
/// Maintains a delay line of `count` elements: a value is released only once
/// `count` further elements have been seen behind it, so nothing from the
/// trailing suffix ever escapes.
pub fn skip_last_impl<T: Element>(source: &Seq<T>, count: usize) -> Seq<T> {
    let source = source.clone();
    Seq::from_factory(move || {
        let mut upstream = source.cursor();
        let mut pending = RingQueue::new();
        pull_cursor(move || {
            while pending.len() <= count {
                if !upstream.has_next()? {
                    return Ok(Step::Done);
                }
                pending.push(upstream.next()?);
            }
            Ok(match pending.pop() {
                Some(value) => Step::Yield(value),
                None => Step::Done,
            })
        })
    })
}

/// Keep only the last `count` elements of `source`.
///
/// Forces a full upstream drain on the first pull, holding a bounded
/// lookback of at most `count` elements while draining.
pub fn take_last_impl<T: Element>(source: &Seq<T>, count: usize) -> Seq<T> {
    let source = source.clone();
    Seq::from_factory(move || {
        let mut upstream = source.cursor();
        let mut tail = RingQueue::new();
        let mut drained = false;
        pull_cursor(move || {
            if !drained {
                drained = true;
                while upstream.has_next()? {
                    tail.push(upstream.next()?);
                    if tail.len() > count {
                        tail.pop();
                    }
                }
            }
            Ok(match tail.pop() {
                Some(value) => Step::Yield(value),
                None => Step::Done,
            })
        })
    })
}
