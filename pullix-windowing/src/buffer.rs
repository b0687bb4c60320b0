// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Buffering operators that collect upstream runs into `Vec` elements.

use std::rc::Rc;

use pullix_core::{pull_cursor, Cursor, Element, RingQueue, Seq, Step};

/// Collect `source` into consecutive non-overlapping lists of `size`
/// elements each; the final list may be shorter. An empty upstream yields
/// no lists at all.
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn buffer_impl<T: Element>(source: &Seq<T>, size: usize) -> Seq<Vec<T>> {
    assert!(size >= 1, "buffer size must be at least 1");
    let source = source.clone();
    Seq::from_factory(move || {
        let mut upstream = source.cursor();
        pull_cursor(move || {
            let mut chunk = Vec::new();
            while chunk.len() < size && upstream.has_next()? {
                chunk.push(upstream.next()?);
            }
            if chunk.is_empty() {
                Ok(Step::Done)
            } else {
                Ok(Step::Yield(chunk))
            }
        })
    })
}

/// Collect `source` into lists of up to `size` elements, starting a new
/// list every `skip` elements.
///
/// * `skip == size` behaves like [`buffer_impl`].
/// * `skip > size` discards `skip - size` elements between lists.
/// * `skip < size` produces overlapping lists; shared elements are cloned
///   into every list that covers them. Lists still being filled when the
///   upstream ends are emitted short, longest first.
///
/// # Panics
///
/// Panics if `size` or `skip` is zero.
pub fn buffer_with_skip_impl<T: Element>(
    source: &Seq<T>,
    size: usize,
    skip: usize,
) -> Seq<Vec<T>> {
    assert!(size >= 1, "buffer size must be at least 1");
    assert!(skip >= 1, "buffer skip must be at least 1");
    if skip == size {
        return buffer_impl(source, size);
    }
    if skip > size {
        return buffer_with_gap(source, size, skip - size);
    }
    buffer_overlapping(source, size, skip)
}

/// `skip > size`: after each full (or final short) list, drop `gap`
/// upstream elements before starting the next one.
fn buffer_with_gap<T: Element>(source: &Seq<T>, size: usize, gap: usize) -> Seq<Vec<T>> {
    let source = source.clone();
    Seq::from_factory(move || {
        let mut upstream = source.cursor();
        let mut first = true;
        pull_cursor(move || {
            if !first {
                let mut dropped = 0;
                while dropped < gap && upstream.has_next()? {
                    upstream.next()?;
                    dropped += 1;
                }
            }
            first = false;
            let mut chunk = Vec::new();
            while chunk.len() < size && upstream.has_next()? {
                chunk.push(upstream.next()?);
            }
            if chunk.is_empty() {
                Ok(Step::Done)
            } else {
                Ok(Step::Yield(chunk))
            }
        })
    })
}

/// `skip < size`: keep every partially filled list in flight and fan each
/// upstream element out to all of them.
fn buffer_overlapping<T: Element>(source: &Seq<T>, size: usize, skip: usize) -> Seq<Vec<T>> {
    let source = source.clone();
    Seq::from_factory(move || {
        let mut upstream = source.cursor();
        let mut in_flight: RingQueue<Vec<T>> = RingQueue::new();
        let mut index: u64 = 0;
        pull_cursor(move || loop {
            // A list leaves the in-flight queue as soon as it is full;
            // lists are opened oldest-first, so the front fills first.
            if in_flight.peek().map_or(false, |front| front.len() == size) {
                let full = in_flight.pop().unwrap_or_default();
                return Ok(Step::Yield(full));
            }
            if !upstream.has_next()? {
                // Emit the remaining partial lists, longest first.
                return match in_flight.pop() {
                    Some(partial) => Ok(Step::Yield(partial)),
                    None => Ok(Step::Done),
                };
            }
            if index % skip as u64 == 0 {
                in_flight.push(Vec::new());
            }
            let element = upstream.next()?;
            index += 1;
            in_flight.for_each_mut(|chunk| chunk.push(element.clone()));
        })
    })
}

/// Split `source` into lists separated by elements matching `predicate`.
///
/// Separator elements are consumed and appear in no list. Two adjacent
/// separators produce an empty list between them, as does a leading
/// separator; a trailing separator produces no final empty list.
pub fn buffer_split_impl<T, P>(source: &Seq<T>, predicate: P) -> Seq<Vec<T>>
where
    T: Element,
    P: Fn(&T) -> bool + 'static,
{
    let predicate = Rc::new(predicate);
    let source = source.clone();
    Seq::from_factory(move || {
        let mut upstream = source.cursor();
        let predicate = Rc::clone(&predicate);
        let mut done = false;
        pull_cursor(move || {
            if done {
                return Ok(Step::Done);
            }
            let mut chunk = Vec::new();
            loop {
                if !upstream.has_next()? {
                    done = true;
                    // No trailing empty partition after a final separator.
                    return if chunk.is_empty() {
                        Ok(Step::Done)
                    } else {
                        Ok(Step::Yield(chunk))
                    };
                }
                let element = upstream.next()?;
                if predicate(&element) {
                    return Ok(Step::Yield(chunk));
                }
                chunk.push(element);
            }
        })
    })
}
