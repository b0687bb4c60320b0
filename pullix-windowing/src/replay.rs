// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Replay operators: pull the upstream once, serve every cursor from a
//! shared cache.

use std::cell::RefCell;
use std::rc::Rc;

use pullix_core::logging::warn;
use pullix_core::{pull_cursor, BoxCursor, Cursor, Element, RingQueue, Seq, Step};
use pullix_error::Result;

/// Cache every element of `source` as it is first pulled and serve all
/// cursors, at any pace, from that cache.
///
/// The upstream cursor is created on the first pull and traversed exactly
/// once no matter how many cursors the returned sequence hands out. The
/// cache is unbounded; see [`replay_bounded_impl`] for a capped variant.
pub fn replay_impl<T: Element>(source: &Seq<T>) -> Seq<T> {
    let state = Rc::new(RefCell::new(ReplayState {
        source: source.clone(),
        upstream: None,
        cache: Vec::new(),
        done: false,
    }));
    Seq::from_factory(move || {
        let state = Rc::clone(&state);
        let mut position = 0usize;
        pull_cursor(move || {
            let mut state = state.borrow_mut();
            if position < state.cache.len() {
                let value = state.cache[position].clone();
                position += 1;
                return Ok(Step::Yield(value));
            }
            if state.fill_one()? {
                let value = state.cache[position].clone();
                position += 1;
                Ok(Step::Yield(value))
            } else {
                Ok(Step::Done)
            }
        })
    })
}

/// Like [`replay_impl`], but retain only the most recent `max` elements.
///
/// A cursor that falls more than `max` elements behind the furthest reader
/// skips forward to the oldest retained element; the gap is logged, not an
/// error.
///
/// # Panics
///
/// Panics if `max` is zero.
pub fn replay_bounded_impl<T: Element>(source: &Seq<T>, max: usize) -> Seq<T> {
    assert!(max >= 1, "replay capacity must be at least 1");
    let state = Rc::new(RefCell::new(BoundedState {
        source: source.clone(),
        upstream: None,
        buf: RingQueue::new(),
        start: 0,
        total: 0,
        max,
        done: false,
    }));
    Seq::from_factory(move || {
        let state = Rc::clone(&state);
        let mut position = 0u64;
        pull_cursor(move || {
            let mut state = state.borrow_mut();
            if position < state.start {
                warn!(
                    "bounded replay: cursor lagged {} elements behind the retained range",
                    state.start - position
                );
                position = state.start;
            }
            if position == state.total && !state.fill_one()? {
                return Ok(Step::Done);
            }
            let offset = (position - state.start) as usize;
            match state.buf.get(offset) {
                Some(value) => {
                    let value = value.clone();
                    position += 1;
                    Ok(Step::Yield(value))
                }
                None => Ok(Step::Done),
            }
        })
    })
}

struct ReplayState<T: Element> {
    source: Seq<T>,
    upstream: Option<BoxCursor<T>>,
    cache: Vec<T>,
    done: bool,
}

impl<T: Element> ReplayState<T> {
    /// Pull one more upstream element into the cache; false once exhausted.
    fn fill_one(&mut self) -> Result<bool> {
        if self.done {
            return Ok(false);
        }
        if self.upstream.is_none() {
            self.upstream = Some(self.source.cursor());
        }
        let upstream = match self.upstream.as_mut() {
            Some(cursor) => cursor,
            None => return Ok(false),
        };
        if upstream.has_next()? {
            let value = upstream.next()?;
            self.cache.push(value);
            Ok(true)
        } else {
            self.done = true;
            Ok(false)
        }
    }
}

struct BoundedState<T: Element> {
    source: Seq<T>,
    upstream: Option<BoxCursor<T>>,
    buf: RingQueue<T>,
    /// Absolute index of the oldest retained element.
    start: u64,
    /// Absolute index one past the newest cached element.
    total: u64,
    max: usize,
    done: bool,
}

impl<T: Element> BoundedState<T> {
    fn fill_one(&mut self) -> Result<bool> {
        if self.done {
            return Ok(false);
        }
        if self.upstream.is_none() {
            self.upstream = Some(self.source.cursor());
        }
        let upstream = match self.upstream.as_mut() {
            Some(cursor) => cursor,
            None => return Ok(false),
        };
        if upstream.has_next()? {
            let value = upstream.next()?;
            if self.buf.len() == self.max {
                self.buf.pop();
                self.start += 1;
            }
            self.buf.push(value);
            self.total += 1;
            Ok(true)
        } else {
            self.done = true;
            Ok(false)
        }
    }
}
