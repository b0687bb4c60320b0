// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pull-counting instrumentation for contract tests.

use std::cell::Cell;
use std::rc::Rc;

use pullix_core::{BoxCursor, Cursor, Element, Result, Seq};

/// Counters shared with the cursors of a [`tracked`] sequence.
#[derive(Clone, Default)]
pub struct PullStats {
    cursors: Rc<Cell<usize>>,
    has_next_calls: Rc<Cell<usize>>,
    next_calls: Rc<Cell<usize>>,
}

impl PullStats {
    /// Number of cursors realized over the tracked sequence.
    #[must_use]
    pub fn cursors(&self) -> usize {
        self.cursors.get()
    }

    /// Number of `has_next` probes forwarded to the tracked sequence.
    #[must_use]
    pub fn has_next_calls(&self) -> usize {
        self.has_next_calls.get()
    }

    /// Number of elements actually consumed from the tracked sequence.
    ///
    /// This is the "advance" count idempotence tests assert on: probing
    /// `has_next` repeatedly must not move it.
    #[must_use]
    pub fn next_calls(&self) -> usize {
        self.next_calls.get()
    }
}

struct TrackedCursor<T> {
    upstream: BoxCursor<T>,
    stats: PullStats,
}

impl<T> Cursor for TrackedCursor<T> {
    type Item = T;

    fn has_next(&mut self) -> Result<bool> {
        self.stats.has_next_calls.set(self.stats.has_next_calls.get() + 1);
        self.upstream.has_next()
    }

    fn next(&mut self) -> Result<T> {
        self.stats.next_calls.set(self.stats.next_calls.get() + 1);
        self.upstream.next()
    }

    fn remove(&mut self) -> Result<()> {
        self.upstream.remove()
    }
}

/// Wrap `source` so every traversal through the returned sequence is counted.
pub fn tracked<T: Element>(source: &Seq<T>) -> (Seq<T>, PullStats) {
    let stats = PullStats::default();
    let cursor_stats = stats.clone();
    let source = source.clone();
    let seq = Seq::from_factory(move || {
        cursor_stats.cursors.set(cursor_stats.cursors.get() + 1);
        Box::new(TrackedCursor {
            upstream: source.cursor(),
            stats: cursor_stats.clone(),
        })
    });
    (seq, stats)
}
