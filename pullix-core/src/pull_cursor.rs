// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The generic stateful pull adapter behind most Pullix operators.

use crate::cursor::{BoxCursor, Cursor};
use pullix_error::{Result, SeqError};

/// One outcome of advancing an operator's state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<T> {
    /// The state machine produced an element.
    Yield(T),
    /// The state machine is finished; no further elements will be produced.
    Done,
}

/// Adapter that turns an "advance" closure into a contract-correct [`Cursor`].
///
/// The closure is invoked at most once per produced element. `PullCursor`
/// takes care of the bookkeeping every stateful operator needs:
///
/// - caches one staged value between `has_next` and `next`, so repeated
///   `has_next` calls never advance the state machine twice
/// - latches a terminal flag after [`Step::Done`] or an error, so the
///   closure is never called again and shared upstreams are not re-drained
///
/// Most operators are expressed as a closure over their upstream cursor and
/// working state, handed to [`pull_cursor`]. Operators that need the removal
/// pass-through implement [`Cursor`] directly instead, since the closure
/// hides the upstream.
pub struct PullCursor<T, F> {
    advance: F,
    staged: Option<T>,
    done: bool,
}

impl<T, F> PullCursor<T, F>
where
    F: FnMut() -> Result<Step<T>>,
{
    /// Wrap an advance closure.
    pub fn new(advance: F) -> Self {
        Self {
            advance,
            staged: None,
            done: false,
        }
    }
}

impl<T, F> Cursor for PullCursor<T, F>
where
    F: FnMut() -> Result<Step<T>>,
{
    type Item = T;

    fn has_next(&mut self) -> Result<bool> {
        if self.staged.is_some() {
            return Ok(true);
        }
        if self.done {
            return Ok(false);
        }
        match (self.advance)() {
            Ok(Step::Yield(value)) => {
                self.staged = Some(value);
                Ok(true)
            }
            Ok(Step::Done) => {
                self.done = true;
                Ok(false)
            }
            Err(error) => {
                self.done = true;
                Err(error)
            }
        }
    }

    fn next(&mut self) -> Result<T> {
        if !self.has_next()? {
            return Err(SeqError::exhausted());
        }
        self.staged
            .take()
            .ok_or_else(|| SeqError::invalid_state("staged value missing after has_next"))
    }
}

/// Box an advance closure as a [`BoxCursor`].
pub fn pull_cursor<T, F>(advance: F) -> BoxCursor<T>
where
    T: 'static,
    F: FnMut() -> Result<Step<T>> + 'static,
{
    Box::new(PullCursor::new(advance))
}
