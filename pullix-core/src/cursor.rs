// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The pull contract every Pullix traversal implements.

use pullix_error::{Result, SeqError};

/// A live, stateful, single-use traversal over a sequence.
///
/// # Contract
///
/// - [`has_next`](Cursor::has_next) is **idempotent**: calling it any number
///   of times without an intervening [`next`](Cursor::next) returns the same
///   answer and never advances the underlying state twice. It may perform
///   work (pulling upstream) to decide the answer the first time.
/// - [`next`](Cursor::next) returns the staged element, or fails with
///   [`SeqError::Exhausted`] when the traversal is complete. Callers are
///   expected to check `has_next` first in normal operation.
/// - Once a cursor has signalled completion, `has_next` keeps returning
///   `Ok(false)` without any further upstream interaction. This is what
///   prevents double-draining of upstreams shared by several sub-cursors.
/// - After a cursor has returned an error, it is in a safe terminal-like
///   state; re-pulling is not guaranteed to be meaningful.
///
/// Errors raised inside caller-supplied predicates, selectors or comparators
/// propagate unmodified (panics are never caught by any operator).
pub trait Cursor {
    /// The element type produced by this cursor.
    type Item;

    /// Report whether another element is available, staging it if needed.
    ///
    /// # Errors
    /// Propagates any failure encountered while advancing the upstream
    /// state machine (for example a generator `Fail` step).
    fn has_next(&mut self) -> Result<bool>;

    /// Consume and return the next element.
    ///
    /// # Errors
    /// Returns [`SeqError::Exhausted`] when the traversal is complete.
    fn next(&mut self) -> Result<Self::Item>;

    /// Request removal of the most recently returned element.
    ///
    /// This is an optional capability. Every read-only or derived cursor
    /// rejects it; operators that merely transform elements forward the
    /// request upstream ("removal pass-through").
    ///
    /// # Errors
    /// Returns [`SeqError::Unsupported`] unless the cursor opts in.
    fn remove(&mut self) -> Result<()> {
        Err(SeqError::unsupported("remove"))
    }
}

/// A boxed, type-erased cursor.
///
/// Operators compose through this alias so a [`Seq`](crate::Seq) can hold an
/// arbitrary chain without naming every intermediate cursor type.
pub type BoxCursor<T> = Box<dyn Cursor<Item = T>>;

impl<T> Cursor for BoxCursor<T> {
    type Item = T;

    fn has_next(&mut self) -> Result<bool> {
        (**self).has_next()
    }

    fn next(&mut self) -> Result<T> {
        (**self).next()
    }

    fn remove(&mut self) -> Result<()> {
        (**self).remove()
    }
}
