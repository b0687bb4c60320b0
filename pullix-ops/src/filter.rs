// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Predicate-based selection.

use std::rc::Rc;

use pullix_core::{BoxCursor, Cursor, Element, Result, Seq, SeqError};

/// Keep only the elements of `source` satisfying `predicate`.
///
/// The cursor stages at most one accepted element between `has_next` and
/// `next` and forwards the removal capability upstream.
pub fn filter_impl<T, P>(source: &Seq<T>, predicate: P) -> Seq<T>
where
    T: Element,
    P: Fn(&T) -> bool + 'static,
{
    let predicate: Rc<P> = Rc::new(predicate);
    let source = source.clone();
    Seq::from_factory(move || {
        Box::new(FilterCursor {
            upstream: source.cursor(),
            predicate: Rc::clone(&predicate),
            staged: None,
            done: false,
        })
    })
}

/// Keep the elements satisfying `predicate` (alias of [`filter_impl`] under
/// the retain/remove naming pair).
pub fn retain_impl<T, P>(source: &Seq<T>, predicate: P) -> Seq<T>
where
    T: Element,
    P: Fn(&T) -> bool + 'static,
{
    filter_impl(source, predicate)
}

/// Drop the elements satisfying `predicate`.
pub fn remove_if_impl<T, P>(source: &Seq<T>, predicate: P) -> Seq<T>
where
    T: Element,
    P: Fn(&T) -> bool + 'static,
{
    filter_impl(source, move |value| !predicate(value))
}

struct FilterCursor<T, P> {
    upstream: BoxCursor<T>,
    predicate: Rc<P>,
    staged: Option<T>,
    done: bool,
}

impl<T, P> Cursor for FilterCursor<T, P>
where
    P: Fn(&T) -> bool,
{
    type Item = T;

    fn has_next(&mut self) -> Result<bool> {
        if self.staged.is_some() {
            return Ok(true);
        }
        if self.done {
            return Ok(false);
        }
        while self.upstream.has_next()? {
            let value = self.upstream.next()?;
            if (self.predicate)(&value) {
                self.staged = Some(value);
                return Ok(true);
            }
        }
        self.done = true;
        Ok(false)
    }

    fn next(&mut self) -> Result<T> {
        if !self.has_next()? {
            return Err(SeqError::exhausted());
        }
        self.staged
            .take()
            .ok_or_else(|| SeqError::invalid_state("staged value missing after has_next"))
    }

    fn remove(&mut self) -> Result<()> {
        self.upstream.remove()
    }
}
