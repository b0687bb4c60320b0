// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The immutable, re-iterable sequence description.

use std::marker::PhantomData;
use std::rc::Rc;

use crate::cursor::BoxCursor;
use crate::pull_cursor::{pull_cursor, Step};

/// Alias bound for types that can flow through a sequence.
///
/// Elements must be cloneable because re-iterable sources, the scalar fast
/// path, replay caches and overlapping-window fan-out all hand the same
/// value to more than one consumer.
pub trait Element: Clone + 'static {}

impl<T: Clone + 'static> Element for T {}

/// Capability behind a [`Seq`]: produce a fresh traversal on demand.
pub trait SeqCore<T> {
    /// Realize a new cursor over this sequence.
    fn cursor(&self) -> BoxCursor<T>;

    /// Probe for the resolved-scalar fast path.
    ///
    /// Returns `Some(value)` only when this sequence is statically known to
    /// resolve to exactly one precomputed value, letting consumers such as
    /// `flat_map`, `first` and `last` skip cursor construction entirely.
    fn scalar(&self) -> Option<T> {
        None
    }
}

/// An immutable, re-iterable description of a lazy computation.
///
/// A `Seq` owns its upstream sequence(s) and operator parameters and is never
/// mutated after construction; cloning is a cheap handle copy. Each call to
/// [`cursor`](Seq::cursor) realizes a fresh, independent traversal unless the
/// operator behind it explicitly shares state (replay, group/window drivers).
pub struct Seq<T: Element> {
    core: Rc<dyn SeqCore<T>>,
}

impl<T: Element> std::fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seq").finish_non_exhaustive()
    }
}

impl<T: Element> Clone for Seq<T> {
    fn clone(&self) -> Self {
        Self {
            core: Rc::clone(&self.core),
        }
    }
}

impl<T: Element> Seq<T> {
    /// Wrap an existing core implementation.
    pub fn from_core(core: Rc<dyn SeqCore<T>>) -> Self {
        Self { core }
    }

    /// Build a sequence from a cursor factory.
    ///
    /// The factory runs once per traversal; this is how every composed
    /// operator re-realizes its upstream chain.
    pub fn from_factory<F>(factory: F) -> Self
    where
        F: Fn() -> BoxCursor<T> + 'static,
    {
        Self::from_core(Rc::new(FactorySeq {
            factory,
            marker: PhantomData,
        }))
    }

    /// The sequence holding exactly `value`.
    ///
    /// This is the canonical resolved-scalar sequence: consumers that probe
    /// [`scalar`](Seq::scalar) can read the value without a cursor.
    pub fn just(value: T) -> Self {
        Self::from_core(Rc::new(ScalarSeq { value }))
    }

    /// The sequence with no elements.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_core(Rc::new(EmptySeq {
            marker: PhantomData,
        }))
    }

    /// Realize a fresh cursor over this sequence.
    #[must_use]
    pub fn cursor(&self) -> BoxCursor<T> {
        self.core.cursor()
    }

    /// Probe the resolved-scalar fast path. See [`SeqCore::scalar`].
    #[must_use]
    pub fn scalar(&self) -> Option<T> {
        self.core.scalar()
    }

    /// Opaque-wrap this sequence.
    ///
    /// The wrapper forwards traversal but reports no scalar, blocking
    /// downstream type-punning against the fast path.
    #[must_use]
    pub fn hide(&self) -> Self {
        let inner = self.clone();
        Self::from_factory(move || inner.cursor())
    }
}

struct FactorySeq<T, F> {
    factory: F,
    marker: PhantomData<T>,
}

impl<T, F> SeqCore<T> for FactorySeq<T, F>
where
    F: Fn() -> BoxCursor<T>,
{
    fn cursor(&self) -> BoxCursor<T> {
        (self.factory)()
    }
}

struct ScalarSeq<T> {
    value: T,
}

impl<T: Element> SeqCore<T> for ScalarSeq<T> {
    fn cursor(&self) -> BoxCursor<T> {
        let mut staged = Some(self.value.clone());
        pull_cursor(move || {
            Ok(match staged.take() {
                Some(value) => Step::Yield(value),
                None => Step::Done,
            })
        })
    }

    fn scalar(&self) -> Option<T> {
        Some(self.value.clone())
    }
}

struct EmptySeq<T> {
    marker: PhantomData<T>,
}

impl<T: Element> SeqCore<T> for EmptySeq<T> {
    fn cursor(&self) -> BoxCursor<T> {
        pull_cursor(|| Ok(Step::Done))
    }
}
