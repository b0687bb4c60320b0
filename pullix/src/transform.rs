// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stateless per-element transformations.

use std::hash::Hash;

use pullix_core::{Element, Seq};
use pullix_ops::distinct::{
    distinct_impl, distinct_until_changed_by_impl, distinct_until_changed_impl,
};
use pullix_ops::every_nth::every_nth_impl;
use pullix_ops::filter::{filter_impl, remove_if_impl, retain_impl};
use pullix_ops::collect::to_vec_seq_impl;
use pullix_ops::map::map_impl;
use pullix_ops::scan::scan_impl;
use pullix_ops::skip_take::{skip_impl, skip_last_impl, take_impl, take_last_impl};

/// Lazy element-wise operators, available on every [`Seq`].
pub trait TransformExt<T: Element> {
    /// Transform each element with `mapper`.
    #[must_use]
    fn map<R, F>(&self, mapper: F) -> Seq<R>
    where
        R: Element,
        F: Fn(T) -> R + 'static;

    /// Keep only the elements satisfying `predicate`.
    #[must_use]
    fn filter<P>(&self, predicate: P) -> Seq<T>
    where
        P: Fn(&T) -> bool + 'static;

    /// Alias of [`filter`](TransformExt::filter).
    #[must_use]
    fn retain<P>(&self, predicate: P) -> Seq<T>
    where
        P: Fn(&T) -> bool + 'static;

    /// Drop the elements satisfying `predicate`.
    #[must_use]
    fn remove_if<P>(&self, predicate: P) -> Seq<T>
    where
        P: Fn(&T) -> bool + 'static;

    /// Drop the first `count` elements.
    #[must_use]
    fn skip(&self, count: usize) -> Seq<T>;

    /// Keep at most the first `count` elements, never pulling beyond them.
    #[must_use]
    fn take(&self, count: usize) -> Seq<T>;

    /// Drop the last `count` elements.
    #[must_use]
    fn skip_last(&self, count: usize) -> Seq<T>;

    /// Keep at most the last `count` elements.
    #[must_use]
    fn take_last(&self, count: usize) -> Seq<T>;

    /// Keep the first occurrence of each distinct element.
    #[must_use]
    fn distinct(&self) -> Seq<T>
    where
        T: Hash + Eq;

    /// Collapse runs of consecutive equal elements to their first element.
    #[must_use]
    fn distinct_until_changed(&self) -> Seq<T>
    where
        T: PartialEq;

    /// Like [`distinct_until_changed`](TransformExt::distinct_until_changed),
    /// comparing by a derived key.
    #[must_use]
    fn distinct_until_changed_by<K, F>(&self, key: F) -> Seq<T>
    where
        K: PartialEq + 'static,
        F: Fn(&T) -> K + 'static;

    /// Keep every `stride`-th element, starting with the first.
    ///
    /// # Panics
    /// Panics if `stride` is zero.
    #[must_use]
    fn every_nth(&self, stride: usize) -> Seq<T>;

    /// Emit the running accumulator of `fold` over the elements; the seed
    /// itself is not emitted.
    #[must_use]
    fn scan<A, F>(&self, seed: A, fold: F) -> Seq<A>
    where
        A: Element,
        F: Fn(A, T) -> A + 'static;

    /// A lazy single-element sequence holding this chain fully materialized,
    /// so the collected `Vec` can itself keep flowing through operators.
    /// Nothing is pulled until the result is traversed.
    #[must_use]
    fn to_vec_seq(&self) -> Seq<Vec<T>>;
}

impl<T: Element> TransformExt<T> for Seq<T> {
    fn map<R, F>(&self, mapper: F) -> Seq<R>
    where
        R: Element,
        F: Fn(T) -> R + 'static,
    {
        map_impl(self, mapper)
    }

    fn filter<P>(&self, predicate: P) -> Seq<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        filter_impl(self, predicate)
    }

    fn retain<P>(&self, predicate: P) -> Seq<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        retain_impl(self, predicate)
    }

    fn remove_if<P>(&self, predicate: P) -> Seq<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        remove_if_impl(self, predicate)
    }

    fn skip(&self, count: usize) -> Seq<T> {
        skip_impl(self, count)
    }

    fn take(&self, count: usize) -> Seq<T> {
        take_impl(self, count)
    }

    fn skip_last(&self, count: usize) -> Seq<T> {
        skip_last_impl(self, count)
    }

    fn take_last(&self, count: usize) -> Seq<T> {
        take_last_impl(self, count)
    }

    fn distinct(&self) -> Seq<T>
    where
        T: Hash + Eq,
    {
        distinct_impl(self)
    }

    fn distinct_until_changed(&self) -> Seq<T>
    where
        T: PartialEq,
    {
        distinct_until_changed_impl(self)
    }

    fn distinct_until_changed_by<K, F>(&self, key: F) -> Seq<T>
    where
        K: PartialEq + 'static,
        F: Fn(&T) -> K + 'static,
    {
        distinct_until_changed_by_impl(self, key)
    }

    fn every_nth(&self, stride: usize) -> Seq<T> {
        every_nth_impl(self, stride)
    }

    fn scan<A, F>(&self, seed: A, fold: F) -> Seq<A>
    where
        A: Element,
        F: Fn(A, T) -> A + 'static,
    {
        scan_impl(self, seed, fold)
    }

    fn to_vec_seq(&self) -> Seq<Vec<T>> {
        to_vec_seq_impl(self)
    }
}
