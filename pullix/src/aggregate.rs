// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Terminal operators: the points where a chain is actually evaluated.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use pullix_core::{Element, Seq};
use pullix_error::Result;
use pullix_ops::aggregate::{
    contains_impl, count_impl, max_by_impl, min_by_impl, seq_eq_by_impl, seq_eq_impl,
};
use pullix_ops::collect::{collect_impl, for_each_impl, to_map_impl, to_multimap_impl, to_vec_impl};
use pullix_ops::first_last::{first_impl, first_or_impl, last_impl, last_or_impl};
use pullix_ops::reduce::{fold_impl, reduce_impl};

/// Evaluating operators, available on every [`Seq`].
///
/// Each method drives a fresh cursor over the chain and propagates any
/// traversal error; aggregates over an empty sequence without a natural
/// identity (`first`, `last`, `reduce`, `min_by`, `max_by`) fail with an
/// exhaustion error.
pub trait AggregateExt<T: Element> {
    /// Number of elements.
    fn count(&self) -> Result<usize>;

    /// First element; exhaustion error when empty.
    fn first(&self) -> Result<T>;

    /// First element, or `default` when empty.
    fn first_or(&self, default: T) -> Result<T>;

    /// Last element; exhaustion error when empty.
    fn last(&self) -> Result<T>;

    /// Last element, or `default` when empty.
    fn last_or(&self, default: T) -> Result<T>;

    /// Fold the elements into `seed` with `fold`.
    fn fold<A, F>(&self, seed: A, fold: F) -> Result<A>
    where
        F: Fn(A, T) -> A;

    /// Fold the elements pairwise; exhaustion error when empty.
    fn reduce<F>(&self, fold: F) -> Result<T>
    where
        F: Fn(T, T) -> T;

    /// Smallest element by natural order; exhaustion error when empty.
    fn min(&self) -> Result<T>
    where
        T: Ord;

    /// Largest element by natural order; exhaustion error when empty.
    fn max(&self) -> Result<T>
    where
        T: Ord;

    /// Smallest element per `compare`; ties keep the earlier element.
    fn min_by<F>(&self, compare: F) -> Result<T>
    where
        F: Fn(&T, &T) -> Ordering;

    /// Largest element per `compare`; ties keep the earlier element.
    fn max_by<F>(&self, compare: F) -> Result<T>
    where
        F: Fn(&T, &T) -> Ordering;

    /// Whether any element equals `value`; stops at the first match.
    fn contains(&self, value: &T) -> Result<bool>
    where
        T: PartialEq;

    /// Element-wise equality with `other`, in lockstep.
    fn seq_eq(&self, other: &Seq<T>) -> Result<bool>
    where
        T: PartialEq;

    /// Element-wise equality with `other` per `eq`, in lockstep.
    fn seq_eq_by<F>(&self, other: &Seq<T>, eq: F) -> Result<bool>
    where
        F: Fn(&T, &T) -> bool;

    /// Collect the elements into a `Vec`.
    fn to_vec(&self) -> Result<Vec<T>>;

    /// Reduce into a mutable accumulator built by `seed`; `accumulate`
    /// mutates it in place for every element.
    fn collect<A, FS, FA>(&self, seed: FS, accumulate: FA) -> Result<A>
    where
        FS: FnOnce() -> A,
        FA: FnMut(&mut A, T);

    /// Collect into a map; later keys overwrite earlier ones.
    fn to_map<K, V, FK, FV>(&self, key: FK, value: FV) -> Result<HashMap<K, V>>
    where
        K: Hash + Eq,
        FK: Fn(&T) -> K,
        FV: Fn(T) -> V;

    /// Collect into a map of per-key `Vec`s, preserving per-key order.
    fn to_multimap<K, V, FK, FV>(&self, key: FK, value: FV) -> Result<HashMap<K, Vec<V>>>
    where
        K: Hash + Eq,
        FK: Fn(&T) -> K,
        FV: Fn(T) -> V;

    /// Run `action` for every element.
    fn for_each<F>(&self, action: F) -> Result<()>
    where
        F: FnMut(T);
}

impl<T: Element> AggregateExt<T> for Seq<T> {
    fn count(&self) -> Result<usize> {
        count_impl(self)
    }

    fn first(&self) -> Result<T> {
        first_impl(self)
    }

    fn first_or(&self, default: T) -> Result<T> {
        first_or_impl(self, default)
    }

    fn last(&self) -> Result<T> {
        last_impl(self)
    }

    fn last_or(&self, default: T) -> Result<T> {
        last_or_impl(self, default)
    }

    fn fold<A, F>(&self, seed: A, fold: F) -> Result<A>
    where
        F: Fn(A, T) -> A,
    {
        fold_impl(self, seed, fold)
    }

    fn reduce<F>(&self, fold: F) -> Result<T>
    where
        F: Fn(T, T) -> T,
    {
        reduce_impl(self, fold)
    }

    fn min(&self) -> Result<T>
    where
        T: Ord,
    {
        min_by_impl(self, T::cmp)
    }

    fn max(&self) -> Result<T>
    where
        T: Ord,
    {
        max_by_impl(self, T::cmp)
    }

    fn min_by<F>(&self, compare: F) -> Result<T>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        min_by_impl(self, compare)
    }

    fn max_by<F>(&self, compare: F) -> Result<T>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        max_by_impl(self, compare)
    }

    fn contains(&self, value: &T) -> Result<bool>
    where
        T: PartialEq,
    {
        contains_impl(self, value)
    }

    fn seq_eq(&self, other: &Seq<T>) -> Result<bool>
    where
        T: PartialEq,
    {
        seq_eq_impl(self, other)
    }

    fn seq_eq_by<F>(&self, other: &Seq<T>, eq: F) -> Result<bool>
    where
        F: Fn(&T, &T) -> bool,
    {
        seq_eq_by_impl(self, other, eq)
    }

    fn to_vec(&self) -> Result<Vec<T>> {
        to_vec_impl(self)
    }

    fn collect<A, FS, FA>(&self, seed: FS, accumulate: FA) -> Result<A>
    where
        FS: FnOnce() -> A,
        FA: FnMut(&mut A, T),
    {
        collect_impl(self, seed, accumulate)
    }

    fn to_map<K, V, FK, FV>(&self, key: FK, value: FV) -> Result<HashMap<K, V>>
    where
        K: Hash + Eq,
        FK: Fn(&T) -> K,
        FV: Fn(T) -> V,
    {
        to_map_impl(self, key, value)
    }

    fn to_multimap<K, V, FK, FV>(&self, key: FK, value: FV) -> Result<HashMap<K, Vec<V>>>
    where
        K: Hash + Eq,
        FK: Fn(&T) -> K,
        FV: Fn(T) -> V,
    {
        to_multimap_impl(self, key, value)
    }

    fn for_each<F>(&self, action: F) -> Result<()>
    where
        F: FnMut(T),
    {
        for_each_impl(self, action)
    }
}
