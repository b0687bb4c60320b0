// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Order-changing operators.

use std::cmp::Ordering;

use pullix_core::{Element, Seq};
use pullix_ordered::{
    reverse_impl, sorted_by_impl, sorted_by_key_impl, sorted_impl, Direction,
};

/// Sorting and reversal, available on every [`Seq`].
///
/// These operators materialize the upstream on the first pull of each
/// cursor; composing them stays free.
pub trait OrderingExt<T: Element> {
    /// Stable sort by natural order.
    #[must_use]
    fn sorted(&self) -> Seq<T>
    where
        T: Ord;

    /// Stable sort by `compare`.
    #[must_use]
    fn sorted_by<F>(&self, compare: F) -> Seq<T>
    where
        F: Fn(&T, &T) -> Ordering + 'static;

    /// Stable sort by the projection `key`, ascending or descending.
    #[must_use]
    fn sorted_by_key<K, F>(&self, key: F, direction: Direction) -> Seq<T>
    where
        K: Ord,
        F: Fn(&T) -> K + 'static;

    /// Elements in reverse order.
    #[must_use]
    fn reverse(&self) -> Seq<T>;
}

impl<T: Element> OrderingExt<T> for Seq<T> {
    fn sorted(&self) -> Seq<T>
    where
        T: Ord,
    {
        sorted_impl(self)
    }

    fn sorted_by<F>(&self, compare: F) -> Seq<T>
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        sorted_by_impl(self, compare)
    }

    fn sorted_by_key<K, F>(&self, key: F, direction: Direction) -> Seq<T>
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        sorted_by_key_impl(self, key, direction)
    }

    fn reverse(&self) -> Seq<T> {
        reverse_impl(self)
    }
}
