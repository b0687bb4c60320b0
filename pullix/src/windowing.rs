// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Grouping, windowing, buffering and replay.

use std::hash::Hash;

use pullix_core::{Element, Seq};
use pullix_windowing::buffer::{buffer_impl, buffer_split_impl, buffer_with_skip_impl};
use pullix_windowing::group_by::group_by_impl;
use pullix_windowing::replay::{replay_bounded_impl, replay_impl};
use pullix_windowing::window::{window_impl, window_with_skip_impl};
use pullix_windowing::{GroupedSeq, WindowSeq};

/// Structural operators, available on every [`Seq`].
///
/// Group and window sub-sequences share a single upstream cursor and are
/// single-use; see the `pullix-windowing` crate docs for the pull contract
/// they follow.
pub trait WindowingExt<T: Element> {
    /// Partition by `key`, keeping the elements themselves as values.
    #[must_use]
    fn group_by<K, FK>(&self, key: FK) -> Seq<GroupedSeq<K, T>>
    where
        K: Element + Hash + Eq,
        FK: Fn(&T) -> K + 'static;

    /// Partition by `key`, projecting each element through `value`.
    #[must_use]
    fn group_by_map<K, V, FK, FV>(&self, key: FK, value: FV) -> Seq<GroupedSeq<K, V>>
    where
        K: Element + Hash + Eq,
        V: Element,
        FK: Fn(&T) -> K + 'static,
        FV: Fn(T) -> V + 'static;

    /// Consecutive non-overlapping windows of `size` elements.
    ///
    /// # Panics
    /// Panics if `size` is zero.
    #[must_use]
    fn window(&self, size: usize) -> Seq<WindowSeq<T>>;

    /// Windows of up to `size` elements, a new one every `skip` elements.
    ///
    /// # Panics
    /// Panics if `size` or `skip` is zero.
    #[must_use]
    fn window_with_skip(&self, size: usize, skip: usize) -> Seq<WindowSeq<T>>;

    /// Consecutive non-overlapping lists of `size` elements.
    ///
    /// # Panics
    /// Panics if `size` is zero.
    #[must_use]
    fn buffer(&self, size: usize) -> Seq<Vec<T>>;

    /// Lists of up to `size` elements, a new one every `skip` elements.
    ///
    /// # Panics
    /// Panics if `size` or `skip` is zero.
    #[must_use]
    fn buffer_with_skip(&self, size: usize, skip: usize) -> Seq<Vec<T>>;

    /// Lists separated by elements matching `predicate`; separators are
    /// consumed.
    #[must_use]
    fn buffer_split<P>(&self, predicate: P) -> Seq<Vec<T>>
    where
        P: Fn(&T) -> bool + 'static;

    /// Traverse the upstream once, serving every cursor from a shared
    /// unbounded cache.
    #[must_use]
    fn replay(&self) -> Seq<T>;

    /// Like [`replay`](WindowingExt::replay), retaining only the most
    /// recent `max` elements.
    ///
    /// # Panics
    /// Panics if `max` is zero.
    #[must_use]
    fn replay_bounded(&self, max: usize) -> Seq<T>;
}

impl<T: Element> WindowingExt<T> for Seq<T> {
    fn group_by<K, FK>(&self, key: FK) -> Seq<GroupedSeq<K, T>>
    where
        K: Element + Hash + Eq,
        FK: Fn(&T) -> K + 'static,
    {
        group_by_impl(self, key, |value| value)
    }

    fn group_by_map<K, V, FK, FV>(&self, key: FK, value: FV) -> Seq<GroupedSeq<K, V>>
    where
        K: Element + Hash + Eq,
        V: Element,
        FK: Fn(&T) -> K + 'static,
        FV: Fn(T) -> V + 'static,
    {
        group_by_impl(self, key, value)
    }

    fn window(&self, size: usize) -> Seq<WindowSeq<T>> {
        window_impl(self, size)
    }

    fn window_with_skip(&self, size: usize, skip: usize) -> Seq<WindowSeq<T>> {
        window_with_skip_impl(self, size, skip)
    }

    fn buffer(&self, size: usize) -> Seq<Vec<T>> {
        buffer_impl(self, size)
    }

    fn buffer_with_skip(&self, size: usize, skip: usize) -> Seq<Vec<T>> {
        buffer_with_skip_impl(self, size, skip)
    }

    fn buffer_split<P>(&self, predicate: P) -> Seq<Vec<T>>
    where
        P: Fn(&T) -> bool + 'static,
    {
        buffer_split_impl(self, predicate)
    }

    fn replay(&self) -> Seq<T> {
        replay_impl(self)
    }

    fn replay_bounded(&self, max: usize) -> Seq<T> {
        replay_bounded_impl(self, max)
    }
}
