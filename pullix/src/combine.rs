// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Operators combining several sequences.

use std::hash::Hash;

use pullix_core::{Element, Seq};
use pullix_multi::concat::concat_impl;
use pullix_multi::flat_map::{flat_map_impl, flatten_impl};
use pullix_multi::set_ops::{except_impl, intersect_impl, union_impl};
use pullix_multi::zip::{zip3_impl, zip_impl, zip_with_impl};

/// Multi-source operators, available on every [`Seq`].
pub trait CombineExt<T: Element> {
    /// Map each element to a sequence and concatenate the results.
    #[must_use]
    fn flat_map<R, F>(&self, mapper: F) -> Seq<R>
    where
        R: Element,
        F: Fn(T) -> Seq<R> + 'static;

    /// Pair elements with `other` positionally; ends at the shorter side.
    #[must_use]
    fn zip<B: Element>(&self, other: &Seq<B>) -> Seq<(T, B)>;

    /// Combine elements with `other` positionally through `combine`.
    #[must_use]
    fn zip_with<B, R, F>(&self, other: &Seq<B>, combine: F) -> Seq<R>
    where
        B: Element,
        R: Element,
        F: Fn(T, B) -> R + 'static;

    /// Triple-wise [`zip`](CombineExt::zip).
    #[must_use]
    fn zip3<B: Element, C: Element>(&self, second: &Seq<B>, third: &Seq<C>) -> Seq<(T, B, C)>;

    /// Distinct elements of both sequences, `self` first, in
    /// first-appearance order.
    #[must_use]
    fn union(&self, other: &Seq<T>) -> Seq<T>
    where
        T: Hash + Eq;

    /// Distinct elements of `self` that also occur in `other`.
    #[must_use]
    fn intersect(&self, other: &Seq<T>) -> Seq<T>
    where
        T: Hash + Eq;

    /// Distinct elements of `self` that do not occur in `other`.
    #[must_use]
    fn except(&self, other: &Seq<T>) -> Seq<T>
    where
        T: Hash + Eq;
}

impl<T: Element> CombineExt<T> for Seq<T> {
    fn flat_map<R, F>(&self, mapper: F) -> Seq<R>
    where
        R: Element,
        F: Fn(T) -> Seq<R> + 'static,
    {
        flat_map_impl(self, mapper)
    }

    fn zip<B: Element>(&self, other: &Seq<B>) -> Seq<(T, B)> {
        zip_impl(self, other)
    }

    fn zip_with<B, R, F>(&self, other: &Seq<B>, combine: F) -> Seq<R>
    where
        B: Element,
        R: Element,
        F: Fn(T, B) -> R + 'static,
    {
        zip_with_impl(self, other, combine)
    }

    fn zip3<B: Element, C: Element>(&self, second: &Seq<B>, third: &Seq<C>) -> Seq<(T, B, C)> {
        zip3_impl(self, second, third)
    }

    fn union(&self, other: &Seq<T>) -> Seq<T>
    where
        T: Hash + Eq,
    {
        union_impl(self, other)
    }

    fn intersect(&self, other: &Seq<T>) -> Seq<T>
    where
        T: Hash + Eq,
    {
        intersect_impl(self, other)
    }

    fn except(&self, other: &Seq<T>) -> Seq<T>
    where
        T: Hash + Eq,
    {
        except_impl(self, other)
    }
}

/// Operators on sequences of sequences.
pub trait NestedExt<T: Element> {
    /// Concatenate the inner sequences in order.
    #[must_use]
    fn flatten(&self) -> Seq<T>;

    /// Alias of [`flatten`](NestedExt::flatten).
    #[must_use]
    fn concat(&self) -> Seq<T>;
}

impl<T: Element> NestedExt<T> for Seq<Seq<T>> {
    fn flatten(&self) -> Seq<T> {
        flatten_impl(self)
    }

    fn concat(&self) -> Seq<T> {
        concat_impl(self)
    }
}
