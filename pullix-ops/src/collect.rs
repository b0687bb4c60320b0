// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Materialization into collections and maps.

use std::collections::HashMap;
use std::hash::Hash;

use pullix_core::{pull_cursor, Cursor, Element, Seq, Step};
use pullix_error::Result;

/// Materialize `source` into a `Vec`, in order.
///
/// # Errors
/// Propagates any traversal failure.
pub fn to_vec_impl<T: Element>(source: &Seq<T>) -> Result<Vec<T>> {
    let mut cursor = source.cursor();
    let mut out = Vec::new();
    while cursor.has_next()? {
        out.push(cursor.next()?);
    }
    Ok(out)
}

/// A lazy single-element sequence holding `source` fully materialized.
///
/// Nothing is pulled until the result itself is traversed; the first pull
/// drains the whole upstream and yields it as one `Vec`. An empty upstream
/// still yields one (empty) `Vec`. Upstream traversal failures surface on
/// that first pull.
#[must_use]
pub fn to_vec_seq_impl<T: Element>(source: &Seq<T>) -> Seq<Vec<T>> {
    let source = source.clone();
    Seq::from_factory(move || {
        let source = source.clone();
        let mut emitted = false;
        pull_cursor(move || {
            if emitted {
                return Ok(Step::Done);
            }
            emitted = true;
            Ok(Step::Yield(to_vec_impl(&source)?))
        })
    })
}

/// Reduce `source` into a mutable accumulator built by `seed`.
///
/// `accumulate` receives the accumulator by mutable reference, so
/// containers grow in place instead of being moved through every step as
/// [`fold`](crate::reduce::fold_impl) does.
///
/// # Errors
/// Propagates any traversal failure.
pub fn collect_impl<T, A, FS, FA>(source: &Seq<T>, seed: FS, mut accumulate: FA) -> Result<A>
where
    T: Element,
    FS: FnOnce() -> A,
    FA: FnMut(&mut A, T),
{
    let mut cursor = source.cursor();
    let mut acc = seed();
    while cursor.has_next()? {
        accumulate(&mut acc, cursor.next()?);
    }
    Ok(acc)
}

/// Materialize `source` into a map; later keys overwrite earlier ones.
///
/// # Errors
/// Propagates any traversal failure.
pub fn to_map_impl<T, K, V, FK, FV>(source: &Seq<T>, key: FK, value: FV) -> Result<HashMap<K, V>>
where
    T: Element,
    K: Hash + Eq,
    FK: Fn(&T) -> K,
    FV: Fn(T) -> V,
{
    let mut cursor = source.cursor();
    let mut out = HashMap::new();
    while cursor.has_next()? {
        let element = cursor.next()?;
        out.insert(key(&element), value(element));
    }
    Ok(out)
}

/// Materialize `source` into a multimap preserving per-key arrival order.
///
/// # Errors
/// Propagates any traversal failure.
pub fn to_multimap_impl<T, K, V, FK, FV>(
    source: &Seq<T>,
    key: FK,
    value: FV,
) -> Result<HashMap<K, Vec<V>>>
where
    T: Element,
    K: Hash + Eq,
    FK: Fn(&T) -> K,
    FV: Fn(T) -> V,
{
    let mut cursor = source.cursor();
    let mut out: HashMap<K, Vec<V>> = HashMap::new();
    while cursor.has_next()? {
        let element = cursor.next()?;
        out.entry(key(&element)).or_default().push(value(element));
    }
    Ok(out)
}

/// Apply `action` to every element of `source`.
///
/// # Errors
/// Propagates any traversal failure.
pub fn for_each_impl<T, F>(source: &Seq<T>, mut action: F) -> Result<()>
where
    T: Element,
    F: FnMut(T),
{
    let mut cursor = source.cursor();
    while cursor.has_next()? {
        action(cursor.next()?);
    }
    Ok(())
}
