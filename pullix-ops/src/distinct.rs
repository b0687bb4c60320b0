// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Duplicate suppression operators.

use std::collections::HashSet;
use std::hash::Hash;
use std::rc::Rc;

use pullix_core::{pull_cursor, Element, Seq, Step};

/// Emit each distinct element once, in first-appearance order.
///
/// Keeps a hash set of every emitted element for the lifetime of the
/// traversal. Equality is value equality.
pub fn distinct_impl<T>(source: &Seq<T>) -> Seq<T>
where
    T: Element + Hash + Eq,
{
    let source = source.clone();
    Seq::from_factory(move || {
        let mut upstream = source.cursor();
        let mut seen = HashSet::new();
        pull_cursor(move || {
            while upstream.has_next()? {
                let value = upstream.next()?;
                if seen.insert(value.clone()) {
                    return Ok(Step::Yield(value));
                }
            }
            Ok(Step::Done)
        })
    })
}

/// Emit values only when they differ from the previously emitted value.
///
/// The first value is always emitted; each later value is compared against
/// the last one that passed, so only consecutive duplicates are filtered.
pub fn distinct_until_changed_impl<T>(source: &Seq<T>) -> Seq<T>
where
    T: Element + PartialEq,
{
    distinct_until_changed_by_impl(source, |value: &T| value.clone())
}

/// Like [`distinct_until_changed_impl`], comparing by a derived key.
pub fn distinct_until_changed_by_impl<T, K, F>(source: &Seq<T>, key: F) -> Seq<T>
where
    T: Element,
    K: PartialEq + 'static,
    F: Fn(&T) -> K + 'static,
{
    let key = Rc::new(key);
    let source = source.clone();
    Seq::from_factory(move || {
        let key = Rc::clone(&key);
        let mut upstream = source.cursor();
        let mut last: Option<K> = None;
        pull_cursor(move || {
            while upstream.has_next()? {
                let value = upstream.next()?;
                let current = key(&value);
                let changed = match last.as_ref() {
                    None => true,
                    Some(previous) => current != *previous,
                };
                if changed {
                    last = Some(current);
                    return Ok(Step::Yield(value));
                }
            }
            Ok(Step::Done)
        })
    })
}
