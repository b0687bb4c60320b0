// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hash-backed set operations.

use std::collections::HashSet;
use std::hash::Hash;

use pullix_core::{pull_cursor, Cursor, Element, Seq, Step};

/// Distinct elements of `left` followed by distinct unseen elements of
/// `right`, in first-appearance order.
pub fn union_impl<T>(left: &Seq<T>, right: &Seq<T>) -> Seq<T>
where
    T: Element + Hash + Eq,
{
    let left = left.clone();
    let right = right.clone();
    Seq::from_factory(move || {
        let mut first = left.cursor();
        let mut second = right.cursor();
        let mut seen = HashSet::new();
        pull_cursor(move || {
            while first.has_next()? {
                let value = first.next()?;
                if seen.insert(value.clone()) {
                    return Ok(Step::Yield(value));
                }
            }
            while second.has_next()? {
                let value = second.next()?;
                if seen.insert(value.clone()) {
                    return Ok(Step::Yield(value));
                }
            }
            Ok(Step::Done)
        })
    })
}

/// Distinct elements of `left` that also occur in `right`, in `left`'s
/// first-appearance order.
///
/// `right` is materialized into a hash set on the first pull.
pub fn intersect_impl<T>(left: &Seq<T>, right: &Seq<T>) -> Seq<T>
where
    T: Element + Hash + Eq,
{
    membership_filter(left, right, true)
}

/// Distinct elements of `left` that do not occur in `right`, in `left`'s
/// first-appearance order.
///
/// `right` is materialized into a hash set on the first pull.
pub fn except_impl<T>(left: &Seq<T>, right: &Seq<T>) -> Seq<T>
where
    T: Element + Hash + Eq,
{
    membership_filter(left, right, false)
}

fn membership_filter<T>(left: &Seq<T>, right: &Seq<T>, keep_members: bool) -> Seq<T>
where
    T: Element + Hash + Eq,
{
    let left = left.clone();
    let right = right.clone();
    Seq::from_factory(move || {
        let right = right.clone();
        let mut source = left.cursor();
        let mut members: Option<HashSet<T>> = None;
        let mut emitted = HashSet::new();
        pull_cursor(move || {
            if members.is_none() {
                let mut set = HashSet::new();
                let mut cursor = right.cursor();
                while cursor.has_next()? {
                    set.insert(cursor.next()?);
                }
                members = Some(set);
            }
            while source.has_next()? {
                let value = source.next()?;
                let is_member = members
                    .as_ref()
                    .map_or(false, |set| set.contains(&value));
                if is_member == keep_members && emitted.insert(value.clone()) {
                    return Ok(Step::Yield(value));
                }
            }
            Ok(Step::Done)
        })
    })
}
