// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Factory-based sources.

use pullix_core::{Element, Seq};

/// Defer sequence construction until a traversal actually begins.
///
/// The factory runs once per cursor, so each traversal observes a freshly
/// built sequence. Useful when building the source is itself effectful or
/// when the source must reflect state at iteration time rather than
/// composition time.
pub fn defer<T, F>(factory: F) -> Seq<T>
where
    T: Element,
    F: Fn() -> Seq<T> + 'static,
{
    Seq::from_factory(move || factory().cursor())
}
