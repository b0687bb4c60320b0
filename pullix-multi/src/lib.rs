// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Multi-source combinators for Pullix.
//!
//! Operators here consume more than one upstream sequence (or a sequence of
//! sequences): concatenation and flattening with the resolved-scalar inner
//! fast path, ordered k-way merge by comparator, hash-backed set operations,
//! and fixed-arity zips. All of them preserve the pull contract - upstreams
//! are advanced only as far as the consumer's demand requires.

pub mod concat;
pub mod flat_map;
pub mod ordered_merge;
pub mod set_ops;
pub mod zip;
