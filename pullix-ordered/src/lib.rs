// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Order-changing operators.
//!
//! Sorting and reversing cannot emit anything before seeing the last
//! upstream element, so these operators materialize the upstream into a
//! `Vec` on the first pull of each cursor and then drain it. Composition
//! stays cheap; the cost is paid per traversal, on demand.

pub mod reverse;
pub mod sort;

pub use self::reverse::reverse_impl;
pub use self::sort::{sorted_by_impl, sorted_by_key_impl, sorted_impl, Direction};
