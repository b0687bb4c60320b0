// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Primitive integer reductions.
//!
//! Thin one-operator reductions over `i32` and `i64` sequences, kept here so
//! the facade can expose them without reimplementing the fold each time.

use pullix_core::Seq;
use pullix_error::Result;

use crate::aggregate::{max_by_impl, min_by_impl};
use crate::reduce::fold_impl;

/// Sum of an `i32` sequence; an empty sequence sums to 0.
///
/// # Errors
/// Propagates any traversal failure.
pub fn sum_int_impl(source: &Seq<i32>) -> Result<i32> {
    fold_impl(source, 0i32, |acc, value| acc + value)
}

/// Smallest element of an `i32` sequence.
///
/// # Errors
/// Returns an exhaustion error on an empty sequence.
pub fn min_int_impl(source: &Seq<i32>) -> Result<i32> {
    min_by_impl(source, i32::cmp)
}

/// Largest element of an `i32` sequence.
///
/// # Errors
/// Returns an exhaustion error on an empty sequence.
pub fn max_int_impl(source: &Seq<i32>) -> Result<i32> {
    max_by_impl(source, i32::cmp)
}

/// Sum of an `i64` sequence; an empty sequence sums to 0.
///
/// # Errors
/// Propagates any traversal failure.
pub fn sum_long_impl(source: &Seq<i64>) -> Result<i64> {
    fold_impl(source, 0i64, |acc, value| acc + value)
}

/// Smallest element of an `i64` sequence.
///
/// # Errors
/// Returns an exhaustion error on an empty sequence.
pub fn min_long_impl(source: &Seq<i64>) -> Result<i64> {
    min_by_impl(source, i64::cmp)
}

/// Largest element of an `i64` sequence.
///
/// # Errors
/// Returns an exhaustion error on an empty sequence.
pub fn max_long_impl(source: &Seq<i64>) -> Result<i64> {
    max_by_impl(source, i64::cmp)
}
