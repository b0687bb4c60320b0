// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Numeric aggregates for integer sequences.

use pullix_core::Seq;
use pullix_error::Result;
use pullix_ops::numeric::{
    max_int_impl, max_long_impl, min_int_impl, min_long_impl, sum_int_impl, sum_long_impl,
};

/// Numeric aggregates on `Seq<i32>`.
pub trait IntSeqExt {
    /// Sum of the elements; an empty sequence sums to 0.
    fn sum_int(&self) -> Result<i32>;

    /// Smallest element; exhaustion error when empty.
    fn min_int(&self) -> Result<i32>;

    /// Largest element; exhaustion error when empty.
    fn max_int(&self) -> Result<i32>;
}

impl IntSeqExt for Seq<i32> {
    fn sum_int(&self) -> Result<i32> {
        sum_int_impl(self)
    }

    fn min_int(&self) -> Result<i32> {
        min_int_impl(self)
    }

    fn max_int(&self) -> Result<i32> {
        max_int_impl(self)
    }
}

/// Numeric aggregates on `Seq<i64>`.
pub trait LongSeqExt {
    /// Sum of the elements; an empty sequence sums to 0.
    fn sum_long(&self) -> Result<i64>;

    /// Smallest element; exhaustion error when empty.
    fn min_long(&self) -> Result<i64>;

    /// Largest element; exhaustion error when empty.
    fn max_long(&self) -> Result<i64>;
}

impl LongSeqExt for Seq<i64> {
    fn sum_long(&self) -> Result<i64> {
        sum_long_impl(self)
    }

    fn min_long(&self) -> Result<i64> {
        min_long_impl(self)
    }

    fn max_long(&self) -> Result<i64> {
        max_long_impl(self)
    }
}
