// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! One-stop import for the fluent surface.
//!
//! ```
//! use pullix::prelude::*;
//!
//! let total = range(1, 100).filter(|v| v % 3 == 0).sum_long().unwrap();
//! assert_eq!(total, 1683);
//! ```

pub use crate::aggregate::AggregateExt;
pub use crate::combine::{CombineExt, NestedExt};
pub use crate::numeric::{IntSeqExt, LongSeqExt};
pub use crate::ordering::OrderingExt;
pub use crate::transform::TransformExt;
pub use crate::windowing::WindowingExt;

pub use pullix_core::{Cursor, Element, GenStep, Seq, Step};
pub use pullix_error::{Result, SeqError};
pub use pullix_ordered::Direction;
pub use pullix_sources::{
    characters, characters_range, defer, from_iter, from_slice, from_vec, generate, range,
    repeat, repeat_forever, unfold,
};

pub use crate::{concat, concat_array, ordered_merge, ordered_merge_by};
