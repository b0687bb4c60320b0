// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lazy, pull-based sequence combinators.
//!
//! A [`Seq`] is an immutable, re-iterable description of a sequence of
//! values. Nothing is computed when a chain of operators is composed; every
//! traversal realizes a fresh [`Cursor`](pullix_core::Cursor) and elements
//! are produced one at a time, strictly on demand. `has_next` is idempotent,
//! `next` past the end fails with an exhaustion error, and a cursor that has
//! reported an error stays terminated.
//!
//! The operator implementations live in focused workspace crates
//! (`pullix-sources`, `pullix-ops`, `pullix-multi`, `pullix-windowing`,
//! `pullix-ordered`); this crate stitches them into a fluent method surface
//! through per-family extension traits, re-exported together from
//! [`prelude`].
//!
//! ```
//! use pullix::prelude::*;
//!
//! let evens = range(1, 10).filter(|v| v % 2 == 0).map(|v| v * 10);
//!
//! assert_eq!(evens.to_vec().unwrap(), vec![20, 40, 60, 80, 100]);
//! // A Seq is re-iterable; a second traversal starts over.
//! assert_eq!(evens.count().unwrap(), 5);
//! ```

pub mod aggregate;
pub mod combine;
pub mod numeric;
pub mod ordering;
pub mod prelude;
pub mod transform;
pub mod windowing;

pub use pullix_core::{
    pull_cursor, BoxCursor, Cursor, Element, GenStep, PullCursor, RingQueue, Seq, SeqCore, Step,
};
pub use pullix_error::{Result, SeqError};
pub use pullix_multi::concat::{concat_array_impl as concat_array, concat_impl as concat};
pub use pullix_multi::ordered_merge::{
    ordered_merge_by_impl as ordered_merge_by, ordered_merge_impl as ordered_merge,
};
pub use pullix_ordered::Direction;
pub use pullix_sources::{
    characters, characters_range, defer, from_iter, from_slice, from_vec, generate, range,
    repeat, repeat_forever, unfold,
};
pub use pullix_windowing::{GroupedSeq, WindowSeq};

pub use crate::aggregate::AggregateExt;
pub use crate::combine::{CombineExt, NestedExt};
pub use crate::numeric::{IntSeqExt, LongSeqExt};
pub use crate::ordering::OrderingExt;
pub use crate::transform::TransformExt;
pub use crate::windowing::WindowingExt;
