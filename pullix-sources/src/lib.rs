// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Leaf sequence generators - sequences with no upstream.
//!
//! Everything here builds a [`Seq`](pullix_core::Seq) directly from values
//! supplied by the caller: integer ranges, array slices, the characters of a
//! string, repeated values, seeded and caller-driven generators, and deferred
//! factories. Construction parameters that reference elements outside the
//! backing storage fail eagerly with [`SeqError::OutOfRange`]
//! (never lazily, never clamped).
//!
//! [`SeqError::OutOfRange`]: pullix_error::SeqError

pub mod characters;
pub mod defer;
pub mod from_iter;
pub mod from_vec;
pub mod generate;
pub mod range;
pub mod repeat;

pub use self::characters::{characters, characters_range};
pub use self::defer::defer;
pub use self::from_iter::from_iter;
pub use self::from_vec::{from_vec, from_slice};
pub use self::generate::{generate, unfold};
pub use self::range::range;
pub use self::repeat::{repeat, repeat_forever};
