// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core cursor contract and pull infrastructure for Pullix.
//!
//! This crate provides the minimal building blocks every Pullix operator is
//! assembled from:
//!
//! - **[`Cursor`]**: the pull contract - an idempotent `has_next` plus a
//!   consuming `next` that fails once the traversal is exhausted
//! - **[`Seq`]**: an immutable, re-iterable description of a lazy computation
//!   that produces a fresh [`Cursor`] per traversal
//! - **[`PullCursor`]**: the single generic stateful pull adapter that turns
//!   an "advance the state machine" closure into a correct cursor
//! - **[`RingQueue`]**: the growable circular buffer used by stateful
//!   operators that stage several produced elements per pulled input element
//! - **[`GenStep`]**: the typed step contract for caller-driven generators
//!
//! # Laziness
//!
//! Nothing is evaluated when a [`Seq`] chain is built. Work happens only when
//! a consumer pulls from a cursor, one element at a time. Operators that must
//! buffer (ordering, replay, last-N) document that explicitly.
//!
//! # Single-threaded by design
//!
//! Sequences and cursors are single-consumer, single-thread values. The only
//! intra-chain sharing is the driver pattern used by grouping, windowing and
//! replay, and all of it happens behind `Rc<RefCell<_>>` on one logical
//! thread of control.

pub mod cursor;
pub mod gen_step;
pub mod logging;
pub mod pull_cursor;
pub mod ring_queue;
pub mod seq;

pub use self::cursor::{BoxCursor, Cursor};
pub use self::gen_step::GenStep;
pub use self::pull_cursor::{pull_cursor, PullCursor, Step};
pub use self::ring_queue::RingQueue;
pub use self::seq::{Element, Seq, SeqCore};
pub use pullix_error::{Result, SeqError};
