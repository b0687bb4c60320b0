// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Grouping, windowing, buffering and replay operators.
//!
//! Everything in this crate shares one upstream cursor between several
//! dependent consumers through the *driver* pattern: a single state machine
//! (behind `Rc<RefCell<_>>`) owns the upstream cursor plus an arena of
//! per-sub-sequence queues, and each sub-sequence holds only its slot id and
//! a handle to the driver. Sub-cursors drain their own queue first and ask
//! the driver for exactly one more upstream element at a time when it runs
//! dry, so overall laziness is preserved: no more upstream elements are
//! consumed than the consumer's demand requires.
//!
//! Grouped and windowed sub-sequences are single-use; a second traversal of
//! the same group or window fails with an invalid-state error.

pub mod buffer;
pub mod group_by;
pub mod replay;
pub mod window;

pub use self::group_by::GroupedSeq;
pub use self::window::WindowSeq;
