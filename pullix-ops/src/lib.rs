// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stateless and terminal operator implementations for Pullix.
//!
//! Lazy operators here manage at most a single element of lookahead (or a
//! bounded lookback for the `*_last` pair) and re-realize their upstream on
//! every traversal. Terminal operators drive an upstream cursor to a scalar
//! or a collection and are the points where evaluation actually happens.
//!
//! The fluent method surface over these functions lives in the `pullix`
//! facade crate; everything here takes the source sequence explicitly, the
//! convention shared by the whole workspace.

pub mod aggregate;
pub mod collect;
pub mod distinct;
pub mod every_nth;
pub mod filter;
pub mod first_last;
pub mod map;
pub mod numeric;
pub mod reduce;
pub mod scan;
pub mod skip_take;
