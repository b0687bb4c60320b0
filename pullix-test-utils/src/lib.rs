// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the Pullix workspace.
//!
//! This crate provides helper types and assertion utilities for testing pull
//! cursors and operator chains. It is designed for use in development and
//! testing only, not for production code.
//!
//! # Key pieces
//!
//! - [`tracked`]: wraps a sequence so tests can count how many times its
//!   cursors were advanced, which is how the `has_next` idempotence contract
//!   is verified
//! - [`collect`] / [`try_collect`]: drain a sequence through the raw cursor
//!   contract, independent of any operator crate
//! - [`test_data`]: small value fixtures shared across operator tests

pub mod helpers;
pub mod test_data;
pub mod tracked;

pub use self::helpers::{assert_elements, collect, try_collect};
pub use self::test_data::{fruits, Fruit};
pub use self::tracked::{tracked, PullStats};
