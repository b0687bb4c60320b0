// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared value fixtures for operator tests.

/// A small record with a natural grouping key (`color`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fruit {
    pub name: &'static str,
    pub color: &'static str,
}

impl Fruit {
    #[must_use]
    pub const fn new(name: &'static str, color: &'static str) -> Self {
        Self { name, color }
    }
}

/// Five fruits over three colors, in a fixed order.
///
/// Color groups by first appearance: red (apple, cherry), purple (plum,
/// grape), green (lime).
#[must_use]
pub fn fruits() -> Vec<Fruit> {
    vec![
        Fruit::new("apple", "red"),
        Fruit::new("plum", "purple"),
        Fruit::new("cherry", "red"),
        Fruit::new("grape", "purple"),
        Fruit::new("lime", "green"),
    ]
}
