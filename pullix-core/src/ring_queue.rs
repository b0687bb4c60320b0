// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Growable circular buffer used by the stateful operators.

/// Initial slot count of a fresh queue.
const INITIAL_CAPACITY: usize = 8;

/// An array-backed FIFO queue with lazy doubling growth.
///
/// Stateful operators (windowing, overlapping buffers, group-by) stage
/// several produced elements per pulled input element; this queue is the
/// primitive they stage into. Slots hold `Option<T>`, so "slot empty" is a
/// distinct state from any stored value and no sentinel encoding is needed.
///
/// Growth doubles the slot array and re-linearizes the live elements in
/// order, giving amortized O(1) `push`.
pub struct RingQueue<T> {
    slots: Box<[Option<T>]>,
    head: usize,
    len: usize,
}

impl<T> RingQueue<T> {
    /// Create an empty queue with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Self::allocate(INITIAL_CAPACITY),
            head: 0,
            len: 0,
        }
    }

    fn allocate(capacity: usize) -> Box<[Option<T>]> {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        slots.into_boxed_slice()
    }

    /// Append a value at the tail, growing if the queue is full.
    pub fn push(&mut self, value: T) {
        if self.len == self.slots.len() {
            self.grow();
        }
        let tail = (self.head + self.len) % self.slots.len();
        self.slots[tail] = Some(value);
        self.len += 1;
    }

    fn grow(&mut self) {
        let mut slots = Self::allocate(self.slots.len() * 2);
        for (index, slot) in slots.iter_mut().enumerate().take(self.len) {
            *slot = self.slots[(self.head + index) % self.slots.len()].take();
        }
        self.slots = slots;
        self.head = 0;
    }

    /// Remove and return the value at the head, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.slots[self.head].take();
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;
        value
    }

    /// Borrow the value at the head without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    /// Borrow the value `offset` positions behind the head.
    #[must_use]
    pub fn get(&self, offset: usize) -> Option<&T> {
        if offset >= self.len {
            return None;
        }
        self.slots[(self.head + offset) % self.slots.len()].as_ref()
    }

    /// Whether the queue holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Visit every live element in queue order.
    pub fn for_each(&self, mut visitor: impl FnMut(&T)) {
        for offset in 0..self.len {
            if let Some(value) = self.slots[(self.head + offset) % self.slots.len()].as_ref() {
                visitor(value);
            }
        }
    }

    /// Visit every live element mutably in queue order.
    pub fn for_each_mut(&mut self, mut visitor: impl FnMut(&mut T)) {
        for offset in 0..self.len {
            let index = (self.head + offset) % self.slots.len();
            if let Some(value) = self.slots[index].as_mut() {
                visitor(value);
            }
        }
    }
}

impl<T> Default for RingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
