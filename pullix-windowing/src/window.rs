// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Count-based windows exposed as lazy sub-sequences.

use std::cell::RefCell;
use std::rc::Rc;

use pullix_core::logging::debug;
use pullix_core::{pull_cursor, BoxCursor, Cursor, Element, RingQueue, Seq, SeqError, Step};
use pullix_error::Result;

/// Split `source` into consecutive non-overlapping windows of `size`
/// elements each; the final window may be shorter.
///
/// Windows are lazy: a window's elements are pulled from the upstream only
/// as the window's own cursor (or a later window's opening) demands them.
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn window_impl<T: Element>(source: &Seq<T>, size: usize) -> Seq<WindowSeq<T>> {
    window_with_skip_impl(source, size, size)
}

/// Split `source` into windows of up to `size` elements, starting a new
/// window every `skip` elements.
///
/// * `skip == size` gives tumbling windows.
/// * `skip < size` gives overlapping windows; elements inside the overlap
///   are fanned out (cloned) into every window that covers them.
/// * `skip > size` drops `skip - size` elements between windows.
///
/// # Panics
///
/// Panics if `size` or `skip` is zero.
pub fn window_with_skip_impl<T: Element>(
    source: &Seq<T>,
    size: usize,
    skip: usize,
) -> Seq<WindowSeq<T>> {
    assert!(size >= 1, "window size must be at least 1");
    assert!(skip >= 1, "window skip must be at least 1");
    let source = source.clone();
    Seq::from_factory(move || {
        let driver = Rc::new(RefCell::new(WindowDriver {
            upstream: source.cursor(),
            size,
            skip,
            slots: Vec::new(),
            open: Vec::new(),
            announce: RingQueue::new(),
            index: 0,
            done: false,
        }));
        pull_cursor(move || loop {
            let announced = driver.borrow_mut().announce.pop();
            if let Some(slot) = announced {
                let feed: Rc<RefCell<dyn WindowFeed<T>>> = driver.clone();
                return Ok(Step::Yield(WindowSeq { slot, feed }));
            }
            if driver.borrow().done {
                return Ok(Step::Done);
            }
            driver.borrow_mut().pull_one()?;
        })
    })
}

/// One window of elements handed out by [`window_impl`] or
/// [`window_with_skip_impl`].
pub struct WindowSeq<T> {
    slot: usize,
    feed: Rc<RefCell<dyn WindowFeed<T>>>,
}

impl<T> Clone for WindowSeq<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot,
            feed: Rc::clone(&self.feed),
        }
    }
}

impl<T: Element> WindowSeq<T> {
    /// The elements of this window, in upstream order.
    ///
    /// Single-use: realizing a second cursor over the same window yields a
    /// cursor that fails with an invalid-state error.
    pub fn values(&self) -> Seq<T> {
        let feed = Rc::clone(&self.feed);
        let slot = self.slot;
        Seq::from_factory(move || {
            let fresh = feed.borrow_mut().mark_consumed(slot);
            if !fresh {
                return pull_cursor(move || {
                    Err(SeqError::invalid_state(
                        "window values may be iterated only once",
                    ))
                });
            }
            let feed = Rc::clone(&feed);
            pull_cursor(move || loop {
                if let Some(value) = feed.borrow_mut().pop(slot) {
                    return Ok(Step::Yield(value));
                }
                if feed.borrow().is_closed(slot) {
                    return Ok(Step::Done);
                }
                feed.borrow_mut().advance()?;
            })
        })
    }
}

/// Type-erased view of the driver a window cursor pulls through.
trait WindowFeed<T> {
    fn pop(&mut self, slot: usize) -> Option<T>;
    fn advance(&mut self) -> Result<()>;
    fn is_closed(&self, slot: usize) -> bool;
    fn mark_consumed(&mut self, slot: usize) -> bool;
}

struct WindowSlot<T> {
    queue: RingQueue<T>,
    /// Elements still owed to this window; 0 once the window is full.
    remaining: usize,
    consumed: bool,
}

struct WindowDriver<T> {
    upstream: BoxCursor<T>,
    size: usize,
    skip: usize,
    slots: Vec<WindowSlot<T>>,
    /// Slot ids of windows that still accept elements.
    open: Vec<usize>,
    announce: RingQueue<usize>,
    /// Zero-based position of the next upstream element.
    index: u64,
    done: bool,
}

impl<T: Element> WindowDriver<T> {
    /// Pull one upstream element, opening a window at every `skip` boundary
    /// and fanning the element out to every open window.
    fn pull_one(&mut self) -> Result<()> {
        if self.done {
            return Ok(());
        }
        if !self.upstream.has_next()? {
            self.done = true;
            self.open.clear();
            debug!("window: upstream exhausted, {} windows total", self.slots.len());
            return Ok(());
        }
        if self.index % self.skip as u64 == 0 {
            let slot = self.slots.len();
            self.slots.push(WindowSlot {
                queue: RingQueue::new(),
                remaining: self.size,
                consumed: false,
            });
            self.open.push(slot);
            self.announce.push(slot);
            debug!("window: opened window slot {}", slot);
        }
        let element = self.upstream.next()?;
        self.index += 1;
        let slots = &mut self.slots;
        self.open.retain(|&slot| {
            let state = &mut slots[slot];
            if state.remaining > 0 {
                state.queue.push(element.clone());
                state.remaining -= 1;
            }
            state.remaining > 0
        });
        Ok(())
    }
}

impl<T: Element> WindowFeed<T> for WindowDriver<T> {
    fn pop(&mut self, slot: usize) -> Option<T> {
        self.slots[slot].queue.pop()
    }

    fn advance(&mut self) -> Result<()> {
        self.pull_one()
    }

    fn is_closed(&self, slot: usize) -> bool {
        self.done || self.slots[slot].remaining == 0
    }

    fn mark_consumed(&mut self, slot: usize) -> bool {
        let state = &mut self.slots[slot];
        if state.consumed {
            false
        } else {
            state.consumed = true;
            true
        }
    }
}
