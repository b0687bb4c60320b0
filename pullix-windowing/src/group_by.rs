// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lazy group-by with per-key sub-sequences sharing one upstream cursor.

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use pullix_core::logging::debug;
use pullix_core::{pull_cursor, BoxCursor, Cursor, Element, RingQueue, Seq, SeqError, Step};
use pullix_error::Result;

/// Partition `source` into lazily populated per-key groups.
///
/// A new [`GroupedSeq`] is announced to the outer sequence the first time its
/// key appears; later elements with the same key are appended to that
/// group's private queue without re-announcing it. A group's cursor drains
/// its queue first and then drives the shared upstream until its key
/// reappears or the upstream ends, so consumers may interleave reading the
/// outer group stream with drilling into individual groups.
///
/// Keys compare by value equality (`Hash + Eq`).
///
/// # Contract
///
/// Each group's values may be iterated exactly once; a second traversal
/// fails with an invalid-state error. Values buffered for a group survive
/// upstream exhaustion and still drain, but a consumer that abandons the
/// whole chain abandons every group's backlog with it - read each group to
/// completion before dropping the chain, or accept the loss.
pub fn group_by_impl<T, K, V, FK, FV>(
    source: &Seq<T>,
    key_fn: FK,
    value_fn: FV,
) -> Seq<GroupedSeq<K, V>>
where
    T: Element,
    K: Element + Hash + Eq,
    V: Element,
    FK: Fn(&T) -> K + 'static,
    FV: Fn(T) -> V + 'static,
{
    let key_fn: Rc<FK> = Rc::new(key_fn);
    let value_fn: Rc<FV> = Rc::new(value_fn);
    let source = source.clone();
    Seq::from_factory(move || {
        let driver = Rc::new(RefCell::new(GroupDriver {
            upstream: source.cursor(),
            key_fn: Rc::clone(&key_fn),
            value_fn: Rc::clone(&value_fn),
            slots: Vec::new(),
            index: HashMap::<K, usize>::new(),
            announce: RingQueue::new(),
            done: false,
        }));
        pull_cursor(move || loop {
            let announced = driver.borrow_mut().announce.pop();
            if let Some(slot) = announced {
                let key = driver.borrow().slots[slot].key.clone();
                let feed: Rc<RefCell<dyn GroupFeed<V>>> = driver.clone();
                return Ok(Step::Yield(GroupedSeq { key, slot, feed }));
            }
            if driver.borrow().done {
                return Ok(Step::Done);
            }
            driver.borrow_mut().pull_one()?;
        })
    })
}

/// A sequence of values tagged with the group key that produced them.
///
/// Handed out by [`group_by_impl`]; holds only the key, an arena slot id and
/// a handle to the shared driver.
pub struct GroupedSeq<K, V> {
    key: K,
    slot: usize,
    feed: Rc<RefCell<dyn GroupFeed<V>>>,
}

impl<K: Clone, V> Clone for GroupedSeq<K, V> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            slot: self.slot,
            feed: Rc::clone(&self.feed),
        }
    }
}

impl<K, V> GroupedSeq<K, V>
where
    K: Element,
    V: Element,
{
    /// The key shared by every value in this group.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The values of this group, in upstream order.
    ///
    /// Single-use: realizing a second cursor over the same group yields a
    /// cursor that fails with an invalid-state error.
    pub fn values(&self) -> Seq<V> {
        let feed = Rc::clone(&self.feed);
        let slot = self.slot;
        Seq::from_factory(move || {
            let fresh = feed.borrow_mut().mark_consumed(slot);
            if !fresh {
                return pull_cursor(move || {
                    Err(SeqError::invalid_state(
                        "group values may be iterated only once",
                    ))
                });
            }
            let feed = Rc::clone(&feed);
            pull_cursor(move || loop {
                if let Some(value) = feed.borrow_mut().pop(slot) {
                    return Ok(Step::Yield(value));
                }
                if feed.borrow().is_done() {
                    return Ok(Step::Done);
                }
                // Drive the shared upstream until this key reappears or the
                // upstream is exhausted.
                feed.borrow_mut().advance()?;
            })
        })
    }
}

/// Type-erased view of the driver a group cursor pulls through.
trait GroupFeed<V> {
    fn pop(&mut self, slot: usize) -> Option<V>;
    fn advance(&mut self) -> Result<()>;
    fn is_done(&self) -> bool;
    fn mark_consumed(&mut self, slot: usize) -> bool;
}

struct GroupSlot<K, V> {
    key: K,
    queue: RingQueue<V>,
    consumed: bool,
}

struct GroupDriver<T, K, V, FK, FV> {
    upstream: BoxCursor<T>,
    key_fn: Rc<FK>,
    value_fn: Rc<FV>,
    slots: Vec<GroupSlot<K, V>>,
    index: HashMap<K, usize>,
    announce: RingQueue<usize>,
    done: bool,
}

impl<T, K, V, FK, FV> GroupDriver<T, K, V, FK, FV>
where
    K: Element + Hash + Eq,
    FK: Fn(&T) -> K,
    FV: Fn(T) -> V,
{
    /// Pull one upstream element and route it to its group, opening the
    /// group if the key is unseen. On exhaustion the key index is cleared;
    /// buffered values still drain through their group cursors.
    fn pull_one(&mut self) -> Result<()> {
        if self.done {
            return Ok(());
        }
        if self.upstream.has_next()? {
            let element = self.upstream.next()?;
            let key = (self.key_fn)(&element);
            let value = (self.value_fn)(element);
            match self.index.get(&key) {
                Some(&slot) => self.slots[slot].queue.push(value),
                None => {
                    let slot = self.slots.len();
                    let mut queue = RingQueue::new();
                    queue.push(value);
                    self.slots.push(GroupSlot {
                        key: key.clone(),
                        queue,
                        consumed: false,
                    });
                    self.index.insert(key, slot);
                    self.announce.push(slot);
                    debug!("group-by: opened group slot {}", slot);
                }
            }
        } else {
            self.done = true;
            self.index.clear();
            debug!("group-by: upstream exhausted, {} groups total", self.slots.len());
        }
        Ok(())
    }
}

impl<T, K, V, FK, FV> GroupFeed<V> for GroupDriver<T, K, V, FK, FV>
where
    K: Element + Hash + Eq,
    FK: Fn(&T) -> K,
    FV: Fn(T) -> V,
{
    fn pop(&mut self, slot: usize) -> Option<V> {
        self.slots[slot].queue.pop()
    }

    fn advance(&mut self) -> Result<()> {
        self.pull_one()
    }

    fn is_done(&self) -> bool {
        self.done
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
