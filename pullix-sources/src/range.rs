// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Consecutive integer sequences.

use pullix_core::{pull_cursor, Seq, Step};

/// The sequence `start, start + 1, ..., start + count - 1`.
///
/// `count == 0` collapses to the empty sequence and `count == 1` to
/// [`Seq::just`], so single-value ranges take the resolved-scalar fast path
/// instead of the general counter cursor.
///
/// # Examples
///
/// ```
/// use pullix_sources::range;
///
/// let seq = range(5, 3);
/// let mut cursor = seq.cursor();
/// # use pullix_core::Cursor;
/// assert_eq!(cursor.next().unwrap(), 5);
/// assert_eq!(cursor.next().unwrap(), 6);
/// assert_eq!(cursor.next().unwrap(), 7);
/// ```
#[must_use]
pub fn range(start: i64, count: usize) -> Seq<i64> {
    match count {
        0 => Seq::empty(),
        1 => Seq::just(start),
        _ => Seq::from_factory(move || {
            let end = start + count as i64;
            let mut next = start;
            pull_cursor(move || {
                if next < end {
                    let value = next;
                    next += 1;
                    Ok(Step::Yield(value))
                } else {
                    Ok(Step::Done)
                }
            })
        }),
    }
}
