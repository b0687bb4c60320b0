// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Seeded and caller-driven generator sequences.

use std::rc::Rc;

use pullix_core::{pull_cursor, Element, GenStep, Seq, Step};

/// Emit `seed`, then successive applications of `advance`, while `cond`
/// holds.
///
/// The seed itself is tested before being emitted, so a condition that is
/// false for the seed yields an empty sequence.
///
/// # Examples
///
/// ```
/// use pullix_sources::unfold;
/// use pullix_core::Cursor;
///
/// let powers = unfold(1u64, |v| *v < 100, |v| v * 2);
/// let mut cursor = powers.cursor();
/// let mut out = Vec::new();
/// while cursor.has_next().unwrap() {
///     out.push(cursor.next().unwrap());
/// }
/// assert_eq!(out, vec![1, 2, 4, 8, 16, 32, 64]);
/// ```
pub fn unfold<S, C, A>(seed: S, cond: C, advance: A) -> Seq<S>
where
    S: Element,
    C: Fn(&S) -> bool + 'static,
    A: Fn(S) -> S + 'static,
{
    let cond = Rc::new(cond);
    let advance = Rc::new(advance);
    Seq::from_factory(move || {
        let cond = Rc::clone(&cond);
        let advance = Rc::clone(&advance);
        let mut state = Some(seed.clone());
        pull_cursor(move || {
            match state.take() {
                Some(current) if cond(&current) => {
                    state = Some(advance(current.clone()));
                    Ok(Step::Yield(current))
                }
                _ => Ok(Step::Done),
            }
        })
    })
}

/// A caller-driven generator sequence.
///
/// `factory` runs once per traversal and returns the step closure for that
/// cursor. Each pull invokes the step closure once and acts on the returned
/// [`GenStep`]: `Emit` produces the value, `Complete` ends the traversal,
/// and `Fail` surfaces through the cursor's error channel. The type makes
/// "signalled neither a value nor completion" unrepresentable.
///
/// # Examples
///
/// ```
/// use pullix_core::{Cursor, GenStep};
/// use pullix_sources::generate;
///
/// let seq = generate(|| {
///     let mut next = 0;
///     move || {
///         if next < 3 {
///             next += 1;
///             GenStep::Emit(next)
///         } else {
///             GenStep::Complete
///         }
///     }
/// });
///
/// let mut cursor = seq.cursor();
/// assert_eq!(cursor.next().unwrap(), 1);
/// assert_eq!(cursor.next().unwrap(), 2);
/// assert_eq!(cursor.next().unwrap(), 3);
/// assert!(!cursor.has_next().unwrap());
/// ```
pub fn generate<T, F, G>(factory: F) -> Seq<T>
where
    T: Element,
    F: Fn() -> G + 'static,
    G: FnMut() -> GenStep<T> + 'static,
{
    Seq::from_factory(move || {
        let mut step = factory();
        pull_cursor(move || match step() {
            GenStep::Emit(value) => Ok(Step::Yield(value)),
            GenStep::Complete => Ok(Step::Done),
            GenStep::Fail(error) => Err(error),
        })
    })
}
