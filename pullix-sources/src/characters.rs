// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Character-of-string sequences.

use std::rc::Rc;

use pullix_core::{pull_cursor, Seq, Step};
use pullix_error::{Result, SeqError};

/// The code points of `text`, in order, as `u32` values.
///
/// # Examples
///
/// ```
/// use pullix_core::Cursor;
/// use pullix_sources::characters;
///
/// let mut cursor = characters("ab").cursor();
/// assert_eq!(cursor.next().unwrap(), 97);
/// assert_eq!(cursor.next().unwrap(), 98);
/// ```
#[must_use]
pub fn characters(text: &str) -> Seq<u32> {
    let chars: Rc<[char]> = text.chars().collect();
    let len = chars.len();
    char_seq(chars, 0, len)
}

/// The code points of the character range `[start, end)` of `text`.
///
/// Indices count characters, not bytes.
///
/// # Errors
/// Fails at construction with [`SeqError::OutOfRange`] if the range does
/// not lie within the character count of `text`.
pub fn characters_range(text: &str, start: usize, end: usize) -> Result<Seq<u32>> {
    let chars: Rc<[char]> = text.chars().collect();
    if start > end || end > chars.len() {
        return Err(SeqError::out_of_range(start, end, chars.len()));
    }
    Ok(char_seq(chars, start, end))
}

fn char_seq(chars: Rc<[char]>, start: usize, end: usize) -> Seq<u32> {
    Seq::from_factory(move || {
        let chars = Rc::clone(&chars);
        let mut index = start;
        pull_cursor(move || {
            if index < end {
                let value = chars[index] as u32;
                index += 1;
                Ok(Step::Yield(value))
            } else {
                Ok(Step::Done)
            }
        })
    })
}
