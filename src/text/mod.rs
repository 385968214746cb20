// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Byte text buffer built on [`Container<u8>`].
//!
//! A [`Text`] is a container of bytes that always keeps a zero byte one past
//! its logical end. The terminator is never counted in [`Text::length`], but it
//! is there for anyone reading [`Text::as_bytes_with_nul`]. Every length change
//! goes through the same three steps: grow to `length + 1`, write the zero,
//! shrink back to `length`. The shrink keeps the capacity, so the terminator
//! slot survives.
//!
//! Everything here is byte-oriented. No UTF-8 validation, no grapheme logic.
//!
//! # Layout
//!
//! | Module   | Operations                          |
//! |----------|-------------------------------------|
//! | `mod`    | create, insert, append, range, repeat |
//! | `search` | KMP `find`, `replace`, `remove`     |
//! | `split`  | destructive tokenizer, `list_free`  |
//! | `format` | `%`-conversion formatter            |

mod format;
mod search;
mod split;

pub use format::{format_general, FormatArg, UNKNOWN_CONVERSION};

use std::fmt;

use crate::container::Container;
use crate::contracts::check_terminator_present;
use crate::error::{ContainerError, TextError};

/// Offsets returned by [`Text::find`].
pub type IndexList = Container<usize>;

/// Buffers returned by [`Text::split`].
pub type TextList = Container<Text>;

/// A growable byte string with a hidden trailing terminator.
#[derive(Clone)]
pub struct Text {
    bytes: Container<u8>,
}

impl Text {
    /// A zero-length text.
    pub fn empty() -> Result<Self, TextError> {
        Self::new_len(0)
    }

    /// A text of `count` zero bytes.
    pub fn new_len(count: usize) -> Result<Self, TextError> {
        let mut text = Self {
            bytes: Container::new()?,
        };
        text.set_length(count)?;
        Ok(text)
    }

    /// A text holding a copy of `bytes`.
    pub fn new(bytes: impl AsRef<[u8]>) -> Result<Self, TextError> {
        let bytes = bytes.as_ref();
        let mut text = Self::new_len(bytes.len())?;
        text.bytes.copy(0, bytes);
        Ok(text)
    }

    /// Release the buffer. Dropping the value does the same.
    pub fn free(self) {
        self.bytes.free();
    }

    /// Logical length in bytes, terminator excluded.
    #[inline]
    pub fn length(&self) -> usize {
        self.bytes.count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    /// The content followed by its terminator (`length() + 1` bytes).
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        self.bytes
            .materialised()
            .get(..=self.length())
            .unwrap_or_default()
    }

    /// Insert `bytes` at `pos`, shifting the suffix right.
    ///
    /// `pos == length()` appends. Fails with [`TextError::OutOfBounds`] when
    /// `pos > length()`.
    pub fn insert(&mut self, pos: usize, bytes: impl AsRef<[u8]>) -> Result<&mut Self, TextError> {
        let length = self.length();
        if pos > length {
            return Err(TextError::OutOfBounds { pos, length });
        }

        self.splice(pos, 0, bytes.as_ref())?;
        Ok(self)
    }

    /// `insert(length(), bytes)`.
    pub fn append(&mut self, bytes: impl AsRef<[u8]>) -> Result<&mut Self, TextError> {
        self.insert(self.length(), bytes)
    }

    /// Truncate to zero length. Capacity is kept.
    pub fn clear(&mut self) -> Result<&mut Self, TextError> {
        self.set_length(0)?;
        Ok(self)
    }

    /// `true` when the text begins with `sub`.
    pub fn starts_with(&self, sub: impl AsRef<[u8]>) -> bool {
        let sub = sub.as_ref();
        sub.len() <= self.length() && self.as_bytes()[..sub.len()] == *sub
    }

    /// `true` when the text ends with `sub`.
    pub fn ends_with(&self, sub: impl AsRef<[u8]>) -> bool {
        let sub = sub.as_ref();
        let length = self.length();
        sub.len() <= length && self.as_bytes()[length - sub.len()..] == *sub
    }

    /// Replace the content with `count` back-to-back copies of itself.
    ///
    /// `repeat(0)` leaves the text untouched.
    pub fn repeat(&mut self, count: usize) -> Result<&mut Self, TextError> {
        if count == 0 {
            return Ok(self);
        }

        let length = self.length();
        let total = length
            .checked_mul(count)
            .ok_or(ContainerError::CapacityOverflow)?;
        self.set_length(total)?;

        for i in 1..count {
            self.bytes.copy_within(i * length, 0, length)?;
        }
        Ok(self)
    }

    /// A new text over `[start, end)`.
    ///
    /// Both ends are clamped to `length()` and swapped when reversed, so
    /// `range(a, b) == range(b, a)`. Equal ends give an empty text.
    pub fn range(&self, start: usize, end: usize) -> Result<Text, TextError> {
        let length = self.length();
        let mut start = start.min(length);
        let mut end = end.min(length);
        if start > end {
            std::mem::swap(&mut start, &mut end);
        }

        let mut range = Text::new_len(end - start)?;
        range.bytes.copy(0, &self.as_bytes()[start..end]);
        Ok(range)
    }

    /// Apply the terminator discipline for a new logical length.
    fn set_length(&mut self, length: usize) -> Result<(), TextError> {
        let with_nul = length
            .checked_add(1)
            .ok_or(ContainerError::CapacityOverflow)?;

        self.bytes.resize(with_nul)?;
        self.bytes.set(length, 0);
        self.bytes.resize(length)?;

        check_terminator_present(self.as_bytes_with_nul());
        Ok(())
    }

    /// Swap the `removed` bytes at `at` for `inserted`, moving the tail by the
    /// length difference.
    ///
    /// Growing resizes first and shifts the tail right; shrinking shifts the
    /// tail left and resizes after, so the tail is never cut.
    fn splice(&mut self, at: usize, removed: usize, inserted: &[u8]) -> Result<(), TextError> {
        let length = self.length();
        let tail = at + removed;
        let tail_len = length - tail;

        if inserted.len() > removed {
            self.set_length(length + (inserted.len() - removed))?;
            self.bytes.copy_within(at + inserted.len(), tail, tail_len)?;
        } else if inserted.len() < removed {
            self.bytes.copy_within(at + inserted.len(), tail, tail_len)?;
            self.set_length(length - (removed - inserted.len()))?;
        }

        self.bytes.copy(at, inserted);
        Ok(())
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Text")
            .field(&String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

/// Appends, so `write!(text, ...)` works with std formatting.
impl fmt::Write for Text {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s).map(|_| ()).map_err(|_| fmt::Error)
    }
}

impl AsRef<[u8]> for Text {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl TryFrom<&str> for Text {
    type Error = TextError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Text::new(value)
    }
}

impl TryFrom<&[u8]> for Text {
    type Error = TextError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Text::new(value)
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Text {}

impl PartialEq<[u8]> for Text {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for Text {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for Text {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}
