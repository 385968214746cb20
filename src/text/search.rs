// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Substring search and in-place replacement.
//!
//! `find` is Knuth–Morris–Pratt: one O(m) pass to build the failure table
//! (longest proper prefix that is also a suffix, per pattern prefix), one
//! O(n) amortised pass over the text. After a full match the scan falls back
//! through the table instead of restarting, so overlapping matches are
//! reported: `"AAA"` in `"AAAA"` gives `[0, 1]`.
//!
//! `replace` edits occurrences left to right. Each edit moves everything after
//! it by `new.len() - old.len()`, so every stored offset is shifted by the
//! edits already made before it is used.
//!
//! # References
//!
//! - Knuth, Morris, Pratt (1977): "Fast Pattern Matching in Strings",
//!   SIAM Journal on Computing 6(2).

use log::debug;

use super::{IndexList, Text};
use crate::container::Container;
use crate::contracts::check_offsets_ascending;
use crate::error::TextError;

/// Failure table for `pat`: entry `i` is the length of the longest proper
/// prefix of `pat[..=i]` that is also its suffix.
fn failure_table(pat: &[u8]) -> Result<IndexList, TextError> {
    let mut lps: IndexList = Container::new_len(pat.len())?;

    let mut len = 0;
    let mut i = 1;
    while i < pat.len() {
        if pat[i] == pat[len] {
            len += 1;
            lps.set(i, len);
            i += 1;
        } else if len != 0 {
            len = lps[len - 1];
        } else {
            lps.set(i, 0);
            i += 1;
        }
    }

    Ok(lps)
}

/// Where the occurrence found at `offset` sits after `replaced` earlier
/// replacements of `old` bytes by `new` bytes, saturating at the base.
fn shifted_offset(offset: usize, replaced: usize, old: usize, new: usize) -> usize {
    offset
        .saturating_add(replaced.saturating_mul(new))
        .saturating_sub(replaced.saturating_mul(old))
}

impl Text {
    /// Every start offset of `pat`, ascending, overlaps included.
    ///
    /// An empty pattern is [`TextError::EmptyPattern`]. A pattern longer than
    /// the text simply has no matches.
    pub fn find(&self, pat: impl AsRef<[u8]>) -> Result<IndexList, TextError> {
        let pat = pat.as_ref();
        if pat.is_empty() {
            return Err(TextError::EmptyPattern);
        }

        let text = self.as_bytes();
        let mut found: IndexList = Container::new()?;
        if pat.len() > text.len() {
            return Ok(found);
        }

        let lps = failure_table(pat)?;
        let mut i = 0;
        let mut j = 0;
        while i < text.len() {
            if text[i] == pat[j] {
                i += 1;
                j += 1;
                if j == pat.len() {
                    found.push(i - j)?;
                    j = lps[j - 1];
                }
            } else if j != 0 {
                j = lps[j - 1];
            } else {
                i += 1;
            }
        }

        check_offsets_ascending(&found, pat.len(), text.len());
        Ok(found)
    }

    /// Replace up to `count` occurrences of `old` with `new`, left to right.
    /// `None` replaces them all.
    ///
    /// Every offset `find` reports is used, overlapping ones included, after
    /// moving it by the length change of the replacements before it. A moved
    /// offset saturates at `0` and the removed span is clamped to the current
    /// length, so `"AAAA"` with `"AA" -> "B"` ends as `"B"`. Fails with
    /// [`TextError::PatternTooLong`] when `old` is longer than the text.
    ///
    /// Not transactional: if growing fails halfway, the edits made so far
    /// stay.
    pub fn replace(
        &mut self,
        old: impl AsRef<[u8]>,
        new: impl AsRef<[u8]>,
        count: Option<usize>,
    ) -> Result<&mut Self, TextError> {
        let old = old.as_ref();
        let new = new.as_ref();

        let length = self.length();
        if old.len() > length {
            return Err(TextError::PatternTooLong {
                pattern: old.len(),
                length,
            });
        }

        let found = self.find(old)?;
        let limit = count.unwrap_or(usize::MAX);

        let mut replaced = 0;
        for &offset in found.iter().take(limit) {
            let length = self.length();
            let at = shifted_offset(offset, replaced, old.len(), new.len()).min(length);
            let removed = old.len().min(length - at);
            self.splice(at, removed, new)?;

            replaced += 1;
        }

        debug!(
            "replaced {} of {} occurrences ({} -> {} bytes)",
            replaced,
            found.count(),
            old.len(),
            new.len()
        );
        Ok(self)
    }

    /// Remove every occurrence of `pat`: `replace(pat, "", None)`.
    pub fn remove(&mut self, pat: impl AsRef<[u8]>) -> Result<&mut Self, TextError> {
        self.replace(pat, b"", None)
    }
}
