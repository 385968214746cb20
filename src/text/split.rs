// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Destructive tokenizer.
//!
//! Tokens are the maximal runs of bytes that are not separators. Runs of
//! separators collapse, and leading or trailing separators never produce empty
//! tokens. Separators in the source are overwritten with the terminator byte
//! as they are consumed, and the terminator byte always counts as a
//! separator, so splitting the same buffer again gives the same tokens.

use log::{debug, trace};

use super::{Text, TextList};
use crate::container::Container;
use crate::error::TextError;

impl Text {
    /// Split on any byte in `separators`, returning newly allocated tokens.
    ///
    /// The source keeps its length, but every separator byte in it is now
    /// zero, not only the one that ends each token. A zero byte already in
    /// the text is a separator too, so scanning continues past it instead of
    /// stopping there. With no separators the whole (non-empty) text is one
    /// token.
    pub fn split(&mut self, separators: impl AsRef<[u8]>) -> Result<TextList, TextError> {
        let separators = separators.as_ref();
        let mut tokens: TextList = Container::default();

        let mut token_start = None;
        for pos in 0..self.length() {
            let byte = self.bytes[pos];
            if byte == 0 || separators.contains(&byte) {
                if let Some(start) = token_start.take() {
                    tokens.push(Text::new(&self.bytes[start..pos])?)?;
                }
                self.bytes.set(pos, 0);
            } else if token_start.is_none() {
                token_start = Some(pos);
            }
        }
        if let Some(start) = token_start {
            tokens.push(Text::new(&self.bytes[start..])?)?;
        }

        debug!(
            "split {} bytes into {} tokens",
            self.length(),
            tokens.count()
        );
        Ok(tokens)
    }

    /// Free every token, then the list itself.
    pub fn list_free(list: TextList) {
        trace!("freeing {} tokens", list.count());
        list.free();
    }
}
