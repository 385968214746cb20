// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the destructive tokenizer.
//!
//! Tokens must be non-empty, free of separators and zero bytes, and splitting
//! the already-split buffer again must give the same tokens.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vest::Text;

#[derive(Debug, Arbitrary)]
struct SplitInput {
    text: Vec<u8>,
    separators: Vec<u8>,
}

fuzz_target!(|input: SplitInput| {
    let separators = &input.separators[..input.separators.len().min(8)];
    let mut text = match Text::new(&input.text) {
        Ok(t) => t,
        Err(_) => return,
    };

    let first = match text.split(separators) {
        Ok(tokens) => tokens,
        Err(_) => return,
    };
    assert_eq!(text.length(), input.text.len(), "split changed the length");

    for token in &first {
        assert!(!token.is_empty(), "empty token");
        assert!(
            token
                .as_bytes()
                .iter()
                .all(|b| *b != 0 && !separators.contains(b)),
            "token holds a separator"
        );
    }

    let second = match text.split(separators) {
        Ok(tokens) => tokens,
        Err(_) => return,
    };
    assert_eq!(first, second, "split is not stable");
    Text::list_free(first);
    Text::list_free(second);
});
