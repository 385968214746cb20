// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for KMP search.
//!
//! Every reported offset must be a real match, offsets must ascend, and the
//! count must agree with a naive window scan.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vest::{Text, TextError};

#[derive(Debug, Arbitrary)]
struct FindInput {
    text: Vec<u8>,
    pattern: Vec<u8>,
}

fuzz_target!(|input: FindInput| {
    let text = match Text::new(&input.text) {
        Ok(t) => t,
        Err(_) => return,
    };

    let found = match text.find(&input.pattern) {
        Ok(found) => found,
        Err(TextError::EmptyPattern) => {
            assert!(input.pattern.is_empty());
            return;
        }
        Err(e) => panic!("unexpected error: {}", e),
    };

    for &offset in &found {
        assert_eq!(
            &input.text[offset..offset + input.pattern.len()],
            input.pattern.as_slice(),
            "offset {} is not a match",
            offset
        );
    }
    assert!(found.windows(2).all(|w| w[0] < w[1]), "offsets not ascending");

    let naive = if input.pattern.len() > input.text.len() {
        0
    } else {
        input
            .text
            .windows(input.pattern.len())
            .filter(|w| *w == input.pattern.as_slice())
            .count()
    };
    assert_eq!(found.count(), naive);
});
