// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for in-place replace.
//!
//! Replace shifts tails in both directions through the container copy
//! primitives. It must never panic, must keep the terminator, and a growing
//! replacement must add one step per occurrence `find` reports.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vest::Text;

#[derive(Debug, Arbitrary)]
struct ReplaceInput {
    text: Vec<u8>,
    old: Vec<u8>,
    new: Vec<u8>,
    count: Option<u8>,
}

fuzz_target!(|input: ReplaceInput| {
    // Cap lengths to avoid timeouts
    let source = &input.text[..input.text.len().min(4096)];
    let new = &input.new[..input.new.len().min(64)];

    let mut text = match Text::new(source) {
        Ok(t) => t,
        Err(_) => return,
    };

    let count = input.count.map(usize::from);
    if text.replace(&input.old, new, count).is_err() {
        assert!(input.old.is_empty() || input.old.len() > source.len());
        assert_eq!(text.as_bytes(), source, "failed replace modified the text");
        return;
    }

    let with_nul = text.as_bytes_with_nul();
    assert_eq!(with_nul.len(), text.length() + 1);
    assert_eq!(with_nul[text.length()], 0, "terminator lost");

    // growing never clamps, so every reported occurrence up to the limit
    // adds exactly one step; shrinking may clamp overlapping removals
    let occurrences = source
        .windows(input.old.len())
        .filter(|w| *w == input.old.as_slice())
        .count();
    let replaced = count.map_or(occurrences, |limit| occurrences.min(limit));
    if new.len() >= input.old.len() {
        let step = new.len() - input.old.len();
        assert_eq!(
            text.length(),
            source.len() + replaced * step,
            "length changed by a partial replacement"
        );
    } else {
        assert!(text.length() <= source.len(), "shrinking replace grew the text");
    }
});
