//! Shared test utilities and fixtures.

#![allow(dead_code)]

use vest::{Text, TextList};

// ============================================================================
// FIXTURES
// ============================================================================

/// Sample used by the search scenarios: `ABA` occurs at 0, 2 and 7.
pub const ABA_SAMPLE: &str = "ABABACCABA";

/// Space-separated phrase used by the split scenarios.
pub const PHRASE: &str = "questa è una stringa di prova";

// ============================================================================
// HELPERS
// ============================================================================

/// Build a [`Text`] from a literal, panicking on allocation failure.
pub fn text(s: &str) -> Text {
    Text::new(s).expect("allocate text")
}

/// Collect split tokens as owned strings.
pub fn token_strings(tokens: &TextList) -> Vec<String> {
    tokens.iter().map(ToString::to_string).collect()
}

/// Check that the hidden terminator is where it belongs.
pub fn assert_terminated(text: &Text) {
    let with_nul = text.as_bytes_with_nul();
    assert_eq!(with_nul.len(), text.length() + 1, "terminator slot missing");
    assert_eq!(with_nul[text.length()], 0, "terminator is not zero");
    assert!(text.capacity() > text.length(), "capacity must exceed length");
}
