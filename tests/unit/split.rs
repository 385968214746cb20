//! Destructive split.

use super::common::{text, token_strings, PHRASE};
use vest::Text;

#[test]
fn test_split_scenario() {
    let mut t = text("hi this is a message");
    let tokens = t.split(" ").unwrap();
    assert_eq!(token_strings(&tokens), ["hi", "this", "is", "a", "message"]);
    Text::list_free(tokens);
}

#[test]
fn test_split_collapses_runs() {
    let mut t = text("  a,, b ,c  ");
    let tokens = t.split(" ,").unwrap();
    assert_eq!(token_strings(&tokens), ["a", "b", "c"]);
}

#[test]
fn test_split_zeroes_separators() {
    let mut t = text("a b");
    let length = t.length();
    t.split(" ").unwrap();
    assert_eq!(t.length(), length);
    assert_eq!(t.as_bytes(), b"a\0b");

    // zero bytes count as separators, so a second pass agrees
    let again = t.split(" ").unwrap();
    assert_eq!(token_strings(&again), ["a", "b"]);
}

#[test]
fn test_split_degenerate_inputs() {
    let mut empty = Text::empty().unwrap();
    assert!(empty.split(" ").unwrap().is_empty());

    let mut only = text("   ");
    assert!(only.split(" ").unwrap().is_empty());

    let mut whole = text(PHRASE);
    let tokens = whole.split("").unwrap();
    assert_eq!(tokens.count(), 1);
    assert_eq!(tokens.as_slice()[0], PHRASE);
}

#[test]
fn test_split_many_tokens() {
    let mut t = Text::new("x ".repeat(300)).unwrap();
    let tokens = t.split(" ").unwrap();
    assert_eq!(tokens.count(), 300);
    assert!(tokens.iter().all(|token| *token == "x"));
}

#[test]
fn test_split_scans_past_zero_bytes() {
    let mut t = Text::new(b"a\0b c").unwrap();
    let tokens = t.split(" ").unwrap();
    assert_eq!(token_strings(&tokens), ["a", "b", "c"]);
    // the space is zeroed as well as the byte that ends "a"
    assert_eq!(t.as_bytes(), b"a\0b\0c");
}
