//! Text creation, insertion, range and repeat.

use super::common::{assert_terminated, text};
use vest::{Text, TextError};

#[test]
fn test_new_copies_and_terminates() {
    let t = text("ciao");
    assert_eq!(t.length(), 4);
    assert_eq!(t.as_bytes_with_nul(), b"ciao\0");
    assert_terminated(&t);
}

#[test]
fn test_new_len_is_zero_filled() {
    let t = Text::new_len(5).unwrap();
    assert_eq!(t.as_bytes(), &[0u8; 5]);
    assert_terminated(&t);
}

#[test]
fn test_insert_middle_front_end() {
    let mut t = text("ciao mondo");
    t.insert(4, ",").unwrap();
    assert_eq!(t, "ciao, mondo");

    t.insert(0, ">> ").unwrap();
    assert_eq!(t, ">> ciao, mondo");

    t.insert(t.length(), "!").unwrap();
    assert_eq!(t, ">> ciao, mondo!");
    assert_terminated(&t);
}

#[test]
fn test_insert_out_of_bounds() {
    let mut t = text("abc");
    assert_eq!(
        t.insert(4, "x").unwrap_err(),
        TextError::OutOfBounds { pos: 4, length: 3 }
    );
    assert_eq!(t, "abc");
}

#[test]
fn test_append_grows_past_initial_capacity() {
    let mut t = Text::empty().unwrap();
    for _ in 0..100 {
        t.append("abc").unwrap();
    }
    assert_eq!(t.length(), 300);
    assert!(t.capacity() > 300);
    assert!(t.starts_with("abcabc"));
    assert!(t.ends_with("cabc"));
    assert_terminated(&t);
}

#[test]
fn test_clear_keeps_capacity() {
    let mut t = Text::new("x".repeat(500)).unwrap();
    let capacity = t.capacity();
    t.clear().unwrap();
    assert!(t.is_empty());
    assert_eq!(t.capacity(), capacity);
    assert_terminated(&t);
}

#[test]
fn test_starts_ends_with() {
    let t = text("ciao mondo");
    assert!(t.starts_with("ciao"));
    assert!(t.starts_with(""));
    assert!(!t.starts_with("mondo"));
    assert!(t.ends_with("mondo"));
    assert!(!t.ends_with("ciao mondo!"));
}

#[test]
fn test_range_scenario() {
    let t = text("ciao mondo ciao");
    assert_eq!(t.range(10, 5).unwrap(), "mondo");
    assert_eq!(t.range(5, 10).unwrap(), "mondo");
}

#[test]
fn test_range_clamps() {
    let t = text("ciao");
    assert_eq!(t.range(2, 100).unwrap(), "ao");
    assert_eq!(t.range(100, 200).unwrap(), "");
    assert_eq!(t.range(3, 3).unwrap(), "");
    assert_terminated(&t.range(0, 4).unwrap());
}

#[test]
fn test_repeat() {
    let mut t = text("ab");
    t.repeat(3).unwrap();
    assert_eq!(t, "ababab");

    t.repeat(1).unwrap();
    assert_eq!(t, "ababab");

    t.repeat(0).unwrap();
    assert_eq!(t, "ababab");
    assert_terminated(&t);
}

#[test]
fn test_repeat_empty_stays_empty() {
    let mut t = Text::empty().unwrap();
    t.repeat(10).unwrap();
    assert!(t.is_empty());
}

#[test]
fn test_operations_chain() {
    let mut t = Text::empty().unwrap();
    t.append("a")
        .and_then(|t| t.append("b"))
        .and_then(|t| t.repeat(2))
        .unwrap();
    assert_eq!(t, "abab");
}

#[test]
fn test_clone_grows_independently() {
    let original = text("ciao");
    let mut copy = original.clone();
    for _ in 0..100 {
        copy.append("mondo").unwrap();
    }
    assert_eq!(copy.length(), 504);
    assert_eq!(original, "ciao");
    assert_terminated(&copy);
    assert_terminated(&original);
}
