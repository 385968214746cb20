//! Text buffer properties, checked against the oracles.

use super::common::assert_terminated;
use super::oracles::{oracle_find, oracle_replace, oracle_split};
use proptest::prelude::*;
use vest::Text;

/// Bytes over a small alphabet so patterns actually occur.
fn bytes_strategy(max: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"abc \0".to_vec()), 0..max)
}

/// Patterns with no proper prefix that is also a suffix, so matches never overlap.
fn non_overlapping_pattern() -> impl Strategy<Value = Vec<u8>> {
    prop::sample::select(vec![b"a".to_vec(), b"ab".to_vec(), b"abc".to_vec(), b"b c".to_vec()])
}

proptest! {
    /// Property: new() round-trips and leaves a terminator behind.
    #[test]
    fn prop_new_round_trips(data in bytes_strategy(400)) {
        let t = Text::new(&data).unwrap();
        prop_assert_eq!(t.as_bytes(), data.as_slice());
        assert_terminated(&t);
    }

    /// Property: insert adds exactly the inserted length and keeps both halves.
    #[test]
    fn prop_insert_length(
        data in bytes_strategy(300),
        insert in bytes_strategy(300),
        at in any::<prop::sample::Index>(),
    ) {
        let pos = at.index(data.len() + 1);
        let mut t = Text::new(&data).unwrap();
        t.insert(pos, &insert).unwrap();

        prop_assert_eq!(t.length(), data.len() + insert.len());
        let mut expected = data[..pos].to_vec();
        expected.extend_from_slice(&insert);
        expected.extend_from_slice(&data[pos..]);
        prop_assert_eq!(t.as_bytes(), expected.as_slice());
        assert_terminated(&t);
    }

    /// Property: KMP find agrees with a naive scan.
    #[test]
    fn prop_find_matches_naive(
        data in bytes_strategy(300),
        pat in prop::collection::vec(prop::sample::select(b"abc".to_vec()), 1..4),
    ) {
        let t = Text::new(&data).unwrap();
        let found = t.find(&pat).unwrap();
        let expected = oracle_find(&data, &pat);
        prop_assert_eq!(found.as_slice(), expected.as_slice());
    }

    /// Property: for non-self-overlapping patterns, replacing all changes the
    /// length by occurrences * (new - old) and matches the oracle.
    #[test]
    fn prop_replace_length(
        data in bytes_strategy(300),
        old in non_overlapping_pattern(),
        new in bytes_strategy(5),
    ) {
        prop_assume!(old.len() <= data.len());
        let occurrences = oracle_find(&data, &old).len();

        let mut t = Text::new(&data).unwrap();
        t.replace(&old, &new, None).unwrap();

        let expected_len = data.len() + occurrences * new.len() - occurrences * old.len();
        prop_assert_eq!(t.length(), expected_len);
        let expected = oracle_replace(&data, &old, &new, usize::MAX);
        prop_assert_eq!(t.as_bytes(), expected.as_slice());
        assert_terminated(&t);
    }

    /// Property: with self-overlapping patterns and a replacement at least as
    /// long, every occurrence find reports still counts once in the length.
    #[test]
    fn prop_replace_length_overlapping(
        data in prop::collection::vec(prop::sample::select(b"ab".to_vec()), 0..200),
        old in prop::sample::select(vec![b"aa".to_vec(), b"aba".to_vec(), b"aaa".to_vec()]),
        extra in bytes_strategy(4),
    ) {
        prop_assume!(old.len() <= data.len());
        let mut new = old.clone();
        new.extend_from_slice(&extra);
        let occurrences = oracle_find(&data, &old).len();

        let mut t = Text::new(&data).unwrap();
        t.replace(&old, &new, None).unwrap();

        prop_assert_eq!(t.length(), data.len() + occurrences * extra.len());
        let expected = oracle_replace(&data, &old, &new, usize::MAX);
        prop_assert_eq!(t.as_bytes(), expected.as_slice());
        assert_terminated(&t);
    }

    /// Property: replacing the first k occurrences, with any pattern and any
    /// replacement length, matches the oracle.
    #[test]
    fn prop_replace_limited_matches_oracle(
        data in bytes_strategy(200),
        old in prop::collection::vec(prop::sample::select(b"ab".to_vec()), 1..4),
        new in bytes_strategy(6),
        k in 0usize..6,
    ) {
        prop_assume!(old.len() <= data.len());

        let mut t = Text::new(&data).unwrap();
        t.replace(&old, &new, Some(k)).unwrap();

        let expected = oracle_replace(&data, &old, &new, k);
        prop_assert_eq!(t.as_bytes(), expected.as_slice());
        assert_terminated(&t);
    }

    /// Property: range(a, b) == range(b, a), and its length is the clamped gap.
    #[test]
    fn prop_range_symmetric(data in bytes_strategy(200), a in 0usize..300, b in 0usize..300) {
        let t = Text::new(&data).unwrap();
        let forward = t.range(a, b).unwrap();
        let backward = t.range(b, a).unwrap();
        prop_assert_eq!(&forward, &backward);

        let (lo, hi) = (a.min(b).min(data.len()), a.max(b).min(data.len()));
        prop_assert_eq!(forward.length(), hi - lo);
        prop_assert_eq!(forward.as_bytes(), &data[lo..hi]);
    }

    /// Property: repeat(n) is n back-to-back copies; repeat(0) is a no-op.
    #[test]
    fn prop_repeat(data in bytes_strategy(60), n in 0usize..8) {
        let mut t = Text::new(&data).unwrap();
        t.repeat(n).unwrap();

        let expected = if n == 0 { data.clone() } else { data.repeat(n) };
        prop_assert_eq!(t.as_bytes(), expected.as_slice());
        assert_terminated(&t);
    }

    /// Property: split yields the oracle tokens and keeps the source length.
    #[test]
    fn prop_split_matches_oracle(data in bytes_strategy(300), seps in bytes_strategy(3)) {
        let mut t = Text::new(&data).unwrap();
        let tokens = t.split(&seps).unwrap();

        prop_assert_eq!(t.length(), data.len());
        let got: Vec<Vec<u8>> = tokens.iter().map(|token| token.as_bytes().to_vec()).collect();
        prop_assert_eq!(got, oracle_split(&data, &seps));
    }
}
