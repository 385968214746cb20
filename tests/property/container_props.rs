//! Container growth properties.

use proptest::prelude::*;
use vest::{Container, INIT_CAPACITY};

proptest! {
    /// Property: after any resize sequence, count <= capacity, capacity is a
    /// doubling of the initial capacity, and it never shrank.
    #[test]
    fn prop_resize_keeps_count_below_capacity(
        counts in prop::collection::vec(0usize..5000, 1..20)
    ) {
        let mut c: Container<u8> = Container::new().unwrap();
        let mut previous = c.capacity();

        for count in counts {
            c.resize(count).unwrap();
            prop_assert_eq!(c.count(), count);
            prop_assert!(c.count() < c.capacity());
            prop_assert!(c.capacity() >= previous);
            prop_assert!(c.capacity().is_power_of_two());
            prop_assert!(c.capacity() >= INIT_CAPACITY);
            previous = c.capacity();
        }
    }

    /// Property: position() is the identity inside the container and clamps
    /// to the last element outside.
    #[test]
    fn prop_position_clamps(len in 1usize..500, pos in 0usize..1000) {
        let c: Container<u8> = Container::new_len(len).unwrap();
        let expected = if pos >= len { len - 1 } else { pos };
        prop_assert_eq!(c.position(pos), expected);
    }

    /// Property: copy_within matches slice::copy_within for in-range runs.
    #[test]
    fn prop_copy_within_matches_slice(
        data in prop::collection::vec(any::<u8>(), 1..200),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
        l in any::<prop::sample::Index>(),
    ) {
        let src = a.index(data.len());
        let dest = b.index(data.len());
        let len = l.index(data.len() - src.max(dest) + 1);

        let mut c: Container<u8> = Container::new_len(data.len()).unwrap();
        c.copy(0, &data);
        c.copy_within(dest, src, len).unwrap();

        let mut expected = data.clone();
        expected.copy_within(src..src + len, dest);
        prop_assert_eq!(c.as_slice(), expected.as_slice());
    }
}
