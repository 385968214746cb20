// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for vest container arithmetic.
//!
//! This standalone crate extracts the capacity growth rule and the clamping
//! rules of `Container` and `Text::range`, and proves them with Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Growth**: the grown capacity is a doubling of the old one and exceeds the count
//! 2. **Position clamp**: clamped positions are always inside a non-empty container
//! 3. **Range clamp**: clamped ranges are ordered, in bounds and symmetric
//! 4. **Replace offsets**: shifted offsets are exact for non-overlapping matches and
//!    saturate at the base otherwise

/// Capacity reserved by the first allocation.
pub const INIT_CAPACITY: usize = 128;

// ============================================================================
// CONTAINER ARITHMETIC (mirrors src/container.rs)
// ============================================================================

/// Capacity after making room for `count` elements, or `None` on overflow.
///
/// Unchanged when `count < capacity`; otherwise doubled until it exceeds
/// `count`. A zero capacity starts from [`INIT_CAPACITY`].
pub fn grown_capacity(capacity: usize, count: usize) -> Option<usize> {
    if count < capacity {
        return Some(capacity);
    }

    let mut grown = if capacity == 0 { INIT_CAPACITY } else { capacity };
    while count >= grown {
        grown = grown.checked_mul(2)?;
    }
    Some(grown)
}

/// Slot index for element `pos` in a container of `count` elements.
pub fn clamp_position(count: usize, pos: usize) -> usize {
    if pos == 0 {
        return 0;
    }
    if pos >= count {
        return count.saturating_sub(1);
    }
    pos
}

/// `[start, end)` clamped to `length` and put in order.
pub fn clamp_range(length: usize, start: usize, end: usize) -> (usize, usize) {
    let start = start.min(length);
    let end = end.min(length);
    if start > end {
        (end, start)
    } else {
        (start, end)
    }
}

/// Where the `replaced`-th replacement lands once earlier ones have shifted
/// the text, saturating at the base.
pub fn shifted_offset(offset: usize, replaced: usize, old: usize, new: usize) -> usize {
    offset
        .saturating_add(replaced.saturating_mul(new))
        .saturating_sub(replaced.saturating_mul(old))
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Verify growth keeps count below capacity and only ever doubles.
    #[kani::proof]
    #[kani::unwind(66)] // at most 64 doublings of a usize
    fn verify_grown_capacity() {
        let exponent: u32 = kani::any_where(|&e| e >= 7 && e < usize::BITS);
        let capacity = 1usize << exponent;
        let count: usize = kani::any();

        match grown_capacity(capacity, count) {
            Some(grown) => {
                kani::assert(count < grown, "count must stay below capacity");
                kani::assert(grown >= capacity, "capacity must never shrink");
                kani::assert(grown.is_power_of_two(), "capacity must stay a doubling");
            }
            None => {
                kani::assert(
                    count >= 1usize << (usize::BITS - 1),
                    "overflow only for counts past the top doubling",
                );
            }
        }
    }

    /// Verify a fresh container starts from INIT_CAPACITY.
    #[kani::proof]
    #[kani::unwind(66)]
    fn verify_initial_growth() {
        let count: usize = kani::any_where(|&c| c < INIT_CAPACITY);
        kani::assert(
            grown_capacity(0, count) == Some(INIT_CAPACITY),
            "small counts fit the initial capacity",
        );
    }

    /// Verify clamped positions are in bounds.
    #[kani::proof]
    fn verify_clamp_position() {
        let count: usize = kani::any();
        let pos: usize = kani::any();
        let slot = clamp_position(count, pos);

        if count == 0 {
            kani::assert(slot == 0, "empty container maps to the base");
        } else {
            kani::assert(slot < count, "clamped position must be in bounds");
            if pos < count {
                kani::assert(slot == pos, "in-range positions are untouched");
            }
        }
    }

    /// Verify range clamping is ordered, bounded and symmetric.
    #[kani::proof]
    fn verify_clamp_range() {
        let length: usize = kani::any();
        let a: usize = kani::any();
        let b: usize = kani::any();

        let (start, end) = clamp_range(length, a, b);
        kani::assert(start <= end, "range must be ordered");
        kani::assert(end <= length, "range must be in bounds");
        kani::assert(
            clamp_range(length, b, a) == (start, end),
            "range must not depend on argument order",
        );
    }

    /// Verify shifted replacement offsets are exact when earlier matches sit
    /// at least `old` bytes apart, and saturate at the base otherwise.
    #[kani::proof]
    fn verify_shifted_offset() {
        let old: usize = kani::any_where(|&o| o > 0 && o <= 16);
        let new: usize = kani::any_where(|&n| n <= 16);
        let replaced: usize = kani::any_where(|&r| r <= 64);
        let offset: usize = kani::any_where(|&o| o <= 4096);

        let shifted = shifted_offset(offset, replaced, old, new);
        kani::assert(
            shifted <= offset + replaced * new,
            "shifted offset never passes the grown position",
        );
        if offset >= replaced * old {
            kani::assert(
                shifted == offset + replaced * new - replaced * old,
                "non-overlapping matches shift exactly",
            );
        }
        if offset + replaced * new < replaced * old {
            kani::assert(shifted == 0, "overlapping matches saturate at the base");
        }
    }
}
