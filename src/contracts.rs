//! Runtime contracts for containers and text buffers.
//!
//! Debug-mode assertions that re-check the structural invariants after every
//! mutating operation. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Fire at the operation that broke the invariant, not at the next reader
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Invariant                                   |
//! |------------------------------|---------------------------------------------|
//! | `check_count_within_capacity`| `count <= capacity`, slots materialised     |
//! | `check_terminator_present`   | zero byte at offset `length` of a text      |
//! | `check_offsets_ascending`    | search results strictly ascending, in range |
//!
//! # Usage
//!
//! ```ignore
//! use vest::contracts::*;
//!
//! // In debug builds, this panics if invariant is violated
//! check_terminator_present(text.as_bytes_with_nul());
//!
//! // In release builds, this is a no-op
//! ```

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The base capacity must be able to hold at least one text byte plus its
/// terminator, and doubling from it must stay a power of two.
const _: () = {
    use crate::container::INIT_CAPACITY;

    assert!(INIT_CAPACITY >= 2);
    assert!(INIT_CAPACITY.is_power_of_two());
};

// ============================================================================
// CONTAINER CONTRACTS
// ============================================================================

/// Check that a container's logical count fits in its capacity and that
/// every logical slot is backed by storage.
///
/// # Panics (debug builds only)
/// Panics if `count > capacity` or `count > materialised`.
#[inline]
pub fn check_count_within_capacity(count: usize, capacity: usize, materialised: usize) {
    debug_assert!(
        count <= capacity,
        "Contract violation: count {} > capacity {}",
        count,
        capacity
    );
    debug_assert!(
        count <= materialised,
        "Contract violation: count {} > materialised slots {}",
        count,
        materialised
    );
}

// ============================================================================
// TEXT CONTRACTS
// ============================================================================

/// Check that a text buffer, viewed with its terminator, ends in a zero byte.
///
/// # Panics (debug builds only)
/// Panics if the slice is empty or its last byte is non-zero.
#[inline]
pub fn check_terminator_present(with_nul: &[u8]) {
    debug_assert!(
        with_nul.last() == Some(&0),
        "Contract violation: missing terminator after {} bytes",
        with_nul.len().saturating_sub(1)
    );
}

// ============================================================================
// SEARCH CONTRACTS
// ============================================================================

/// Check that match offsets are strictly ascending and that every match fits
/// inside the searched text.
///
/// # Panics (debug builds only)
/// Panics if two offsets are out of order or a match runs past `text_len`.
#[inline]
pub fn check_offsets_ascending(offsets: &[usize], pattern_len: usize, text_len: usize) {
    for i in 1..offsets.len() {
        debug_assert!(
            offsets[i - 1] < offsets[i],
            "Contract violation: offsets[{}] {} >= offsets[{}] {}",
            i - 1,
            offsets[i - 1],
            i,
            offsets[i]
        );
    }

    if let Some(&last) = offsets.last() {
        debug_assert!(
            last + pattern_len <= text_len,
            "Contract violation: match at {} (len {}) runs past text length {}",
            last,
            pattern_len,
            text_len
        );
    }
}
