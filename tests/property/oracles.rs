//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations used as ground truth for the
//! buffer operations.

/// Every start offset of `pat` in `text`, overlaps included. O(nm).
pub fn oracle_find(text: &[u8], pat: &[u8]) -> Vec<usize> {
    if pat.is_empty() || pat.len() > text.len() {
        return Vec::new();
    }
    text.windows(pat.len())
        .enumerate()
        .filter(|(_, window)| *window == pat)
        .map(|(i, _)| i)
        .collect()
}

/// Replace the first `limit` occurrences reported by [`oracle_find`] with
/// `Vec::splice`, moving each offset by the length change before it.
/// Moved offsets saturate at 0; the removed span is clamped to the buffer.
pub fn oracle_replace(text: &[u8], old: &[u8], new: &[u8], limit: usize) -> Vec<u8> {
    let mut out = text.to_vec();
    for (r, offset) in oracle_find(text, old).into_iter().take(limit).enumerate() {
        let at = (offset + r * new.len()).saturating_sub(r * old.len()).min(out.len());
        let end = (at + old.len()).min(out.len());
        out.splice(at..end, new.iter().copied());
    }
    out
}

/// Non-empty runs of bytes that are neither zero nor in `separators`.
pub fn oracle_split(text: &[u8], separators: &[u8]) -> Vec<Vec<u8>> {
    text.split(|b| *b == 0 || separators.contains(b))
        .filter(|token| !token.is_empty())
        .map(<[u8]>::to_vec)
        .collect()
}
