//! Boundary-run scanning

use crate::boundary::WordBoundary;

/// Strips the leading and trailing boundary runs from `text`.
///
/// Returns an empty slice when every byte is a boundary.
pub fn trim_bounds<'a, B>(text: &'a [u8], bound: &B) -> &'a [u8]
where
    B: WordBoundary + ?Sized,
{
    let Some(start) = text.iter().position(|&b| !bound.is_bound(b)) else {
        return &[];
    };
    // A non-boundary byte exists, so the reverse search finds one at or after `start`.
    let end = text
        .iter()
        .rposition(|&b| !bound.is_bound(b))
        .map_or(start + 1, |last| last + 1);

    &text[start..end]
}

/// Counts the words in `text`.
///
/// A word is a maximal run of bytes for which `bound` returns `false`. Runs of
/// consecutive boundaries collapse into a single separator, and boundaries at
/// either end are ignored. The scan is a single forward pass.
pub fn count_words<B>(text: &[u8], bound: &B) -> usize
where
    B: WordBoundary + ?Sized,
{
    let text = trim_bounds(text, bound);
    let len = text.len();

    let mut words = 0;
    let mut i = 0;
    while i < len {
        while i < len && !bound.is_bound(text[i]) {
            i += 1;
        }
        words += 1;

        while i < len && bound.is_bound(text[i]) {
            i += 1;
        }
    }

    words
}
