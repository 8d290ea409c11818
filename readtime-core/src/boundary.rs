//! Word-boundary classification

/// Decides whether a byte separates words.
///
/// Implemented for the built-in classifiers below and for any
/// `Fn(u8) -> bool`, so callers can plug in a closure:
///
/// ```rust
/// use readtime_core::{count_words, WordBoundary};
///
/// let commas = |b: u8| b == b',';
/// assert!(commas.is_bound(b','));
/// assert_eq!(count_words(b"a,b,,c", &commas), 3);
/// ```
pub trait WordBoundary: Send + Sync {
    /// Returns `true` if `byte` is a word boundary
    fn is_bound(&self, byte: u8) -> bool;
}

impl<F> WordBoundary for F
where
    F: Fn(u8) -> bool + Send + Sync,
{
    #[inline]
    fn is_bound(&self, byte: u8) -> bool {
        self(byte)
    }
}

/// Space, newline, carriage return and tab.
///
/// This is the default classifier. Other ASCII whitespace (vertical tab, form
/// feed) is treated as part of a word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Whitespace;

impl WordBoundary for Whitespace {
    #[inline]
    fn is_bound(&self, byte: u8) -> bool {
        matches!(byte, b' ' | b'\n' | b'\r' | b'\t')
    }
}

/// [`Whitespace`] plus ASCII punctuation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WhitespaceOrPunctuation;

impl WordBoundary for WhitespaceOrPunctuation {
    #[inline]
    fn is_bound(&self, byte: u8) -> bool {
        Whitespace.is_bound(byte) || byte.is_ascii_punctuation()
    }
}
