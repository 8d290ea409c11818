//! Word counting and reading-time rounding
//!
//! This crate holds the pure part of reading-time estimation: a single linear
//! scan that counts words between configurable boundary bytes, and the integer
//! arithmetic that turns a word count into whole minutes. It never allocates
//! and builds without `std`.
//!
//! # Example
//!
//! ```rust
//! use core::num::NonZeroU32;
//! use readtime_core::{count_words, minutes_for, Whitespace};
//!
//! let words = count_words(b"  word  word    word ", &Whitespace);
//! assert_eq!(words, 3);
//!
//! let wpm = NonZeroU32::new(200).unwrap();
//! assert_eq!(minutes_for(words, wpm), 1);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod boundary;
pub mod scan;
pub mod timing;

pub use boundary::{Whitespace, WhitespaceOrPunctuation, WordBoundary};
pub use scan::{count_words, trim_bounds};
pub use timing::{duration_for, minutes_for, SECONDS_PER_MINUTE};
