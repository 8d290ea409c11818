//! Public API for reading-time estimation
//!
//! Counts the words in a text and converts the count into a rounded,
//! whole-minute reading time. Word boundaries and reading speed are
//! configurable; everything else is a pure function of the input.
//!
//! ```rust
//! use readtime_api::{estimate, estimate_with, EstimateOption};
//!
//! let result = estimate("word  word    word");
//! assert_eq!(result.words, 3);
//! assert_eq!(result.text, "1 min read");
//!
//! let text = "word ".repeat(200);
//! let result = estimate_with(&text, [EstimateOption::words_per_minute(100)]).unwrap();
//! assert_eq!(result.to_string(), "2 min read");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use readtime_core::{count_words, duration_for, minutes_for};

// Re-export key types
pub use config::{Config, ConfigBuilder, EstimateOption};
pub use dto::ReadingTime;
pub use error::{ApiError, Result};
pub use readtime_core::{Whitespace, WhitespaceOrPunctuation, WordBoundary};

/// Main entry point for reading-time estimation
///
/// Holds a validated [`Config`] and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    config: Config,
}

impl Estimator {
    /// Create an estimator with the default configuration (200 wpm, whitespace)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an estimator with a custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Estimate the reading time of `text`
    pub fn estimate(&self, text: impl AsRef<[u8]>) -> ReadingTime {
        let text = text.as_ref();
        if text.is_empty() {
            return ReadingTime::zero();
        }

        let words = count_words(text, self.config.word_bound());
        let minutes = minutes_for(words, self.config.words_per_minute);
        log::trace!(
            "counted {words} words in {} bytes at {} wpm: {minutes} min",
            text.len(),
            self.config.words_per_minute
        );

        ReadingTime::new(words, minutes, duration_for(minutes))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// Convenience functions

/// Estimate with the default configuration
pub fn estimate(text: impl AsRef<[u8]>) -> ReadingTime {
    Estimator::new().estimate(text)
}

/// Estimate with `options` applied in order on top of the defaults
///
/// Empty text returns [`ReadingTime::zero`] before any option is looked at.
///
/// # Errors
///
/// Returns [`ApiError::InvalidReadingSpeed`] if the options leave the reading
/// speed at zero.
pub fn estimate_with<I>(text: impl AsRef<[u8]>, options: I) -> Result<ReadingTime>
where
    I: IntoIterator<Item = EstimateOption>,
{
    let text = text.as_ref();
    if text.is_empty() {
        return Ok(ReadingTime::zero());
    }

    let config = Config::from_options(options)?;
    Ok(Estimator::with_config(config).estimate(text))
}
