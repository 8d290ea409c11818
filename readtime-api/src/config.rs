//! High-level configuration API

use crate::error::{ApiError, Result};
use readtime_core::{Whitespace, WordBoundary};
use std::fmt;
use std::num::NonZeroU32;
use std::sync::Arc;

/// Default configuration constants
pub mod defaults {
    use std::num::NonZeroU32;

    /// Words per minute an average reader gets through
    pub const WORDS_PER_MINUTE: NonZeroU32 = match NonZeroU32::new(200) {
        Some(wpm) => wpm,
        None => unreachable!(),
    };
}

/// Estimation configuration
///
/// Built once and then read-only. Cheap to clone: the boundary predicate is
/// shared.
#[derive(Clone)]
pub struct Config {
    pub(crate) words_per_minute: NonZeroU32,
    pub(crate) word_bound: Arc<dyn WordBoundary>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words_per_minute: defaults::WORDS_PER_MINUTE,
            word_bound: Arc::new(Whitespace),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("words_per_minute", &self.words_per_minute)
            .field("word_bound", &"<dyn WordBoundary>")
            .finish()
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Build a configuration from defaults plus `options`, applied in order
    pub fn from_options<I>(options: I) -> Result<Self>
    where
        I: IntoIterator<Item = EstimateOption>,
    {
        let mut builder = Self::builder();
        let mut applied = 0usize;
        for option in options {
            builder = builder.apply(option);
            applied += 1;
        }
        log::debug!("applied {applied} estimate options");
        builder.build()
    }

    /// Configured reading speed
    pub fn words_per_minute(&self) -> NonZeroU32 {
        self.words_per_minute
    }

    /// Configured boundary predicate
    pub fn word_bound(&self) -> &dyn WordBoundary {
        self.word_bound.as_ref()
    }
}

/// A single override applied on top of the defaults
#[derive(Clone)]
pub enum EstimateOption {
    /// Replace the reading speed
    WordsPerMinute(u32),
    /// Replace the word-boundary predicate
    WordBound(Arc<dyn WordBoundary>),
}

impl EstimateOption {
    /// Override the reading speed
    pub fn words_per_minute(words_per_minute: u32) -> Self {
        EstimateOption::WordsPerMinute(words_per_minute)
    }

    /// Override the word-boundary predicate
    pub fn word_bound(bound: impl WordBoundary + 'static) -> Self {
        EstimateOption::WordBound(Arc::new(bound))
    }
}

impl fmt::Debug for EstimateOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimateOption::WordsPerMinute(wpm) => {
                f.debug_tuple("WordsPerMinute").field(wpm).finish()
            }
            EstimateOption::WordBound(_) => f
                .debug_tuple("WordBound")
                .field(&"<dyn WordBoundary>")
                .finish(),
        }
    }
}

/// Configuration builder
///
/// Setters overwrite each other, so the last call for a field wins.
#[derive(Default)]
pub struct ConfigBuilder {
    words_per_minute: Option<u32>,
    word_bound: Option<Arc<dyn WordBoundary>>,
}

impl fmt::Debug for ConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigBuilder")
            .field("words_per_minute", &self.words_per_minute)
            .field("custom_word_bound", &self.word_bound.is_some())
            .finish()
    }
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reading speed in words per minute
    pub fn words_per_minute(mut self, words_per_minute: u32) -> Self {
        self.words_per_minute = Some(words_per_minute);
        self
    }

    /// Set the word-boundary predicate
    pub fn word_bound(mut self, bound: impl WordBoundary + 'static) -> Self {
        let bound: Arc<dyn WordBoundary> = Arc::new(bound);
        self.word_bound = Some(bound);
        self
    }

    /// Apply one override
    pub fn apply(mut self, option: EstimateOption) -> Self {
        match option {
            EstimateOption::WordsPerMinute(wpm) => self.words_per_minute = Some(wpm),
            EstimateOption::WordBound(bound) => self.word_bound = Some(bound),
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(wpm) = self.words_per_minute {
            config.words_per_minute =
                NonZeroU32::new(wpm).ok_or(ApiError::InvalidReadingSpeed(wpm))?;
        }

        if let Some(bound) = self.word_bound {
            config.word_bound = bound;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use readtime_core::WhitespaceOrPunctuation;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.words_per_minute().get(), 200);
        assert!(config.word_bound().is_bound(b' '));
        assert!(!config.word_bound().is_bound(b','));
    }

    #[test]
    fn test_builder_setters() {
        let config = Config::builder()
            .words_per_minute(350)
            .word_bound(WhitespaceOrPunctuation)
            .build()
            .unwrap();

        assert_eq!(config.words_per_minute().get(), 350);
        assert!(config.word_bound().is_bound(b','));
    }

    #[test]
    fn test_builder_rejects_zero_speed() {
        let result = ConfigBuilder::new().words_per_minute(0).build();
        assert!(matches!(result, Err(ApiError::InvalidReadingSpeed(0))));
    }

    #[test]
    fn test_options_later_wins() {
        let config = Config::from_options([
            EstimateOption::words_per_minute(100),
            EstimateOption::word_bound(|b: u8| b == b'|'),
            EstimateOption::words_per_minute(300),
        ])
        .unwrap();

        assert_eq!(config.words_per_minute().get(), 300);
        assert!(config.word_bound().is_bound(b'|'));
        assert!(!config.word_bound().is_bound(b' '));
    }

    #[test]
    fn test_later_option_fixes_earlier_zero() {
        let config = Config::from_options([
            EstimateOption::words_per_minute(0),
            EstimateOption::words_per_minute(250),
        ])
        .unwrap();
        assert_eq!(config.words_per_minute().get(), 250);
    }

    #[test]
    fn test_no_options_is_default() {
        let config = Config::from_options(Vec::new()).unwrap();
        assert_eq!(config.words_per_minute(), defaults::WORDS_PER_MINUTE);
    }

    #[test]
    fn test_debug_hides_predicate() {
        let debug = format!("{:?}", Config::default());
        assert!(debug.contains("words_per_minute: 200"));
        assert!(debug.contains("<dyn WordBoundary>"));
    }
}
