//! Data Transfer Objects for API

use std::fmt;
use std::time::Duration;

/// Estimated reading time for one text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReadingTime {
    /// Display form, e.g. `"3 min read"`
    pub text: String,
    /// Whole-minute reading duration
    pub duration: Duration,
    /// Number of words counted
    pub words: usize,
}

impl ReadingTime {
    /// Result for text with no words
    pub fn zero() -> Self {
        Self::new(0, 0, Duration::ZERO)
    }

    pub(crate) fn new(words: usize, minutes: u64, duration: Duration) -> Self {
        Self {
            text: format!("{minutes} min read"),
            duration,
            words,
        }
    }

    /// Reading time in whole minutes
    pub fn minutes(&self) -> u64 {
        self.duration.as_secs() / readtime_core::SECONDS_PER_MINUTE
    }

    /// Serialize to a JSON string
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<ReadingTime> for Duration {
    fn from(value: ReadingTime) -> Self {
        value.duration
    }
}
