//! Word count to reading time

use core::num::NonZeroU32;
use core::time::Duration;

/// Seconds in one minute of reading time
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Whole minutes needed to read `words` at `words_per_minute`.
///
/// Any remainder rounds up to a full extra minute, so a non-zero word count
/// always takes at least one minute. Integer arithmetic only.
#[inline]
pub fn minutes_for(words: usize, words_per_minute: NonZeroU32) -> u64 {
    // usize fits in u64 on every supported target
    (words as u64).div_ceil(u64::from(words_per_minute.get()))
}

/// A whole-minute duration, saturating at `u64::MAX` seconds
#[inline]
pub fn duration_for(minutes: u64) -> Duration {
    Duration::from_secs(minutes.saturating_mul(SECONDS_PER_MINUTE))
}
