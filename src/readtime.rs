//! Reading-time estimation.
//!
//! Words are whitespace-delimited runs of the stripped body text; minutes
//! are the ceiling of `words / words_per_minute`. The label and cup count
//! feed the listing and post headers directly:
//!
//! ```text
//! 190 words  @ 200 wpm → 1 min,  "1 min read",  1 cup
//! 2000 words @ 200 wpm → 10 min, "10 min read", 1 cup
//! 2200 words @ 200 wpm → 11 min, "11 min read", 2 cups
//! ```
//!
//! Estimation never fails: an empty body yields 0 minutes with a "0 min
//! read" label and no cups.

use crate::types::ReadingTime;

/// Estimate reading time for already-stripped plain text.
pub fn estimate(plain_text: &str, words_per_minute: u32) -> ReadingTime {
    let words = plain_text.split_whitespace().count() as u32;
    let minutes = words.div_ceil(words_per_minute);
    ReadingTime {
        minutes,
        text: format!("{minutes} min read"),
        cups: minutes.div_ceil(10),
    }
}
