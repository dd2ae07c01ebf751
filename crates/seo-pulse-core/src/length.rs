//! Content length classification.
//!
//! Buckets a word count into one of five bands, each with a fixed score and
//! feedback line. Breakpoints come from [`LengthBands`]; with the defaults:
//!
//! | Words      | Band        | Score |
//! |------------|-------------|-------|
//! | < 150      | too short   | 30    |
//! | 150--299   | acceptable  | 60    |
//! | 300--1000  | excellent   | 100   |
//! | 1001--1500 | good        | 85    |
//! | > 1500     | very long   | 70    |

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scoring::LengthBands;
use crate::text;

/// Length band for a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LengthBand {
    /// Below the acceptable minimum.
    TooShort,
    /// Long enough, but short of the ideal range.
    Acceptable,
    /// Within the ideal range.
    Excellent,
    /// Past the ideal range but not excessive.
    Good,
    /// Long enough to need sectioning.
    VeryLong,
}

impl LengthBand {
    /// Place `words` into a band.
    pub const fn classify(words: usize, bands: &LengthBands) -> Self {
        if words < bands.acceptable_min {
            Self::TooShort
        } else if words < bands.excellent_min {
            Self::Acceptable
        } else if words <= bands.excellent_max {
            Self::Excellent
        } else if words <= bands.good_max {
            Self::Good
        } else {
            Self::VeryLong
        }
    }

    /// Band score on a 0--100 scale.
    pub const fn score(self) -> u8 {
        match self {
            Self::TooShort => 30,
            Self::Acceptable => 60,
            Self::Excellent => 100,
            Self::Good => 85,
            Self::VeryLong => 70,
        }
    }

    /// Human-readable feedback for the band.
    pub const fn feedback(self) -> &'static str {
        match self {
            Self::TooShort => "Content is too short",
            Self::Acceptable => "Content length is acceptable but could be longer",
            Self::Excellent => "Content length is excellent",
            Self::Good => "Content length is good but stay focused",
            Self::VeryLong => "Content is very long, consider sectioning",
        }
    }
}

/// Result of classifying a text's length.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LengthReport {
    /// Whitespace-delimited words.
    pub word_count: usize,
    /// Characters (not bytes).
    pub character_count: usize,
    /// Band score (0--100).
    pub score: u8,
    /// Band the word count falls into.
    pub band: LengthBand,
    /// Feedback line for the band.
    pub feedback: String,
}

/// Classify the length of `text`.
#[tracing::instrument(skip(text, bands), fields(text_len = text.len()))]
pub fn analyze_content_length(text: &str, bands: &LengthBands) -> LengthReport {
    let word_count = text::word_count(text);
    let band = LengthBand::classify(word_count, bands);
    tracing::debug!(word_count, ?band, "content length classified");

    LengthReport {
        word_count,
        character_count: text::char_count(text),
        score: band.score(),
        band,
        feedback: band.feedback().to_string(),
    }
}
