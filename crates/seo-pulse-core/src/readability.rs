//! Readability estimate on a Flesch Reading Ease style scale.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`,
//! clamped to 0--100 and rounded. Higher = easier.
//!
//! This is a rough estimate, not a linguistic parser. Syllables are
//! approximated by counting vowels (see [`word_lists::VOWELS`]), which
//! works tolerably for a vowel-harmony language where nearly every
//! syllable carries exactly one vowel. Sentences are whatever sits between
//! `.`, `!` and `?`. Both counts are floored at 1 so empty input never
//! divides by zero.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;
use crate::word_lists;

/// Result of a readability estimate.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Ease score (0--100, higher is easier).
    pub score: u8,
    /// Sentence count used in the formula (at least 1).
    pub sentences: usize,
    /// Word count used in the formula (at least 1).
    pub words: usize,
    /// Estimated syllable count.
    pub syllables: usize,
    /// Minimum acceptable score (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<u8>,
    /// Whether the score is below the minimum.
    pub below_min: bool,
}

/// Estimate readability of `text`, optionally gating on a minimum score.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn check_readability(text: &str, min_score: Option<u8>) -> ReadabilityReport {
    let sentences = text::sentence_count(text).max(1);
    let words = text::word_count(text).max(1);
    let syllables = count_syllables(text);

    let score = ease(words, sentences, syllables);
    let below_min = min_score.is_some_and(|min| score < min);
    tracing::debug!(score, sentences, words, syllables, "readability estimated");

    ReadabilityReport {
        score,
        sentences,
        words,
        syllables,
        min_score,
        below_min,
    }
}

/// Readability score of `text` (0--100).
pub fn readability_score(text: &str) -> u8 {
    check_readability(text, None).score
}

fn ease(words: usize, sentences: usize, syllables: usize) -> u8 {
    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words as f64;
    let raw = 84.6f64.mul_add(
        -syllables_per_word,
        1.015f64.mul_add(-words_per_sentence, 206.835),
    );
    raw.clamp(0.0, 100.0).round() as u8
}

/// Sum of per-word syllable estimates. Every word has at least one.
fn count_syllables(text: &str) -> usize {
    text.split_whitespace().map(word_syllables).sum()
}

fn word_syllables(word: &str) -> usize {
    word.chars().filter(|c| word_lists::is_vowel(*c)).count().max(1)
}
