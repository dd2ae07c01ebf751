//! Text normalization.
//!
//! Every scorer sees words the same way: case-folded with Turkish dotted
//! capital I handled, split on whitespace, punctuation left attached. Phrase matching in [`crate::density`] uses
//! regex word boundaries to tolerate that punctuation.

/// Combining dot above, left behind when `İ` goes through `to_lowercase`.
const COMBINING_DOT_ABOVE: char = '\u{307}';

/// Lowercase `text` so that `İstanbul` and `istanbul` compare equal.
///
/// `İ` folds to plain `i` instead of `i` plus a combining dot. Plain `I`
/// still folds to `i`, which keeps Latin loanwords like `SEO` intact.
pub fn fold_case(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|&c| c != COMBINING_DOT_ABOVE)
        .collect()
}

/// Case-folded whitespace-delimited tokens of `text`.
///
/// Lazy; empty or whitespace-only input yields nothing.
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(fold_case)
}

/// Number of whitespace-delimited words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of characters (Unicode scalar values), not bytes.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Number of non-empty segments between `.`, `!` and `?`.
pub fn sentence_count(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

/// Join the non-blank fields with single spaces.
///
/// This is the "combined text" that length, readability and density are
/// measured over.
pub fn combine(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|field| field.trim())
        .filter(|field| !field.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_lowercase_and_keep_punctuation() {
        let words: Vec<String> = tokens("SEO Rehberi, Hızlı  başlangıç!").collect();
        assert_eq!(words, vec!["seo", "rehberi,", "hızlı", "başlangıç!"]);
    }

    #[test]
    fn dotted_capital_i_folds_to_plain_i() {
        assert_eq!(fold_case("İstanbul"), "istanbul");
        assert_eq!(fold_case("İÇİN"), "için");
        assert_eq!(fold_case("SEO Iğdır"), "seo iğdır");
        let words: Vec<String> = tokens("İşte İzmir").collect();
        assert_eq!(words, vec!["işte", "izmir"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(tokens("").count(), 0);
        assert_eq!(tokens("  \n\t ").count(), 0);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn char_count_is_not_byte_count() {
        assert_eq!(char_count("şğü"), 3);
        assert!("şğü".len() > 3);
    }

    #[test]
    fn sentences_skip_empty_segments() {
        assert_eq!(sentence_count("Bir. İki! Üç? "), 3);
        assert_eq!(sentence_count("Bitti..."), 1);
        assert_eq!(sentence_count(""), 0);
    }

    #[test]
    fn combine_skips_blank_fields() {
        assert_eq!(combine(&["Başlık", "  ", "Gövde "]), "Başlık Gövde");
        assert_eq!(combine(&["", ""]), "");
    }
}
