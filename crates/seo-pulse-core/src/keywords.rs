//! Related-term (LSI-style) keyword extraction.
//!
//! Ranks candidate terms by raw frequency after dropping short words and
//! stopwords. Not semantic analysis: the name follows what content editors
//! call these suggestions.

use std::collections::{HashMap, HashSet};

use crate::text;

/// Maximum number of terms returned.
pub const MAX_TERMS: usize = 10;

/// Terms must be longer than this many characters.
pub const MIN_TERM_CHARS: usize = 3;

/// Extract up to [`MAX_TERMS`] frequent terms from `text`.
///
/// Ordered by descending frequency; ties keep first-occurrence order.
/// `primary` is accepted for callers that want to exclude the focus
/// keyword later, and is currently not used for filtering.
#[tracing::instrument(skip(text, stopwords), fields(text_len = text.len()))]
pub fn extract_lsi_keywords(
    text: &str,
    primary: Option<&str>,
    stopwords: &HashSet<String>,
) -> Vec<String> {
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for token in text::tokens(text) {
        let term = token.trim_matches(|c: char| !c.is_alphanumeric());
        if term.chars().count() <= MIN_TERM_CHARS || stopwords.contains(term) {
            continue;
        }
        if let Some(&slot) = index.get(term) {
            order[slot].1 += 1;
        } else {
            index.insert(term.to_string(), order.len());
            order.push((term.to_string(), 1));
        }
    }

    // Stable: equal counts stay in first-occurrence order.
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order.truncate(MAX_TERMS);
    tracing::debug!(terms = order.len(), "keywords extracted");

    order.into_iter().map(|(term, _)| term).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word_lists::default_stopwords;

    #[test]
    fn ranks_by_frequency() {
        let text = "kahve makinesi kahve çekirdeği kahve makinesi filtre";
        let terms = extract_lsi_keywords(text, None, &default_stopwords());
        assert_eq!(terms, vec!["kahve", "makinesi", "çekirdeği", "filtre"]);
    }

    #[test]
    fn ties_keep_first_occurrence_order() {
        let text = "zeytin portakal elma portakal zeytin elma";
        let terms = extract_lsi_keywords(text, None, &default_stopwords());
        assert_eq!(terms, vec!["zeytin", "portakal", "elma"]);
    }

    #[test]
    fn drops_short_words_and_stopwords() {
        let text = "için çok kedi ev ile tarafından bahçe";
        let terms = extract_lsi_keywords(text, None, &default_stopwords());
        assert_eq!(terms, vec!["kedi", "bahçe"]);
    }

    #[test]
    fn length_is_measured_in_characters() {
        // "ağaç" is 4 characters but 6 bytes; "çiş" is 3 characters.
        let terms = extract_lsi_keywords("ağaç çiş", None, &HashSet::new());
        assert_eq!(terms, vec!["ağaç"]);
    }

    #[test]
    fn trailing_punctuation_does_not_split_terms() {
        let terms = extract_lsi_keywords("Kahve, kahve. KAHVE!", None, &HashSet::new());
        assert_eq!(terms, vec!["kahve"]);
    }

    #[test]
    fn sentence_initial_dotted_i_matches_stopwords() {
        let text = "İçin kahve. İşte kahve. İstanbul kahve.";
        let terms = extract_lsi_keywords(text, None, &default_stopwords());
        assert_eq!(terms, vec!["kahve", "istanbul"]);
    }

    #[test]
    fn caps_at_ten_terms() {
        let text = (0..25)
            .map(|i| format!("terim{i:02}"))
            .collect::<Vec<_>>()
            .join(" ");
        let terms = extract_lsi_keywords(&text, Some("terim00"), &HashSet::new());
        assert_eq!(terms.len(), MAX_TERMS);
        assert_eq!(terms[0], "terim00");
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(extract_lsi_keywords("", None, &default_stopwords()).is_empty());
    }
}
