//! Keyword density.
//!
//! Density is the share of all words in a text that are occurrences of a
//! keyword, in percent. Text and keywords are case-folded with
//! [`text::fold_case`] first. Single-word keywords count exact token
//! matches; phrases count regex matches that are not glued to a
//! neighbouring word character, with any run of whitespace between the
//! words.

use std::collections::BTreeMap;

use regex::Regex;

use crate::text;

/// Keyword → density percentage. Sorted by keyword for stable output.
pub type DensityMap = BTreeMap<String, f64>;

/// Density of each keyword in `text`.
///
/// Values are not rounded. An empty keyword list gives an empty map; an
/// empty text gives 0 for every keyword.
#[tracing::instrument(skip_all, fields(text_len = text.len(), keywords = keywords.len()))]
pub fn keyword_density<S: AsRef<str>>(text: &str, keywords: &[S]) -> DensityMap {
    let mut densities = DensityMap::new();
    if keywords.is_empty() {
        return densities;
    }

    let folded = text::fold_case(text);
    let words: Vec<String> = text::tokens(&folded).collect();
    for keyword in keywords {
        let keyword = keyword.as_ref();
        let density = percentage(occurrences(&folded, &words, keyword), words.len());
        tracing::trace!(keyword, density, "keyword density");
        densities.insert(keyword.to_string(), density);
    }
    densities
}

/// Density of a single keyword in `text`.
pub fn density_of(text: &str, keyword: &str) -> f64 {
    let folded = text::fold_case(text);
    let words: Vec<String> = text::tokens(&folded).collect();
    percentage(occurrences(&folded, &words, keyword), words.len())
}

/// Count occurrences of `keyword` in the case-folded text and its tokens.
fn occurrences(folded: &str, words: &[String], keyword: &str) -> usize {
    let parts: Vec<String> = text::tokens(keyword).collect();
    match parts.as_slice() {
        [] => 0,
        [single] => words.iter().filter(|word| *word == single).count(),
        phrase => phrase_pattern(phrase).map_or(0, |re| re.find_iter(folded).count()),
    }
}

// Half boundaries only look outside the phrase, so `(kdv dahil)` still
// matches when its edges are punctuation.

fn phrase_pattern(parts: &[String]) -> Option<Regex> {
    let body = parts
        .iter()
        .map(|part| regex::escape(part))
        .collect::<Vec<_>>()
        .join(r"\s+");
    Regex::new(&format!(r"\b{{start-half}}{body}\b{{end-half}}")).ok()
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
