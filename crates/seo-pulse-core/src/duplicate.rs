//! Duplicate content detection by word-set Jaccard similarity.
//!
//! Both texts are case-folded, trimmed and reduced to their sets of unique
//! whitespace-delimited words; similarity is `|A ∩ B| / |A ∪ B|`.
//!
//! [`check_duplicate_content`] is a first-match scan: it stops at the
//! first corpus entry at or above the threshold, which is not necessarily
//! the most similar one. Use [`most_similar`] when the closest match
//! matters more than the early exit.

use std::borrow::Borrow;
use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;

pub use crate::scoring::DEFAULT_SIMILARITY_THRESHOLD;

/// Outcome of a duplicate scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DuplicateReport {
    /// Whether a corpus entry met the threshold.
    pub is_duplicate: bool,
    /// Similarity of the reported entry (0--1).
    pub similarity: f64,
    /// Corpus position of the matching entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate_index: Option<usize>,
}

impl DuplicateReport {
    const fn unique(similarity: f64) -> Self {
        Self {
            is_duplicate: false,
            similarity,
            duplicate_index: None,
        }
    }

    const fn duplicate(similarity: f64, index: usize) -> Self {
        Self {
            is_duplicate: true,
            similarity,
            duplicate_index: Some(index),
        }
    }
}

/// Unique case-folded words of `text`.
pub fn word_set(text: &str) -> HashSet<String> {
    text::tokens(text.trim()).collect()
}

/// Jaccard similarity of two word sets; 0 when both are empty.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Scan `existing` in order and report the first entry whose similarity
/// to `text` meets `threshold`.
///
/// Returns `{ is_duplicate: false, similarity: 0 }` when nothing matches,
/// including for an empty corpus.
#[tracing::instrument(skip(text, existing), fields(text_len = text.len(), corpus = existing.len()))]
pub fn check_duplicate_content<S: AsRef<str>>(
    text: &str,
    existing: &[S],
    threshold: f64,
) -> DuplicateReport {
    let candidate = word_set(text);
    first_match(
        &candidate,
        existing.iter().map(|other| word_set(other.as_ref())),
        threshold,
    )
}

/// Scan the whole corpus and report the most similar entry.
///
/// `similarity` is the best score found even when it is below the
/// threshold; `duplicate_index` is set only when it meets it. Ties go to
/// the earliest entry.
#[tracing::instrument(skip(text, existing), fields(text_len = text.len(), corpus = existing.len()))]
pub fn most_similar<S: AsRef<str>>(text: &str, existing: &[S], threshold: f64) -> DuplicateReport {
    let candidate = word_set(text);
    best_match(
        &candidate,
        existing.iter().map(|other| word_set(other.as_ref())),
        threshold,
    )
}

/// A corpus with word sets built once, for checking many candidates.
#[derive(Debug, Clone, Default)]
pub struct DuplicateIndex {
    sets: Vec<HashSet<String>>,
}

impl DuplicateIndex {
    /// Build word sets for every corpus entry.
    pub fn new<S: AsRef<str>>(corpus: &[S]) -> Self {
        Self {
            sets: corpus.iter().map(|text| word_set(text.as_ref())).collect(),
        }
    }

    /// Number of indexed entries.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Whether the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// First-match scan; same semantics as [`check_duplicate_content`].
    pub fn first_match(&self, text: &str, threshold: f64) -> DuplicateReport {
        first_match(&word_set(text), self.sets.iter(), threshold)
    }

    /// Best-match scan; same semantics as [`most_similar`].
    pub fn best_match(&self, text: &str, threshold: f64) -> DuplicateReport {
        best_match(&word_set(text), self.sets.iter(), threshold)
    }
}

fn first_match<I, B>(candidate: &HashSet<String>, corpus: I, threshold: f64) -> DuplicateReport
where
    I: IntoIterator<Item = B>,
    B: Borrow<HashSet<String>>,
{
    for (index, other) in corpus.into_iter().enumerate() {
        let similarity = jaccard(candidate, other.borrow());
        if similarity >= threshold {
            tracing::debug!(index, similarity, "duplicate found");
            return DuplicateReport::duplicate(similarity, index);
        }
    }
    DuplicateReport::unique(0.0)
}

fn best_match<I, B>(candidate: &HashSet<String>, corpus: I, threshold: f64) -> DuplicateReport
where
    I: IntoIterator<Item = B>,
    B: Borrow<HashSet<String>>,
{
    let mut best: Option<(usize, f64)> = None;
    for (index, other) in corpus.into_iter().enumerate() {
        let similarity = jaccard(candidate, other.borrow());
        if best.is_none_or(|(_, top)| similarity > top) {
            best = Some((index, similarity));
        }
    }

    match best {
        Some((index, similarity)) if similarity >= threshold => {
            DuplicateReport::duplicate(similarity, index)
        }
        Some((_, similarity)) => DuplicateReport::unique(similarity),
        None => DuplicateReport::unique(0.0),
    }
}
