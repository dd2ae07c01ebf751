//! The scoring engine facade.
//!
//! [`Engine`] owns a validated [`ScoringConfig`] and the prepared stopword
//! set, and exposes every scoring operation as a method. It holds no
//! per-call state, so one engine can be shared across threads by
//! reference or behind an `Arc`.

use std::collections::HashSet;

use crate::analysis::{self, ContentAnalysis, ContentInput};
use crate::density::{self, DensityMap};
use crate::duplicate::{self, DuplicateReport};
use crate::error::ConfigResult;
use crate::grade::{self, GradeReport};
use crate::health::{self, HealthReport, PageRecord};
use crate::keywords;
use crate::length::{self, LengthReport};
use crate::readability::{self, ReadabilityReport};
use crate::text;
use crate::scoring::ScoringConfig;
use crate::word_lists;

/// Content quality and SEO health scoring engine.
#[derive(Debug, Clone)]
pub struct Engine {
    scoring: ScoringConfig,
    stopwords: HashSet<String>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::prepare(ScoringConfig::default())
    }
}

impl Engine {
    /// Build an engine after validating `scoring`.
    pub fn new(scoring: ScoringConfig) -> ConfigResult<Self> {
        scoring.validate()?;
        Ok(Self::prepare(scoring))
    }

    fn prepare(scoring: ScoringConfig) -> Self {
        let stopwords = scoring.stopwords.as_ref().map_or_else(
            word_lists::default_stopwords,
            |words| words.iter().map(|word| text::fold_case(word.trim())).collect(),
        );
        Self { scoring, stopwords }
    }

    /// The thresholds in use.
    pub const fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    /// The stopwords used by keyword extraction.
    pub const fn stopwords(&self) -> &HashSet<String> {
        &self.stopwords
    }

    /// Content quality composite for a page.
    pub fn analyze_content(&self, input: &ContentInput<'_>) -> ContentAnalysis {
        analysis::analyze_content(input, &self.scoring)
    }

    /// Density of each keyword in `text`, in percent.
    pub fn keyword_density<S: AsRef<str>>(&self, text: &str, keywords: &[S]) -> DensityMap {
        density::keyword_density(text, keywords)
    }

    /// Readability ease of `text` (0--100).
    pub fn readability_score(&self, text: &str) -> u8 {
        readability::readability_score(text)
    }

    /// Readability with counts, gated on an optional minimum.
    pub fn check_readability(&self, text: &str, min_score: Option<u8>) -> ReadabilityReport {
        readability::check_readability(text, min_score)
    }

    /// Length band of `text`.
    pub fn analyze_content_length(&self, text: &str) -> LengthReport {
        length::analyze_content_length(text, &self.scoring.length)
    }

    /// Up to ten frequent non-stopword terms.
    pub fn extract_lsi_keywords(&self, text: &str, primary: Option<&str>) -> Vec<String> {
        keywords::extract_lsi_keywords(text, primary, &self.stopwords)
    }

    /// First corpus entry at least `threshold` similar to `text`.
    ///
    /// `None` uses the configured similarity threshold.
    pub fn check_duplicate_content<S: AsRef<str>>(
        &self,
        text: &str,
        existing: &[S],
        threshold: Option<f64>,
    ) -> DuplicateReport {
        duplicate::check_duplicate_content(text, existing, self.threshold(threshold))
    }

    /// Most similar corpus entry; see [`duplicate::most_similar`].
    pub fn most_similar<S: AsRef<str>>(
        &self,
        text: &str,
        existing: &[S],
        threshold: Option<f64>,
    ) -> DuplicateReport {
        duplicate::most_similar(text, existing, self.threshold(threshold))
    }

    /// Full health report for a page.
    pub fn calculate_seo_score(&self, record: &PageRecord) -> HealthReport {
        health::calculate_seo_score(record, &self.scoring)
    }

    /// Letter grade for an overall score.
    pub fn seo_grade(&self, score: u8) -> GradeReport {
        grade::seo_grade(score)
    }

    fn threshold(&self, threshold: Option<f64>) -> f64 {
        threshold.unwrap_or(self.scoring.similarity_threshold)
    }
}
