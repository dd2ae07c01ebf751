//! Content quality aggregation.
//!
//! Combines title and description length, body length, focus keyword
//! density and readability into one 100-point composite, orchestrated by
//! [`analyze_content`]:
//!
//! | Part        | Max | Source                                 |
//! |-------------|-----|----------------------------------------|
//! | Title       | 25  | [`TitleBand`]                          |
//! | Description | 25  | [`DescriptionBand`]                    |
//! | Length      | 20  | [`LengthBand`] score scaled to 20      |
//! | Density     | 15  | focus keyword density vs. ideal range  |
//! | Readability | 15  | ease score vs. easy/moderate bands     |
//!
//! Length, readability and density are all measured over the combined
//! title + description + body text. Every part appends exactly one line to
//! `strengths`, `warnings` or `suggestions`.

pub mod fields;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use fields::{DescriptionBand, TitleBand, field_len};

use crate::density::{self, DensityMap};
use crate::length::{self, LengthBand};
use crate::readability;
use crate::scoring::ScoringConfig;
use crate::text;

/// Fields scored by the aggregator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentInput<'a> {
    /// Page title.
    pub title: &'a str,
    /// Meta description (the active variant).
    pub description: &'a str,
    /// Body content as plain prose.
    pub content: &'a str,
    /// Keyword the page should rank for.
    pub focus_keyword: Option<&'a str>,
    /// Supporting keywords; densities are reported but not scored.
    pub secondary_keywords: &'a [String],
}

impl<'a> ContentInput<'a> {
    /// Input with the three text fields and no keywords.
    pub const fn new(title: &'a str, description: &'a str, content: &'a str) -> Self {
        Self {
            title,
            description,
            content,
            focus_keyword: None,
            secondary_keywords: &[],
        }
    }

    /// Set the focus keyword.
    #[must_use]
    pub const fn with_focus_keyword(mut self, keyword: &'a str) -> Self {
        self.focus_keyword = Some(keyword);
        self
    }

    /// Set the secondary keywords.
    #[must_use]
    pub const fn with_secondary_keywords(mut self, keywords: &'a [String]) -> Self {
        self.secondary_keywords = keywords;
        self
    }

    /// Focus keyword, trimmed, if it is non-blank.
    pub fn focus(&self) -> Option<&'a str> {
        self.focus_keyword
            .map(str::trim)
            .filter(|keyword| !keyword.is_empty())
    }

    /// Title, description and content joined with spaces.
    pub fn combined_text(&self) -> String {
        text::combine(&[self.title, self.description, self.content])
    }
}

/// Result of content quality aggregation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ContentAnalysis {
    /// Words in the combined text.
    pub word_count: usize,
    /// Characters in the combined text.
    pub character_count: usize,
    /// Density of the focus and secondary keywords, in percent.
    pub keyword_density: DensityMap,
    /// Readability ease of the combined text (0--100).
    pub readability_score: u8,
    /// Composite score (0--100).
    pub content_score: u8,
    /// What the content does well.
    pub strengths: Vec<String>,
    /// Problems worth fixing.
    pub warnings: Vec<String>,
    /// Optional improvements.
    pub suggestions: Vec<String>,
}

impl ContentAnalysis {
    fn strength(&mut self, message: String) {
        self.strengths.push(message);
    }

    fn warning(&mut self, message: String) {
        self.warnings.push(message);
    }

    fn suggestion(&mut self, message: String) {
        self.suggestions.push(message);
    }
}

/// Score the content quality of a page.
#[tracing::instrument(skip_all, fields(text_len = input.content.len()))]
pub fn analyze_content(input: &ContentInput<'_>, scoring: &ScoringConfig) -> ContentAnalysis {
    let combined = input.combined_text();
    let focus = input.focus();

    let mut keywords: Vec<&str> = focus.into_iter().collect();
    keywords.extend(input.secondary_keywords.iter().map(String::as_str));

    let mut analysis = ContentAnalysis {
        word_count: text::word_count(&combined),
        character_count: text::char_count(&combined),
        keyword_density: density::keyword_density(&combined, &keywords),
        ..ContentAnalysis::default()
    };

    let mut points = 0.0;
    points += f64::from(score_title(&mut analysis, input.title, scoring));
    points += f64::from(score_description(&mut analysis, input.description, scoring));
    points += score_length(&mut analysis, &combined, scoring);
    points += f64::from(score_density(&mut analysis, focus, scoring));
    points += f64::from(score_readability(&mut analysis, &combined, scoring));

    analysis.content_score = points.round().clamp(0.0, 100.0) as u8;
    tracing::debug!(
        content_score = analysis.content_score,
        words = analysis.word_count,
        "content analyzed"
    );
    analysis
}

fn score_title(analysis: &mut ContentAnalysis, title: &str, scoring: &ScoringConfig) -> u8 {
    let chars = field_len(title);
    let band = TitleBand::classify(chars, &scoring.title);
    let message = band.message(chars, &scoring.title);
    match band.severity() {
        None => analysis.strength(message),
        Some(_) => analysis.warning(message),
    }
    band.points()
}

fn score_description(
    analysis: &mut ContentAnalysis,
    description: &str,
    scoring: &ScoringConfig,
) -> u8 {
    let chars = field_len(description);
    let band = DescriptionBand::classify(chars, &scoring.description);
    let message = band.message(chars);
    if band.is_ideal() {
        analysis.strength(message);
    } else {
        analysis.warning(message);
    }
    band.points()
}

fn score_length(analysis: &mut ContentAnalysis, combined: &str, scoring: &ScoringConfig) -> f64 {
    let report = length::analyze_content_length(combined, &scoring.length);
    match report.band {
        LengthBand::Excellent => analysis.strength(report.feedback),
        LengthBand::TooShort => analysis.warning(report.feedback),
        LengthBand::Acceptable | LengthBand::Good | LengthBand::VeryLong => {
            analysis.suggestion(report.feedback);
        }
    }
    f64::from(report.score) / 100.0 * 20.0
}

fn score_density(analysis: &mut ContentAnalysis, focus: Option<&str>, scoring: &ScoringConfig) -> u8 {
    let Some(keyword) = focus else {
        analysis.suggestion("Set a focus keyword to measure keyword density".to_string());
        return 0;
    };

    let bands = &scoring.density;
    let density = analysis.keyword_density.get(keyword).copied().unwrap_or(0.0);
    let range = format!("{}-{}%", bands.min_percent, bands.max_percent);

    if density < bands.min_percent {
        analysis.warning(format!(
            "Focus keyword \"{keyword}\" is too rare ({density:.1}%), aim for {range}"
        ));
        5
    } else if density > bands.max_percent {
        analysis.warning(format!(
            "Focus keyword \"{keyword}\" is overused ({density:.1}%), aim for {range}"
        ));
        8
    } else {
        analysis.strength(format!(
            "Focus keyword density is ideal ({density:.1}%)"
        ));
        15
    }
}

fn score_readability(
    analysis: &mut ContentAnalysis,
    combined: &str,
    scoring: &ScoringConfig,
) -> u8 {
    let bands = &scoring.readability;
    let score = readability::readability_score(combined);
    analysis.readability_score = score;

    if score >= bands.easy {
        analysis.strength(format!("Content is easy to read (score {score})"));
        15
    } else if score >= bands.moderate {
        analysis.suggestion(format!(
            "Readability is moderate (score {score}), shorter sentences and simpler words would help"
        ));
        10
    } else {
        analysis.warning(format!(
            "Content is hard to read (score {score}), break up long sentences"
        ));
        5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 400 body words in 100 short sentences; "kedi" appears 8 times.
    fn ideal_body() -> String {
        let mut body = "Bu iş çok iyi. ".repeat(92);
        body.push_str(&"Kedi bu iş iyi. ".repeat(8));
        body
    }

    fn run(input: &ContentInput<'_>) -> ContentAnalysis {
        analyze_content(input, &ScoringConfig::default())
    }

    #[test]
    fn ideal_page_scores_full_marks() {
        let title = "x".repeat(50);
        let description = "y".repeat(155);
        let body = ideal_body();
        let input = ContentInput::new(&title, &description, &body).with_focus_keyword("kedi");

        let analysis = run(&input);
        assert_eq!(analysis.word_count, 402);
        assert!(analysis.readability_score >= 60);
        assert_eq!(analysis.content_score, 100);
        assert!(analysis.warnings.is_empty(), "{:?}", analysis.warnings);
        assert!(analysis.suggestions.is_empty(), "{:?}", analysis.suggestions);
        assert_eq!(analysis.strengths.len(), 5);
    }

    #[test]
    fn no_focus_keyword_scores_no_density_points() {
        let title = "x".repeat(50);
        let description = "y".repeat(155);
        let body = ideal_body();
        let input = ContentInput::new(&title, &description, &body);

        let analysis = run(&input);
        assert_eq!(analysis.content_score, 85);
        assert!(analysis.keyword_density.is_empty());
        assert!(
            analysis
                .suggestions
                .iter()
                .any(|s| s.contains("focus keyword"))
        );
    }

    #[test]
    fn blank_focus_keyword_is_treated_as_absent() {
        let input = ContentInput::new("", "", "metin").with_focus_keyword("   ");
        assert_eq!(input.focus(), None);
        assert!(run(&input).keyword_density.is_empty());
    }

    #[test]
    fn empty_input_stays_in_range() {
        let analysis = run(&ContentInput::default());
        assert_eq!(analysis.word_count, 0);
        // title 0 + description 0 + length 30/100*20 + density 0 + readability 15
        assert_eq!(analysis.content_score, 21);
        assert!(analysis.warnings.iter().any(|w| w.contains("Title is missing")));
        assert!(
            analysis
                .warnings
                .iter()
                .any(|w| w.contains("Meta description is missing"))
        );
    }

    #[test]
    fn each_part_appends_exactly_one_line() {
        let secondary = vec!["köpek".to_string()];
        let input = ContentInput::new("Kısa başlık", "Kısa açıklama", "Kedi köpek kedi.")
            .with_focus_keyword("kedi")
            .with_secondary_keywords(&secondary);
        let analysis = run(&input);
        let lines = analysis.strengths.len() + analysis.warnings.len() + analysis.suggestions.len();
        assert_eq!(lines, 5);
    }

    #[test]
    fn overused_keyword_is_flagged() {
        let input = ContentInput::new("", "", "kedi kedi kedi köpek").with_focus_keyword("kedi");
        let analysis = run(&input);
        assert!(analysis.warnings.iter().any(|w| w.contains("overused")));
    }

    #[test]
    fn rare_keyword_is_flagged() {
        let body = "Bu iş çok iyi. ".repeat(50);
        let input = ContentInput::new("", "", &body).with_focus_keyword("kedi");
        let analysis = run(&input);
        assert_eq!(analysis.keyword_density["kedi"], 0.0);
        assert!(analysis.warnings.iter().any(|w| w.contains("too rare")));
    }

    #[test]
    fn dotted_capital_i_counts_toward_focus_keyword() {
        // 1 of 50 words: inside the default 1-3% band
        let body = format!("İstanbul {}", "deniz ".repeat(49));
        let input = ContentInput::new("", "", &body).with_focus_keyword("istanbul");
        let analysis = run(&input);
        assert!((analysis.keyword_density["istanbul"] - 2.0).abs() < 1e-9);
        assert!(analysis.strengths.iter().any(|s| s.contains("density is ideal")));
    }

    #[test]
    fn density_covers_secondary_keywords() {
        let secondary = vec!["köpek".to_string(), "kuş".to_string()];
        let input = ContentInput::new("", "", "kedi köpek kuş köpek")
            .with_focus_keyword("kedi")
            .with_secondary_keywords(&secondary);
        let analysis = run(&input);
        assert_eq!(analysis.keyword_density.len(), 3);
        assert!((analysis.keyword_density["köpek"] - 50.0).abs() < 1e-9);
    }

    #[test]
    fn long_title_is_reported_as_warning() {
        let title = "x".repeat(80);
        let analysis = run(&ContentInput::new(&title, "", ""));
        assert!(analysis.warnings.iter().any(|w| w.contains("truncated")));
    }
}
