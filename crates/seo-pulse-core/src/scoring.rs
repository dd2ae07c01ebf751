//! Scoring thresholds and stopwords.
//!
//! Every band breakpoint the scorers use lives here with its default, so
//! the engine can be tuned per deployment (or per test) without touching
//! code. Point awards for each band are fixed; only the breakpoints move.
//!
//! Loaded as the `scoring` table of [`Config`](crate::config::Config):
//!
//! ```toml
//! [scoring]
//! similarity_threshold = 0.8
//!
//! [scoring.title]
//! ideal_min = 45
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Default Jaccard similarity at which two texts count as duplicates.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.7;

/// Character-length bands for page titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TitleBands {
    /// Below this many characters a title is far too short.
    pub short_min: usize,
    /// Start of the ideal range (inclusive).
    pub ideal_min: usize,
    /// End of the ideal range (inclusive).
    pub ideal_max: usize,
    /// Above this many characters a title will be truncated.
    pub long_max: usize,
}

impl Default for TitleBands {
    fn default() -> Self {
        Self {
            short_min: 30,
            ideal_min: 40,
            ideal_max: 60,
            long_max: 70,
        }
    }
}

/// Character-length bands for meta descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DescriptionBands {
    /// Below this many characters a description is far too short.
    pub short_min: usize,
    /// Start of the ideal range (inclusive).
    pub ideal_min: usize,
    /// End of the ideal range (inclusive).
    pub ideal_max: usize,
    /// Variant count at which a page counts as A/B testing.
    pub ab_test_variants: usize,
}

impl Default for DescriptionBands {
    fn default() -> Self {
        Self {
            short_min: 140,
            ideal_min: 150,
            ideal_max: 160,
            ab_test_variants: 3,
        }
    }
}

/// Word-count bands for the content length classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LengthBands {
    /// First word count of the "acceptable" band.
    pub acceptable_min: usize,
    /// First word count of the "excellent" band.
    pub excellent_min: usize,
    /// Last word count of the "excellent" band.
    pub excellent_max: usize,
    /// Last word count of the "good" band; anything above is very long.
    pub good_max: usize,
}

impl Default for LengthBands {
    fn default() -> Self {
        Self {
            acceptable_min: 150,
            excellent_min: 300,
            excellent_max: 1000,
            good_max: 1500,
        }
    }
}

/// Ideal focus keyword density range, in percent (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DensityBands {
    /// Lowest ideal density.
    pub min_percent: f64,
    /// Highest ideal density.
    pub max_percent: f64,
}

impl Default for DensityBands {
    fn default() -> Self {
        Self {
            min_percent: 1.0,
            max_percent: 3.0,
        }
    }
}

/// Readability ease breakpoints (0--100 scale).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReadabilityBands {
    /// At or above this score text reads easily.
    pub easy: u8,
    /// At or above this score (and below `easy`) text is moderately hard.
    pub moderate: u8,
}

impl Default for ReadabilityBands {
    fn default() -> Self {
        Self {
            easy: 60,
            moderate: 40,
        }
    }
}

/// Word-count breakpoints for the health report's content category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContentBands {
    /// Words needed for full length points.
    pub full_words: usize,
    /// Words needed for partial length points.
    pub partial_words: usize,
}

impl Default for ContentBands {
    fn default() -> Self {
        Self {
            full_words: 300,
            partial_words: 150,
        }
    }
}

/// Caption coverage and quality breakpoints for images.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ImageBands {
    /// Coverage ratio (0--1) for the "mostly captioned" band.
    pub good_coverage: f64,
    /// Coverage ratio (0--1) for the "partly captioned" band.
    pub partial_coverage: f64,
    /// Average caption quality (0--100) below which an info issue is raised.
    pub min_caption_quality: u8,
}

impl Default for ImageBands {
    fn default() -> Self {
        Self {
            good_coverage: 0.8,
            partial_coverage: 0.5,
            min_caption_quality: 70,
        }
    }
}

/// Keyword-set breakpoints for the keyword optimization bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeywordBands {
    /// Secondary keywords needed for the secondary bonus.
    pub min_secondary: usize,
    /// Lowest total keyword count for the coverage bonus.
    pub total_min: usize,
    /// Highest total keyword count for the coverage bonus.
    pub total_max: usize,
}

impl Default for KeywordBands {
    fn default() -> Self {
        Self {
            min_secondary: 2,
            total_min: 12,
            total_max: 15,
        }
    }
}

/// All tunable scoring settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Title length bands.
    pub title: TitleBands,
    /// Description length bands.
    pub description: DescriptionBands,
    /// Content length classifier bands.
    pub length: LengthBands,
    /// Focus keyword density range.
    pub density: DensityBands,
    /// Readability breakpoints.
    pub readability: ReadabilityBands,
    /// Health report content breakpoints.
    pub content: ContentBands,
    /// Image caption breakpoints.
    pub images: ImageBands,
    /// Keyword bonus breakpoints.
    pub keywords: KeywordBands,
    /// Default Jaccard threshold for duplicate detection (0--1].
    pub similarity_threshold: f64,
    /// Replacement stopword list for keyword extraction.
    ///
    /// Omit to use the built-in Turkish list.
    pub stopwords: Option<Vec<String>>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            title: TitleBands::default(),
            description: DescriptionBands::default(),
            length: LengthBands::default(),
            density: DensityBands::default(),
            readability: ReadabilityBands::default(),
            content: ContentBands::default(),
            images: ImageBands::default(),
            keywords: KeywordBands::default(),
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            stopwords: None,
        }
    }
}

impl ScoringConfig {
    /// Check that every band is ordered and every ratio is in range.
    pub fn validate(&self) -> ConfigResult<()> {
        let t = &self.title;
        ordered(
            "scoring.title",
            &[t.short_min, t.ideal_min, t.ideal_max, t.long_max],
        )?;

        let d = &self.description;
        ordered(
            "scoring.description",
            &[d.short_min, d.ideal_min, d.ideal_max],
        )?;
        if d.ab_test_variants == 0 {
            return Err(invalid(
                "scoring.description.ab_test_variants",
                "must be at least 1",
            ));
        }

        let l = &self.length;
        ordered(
            "scoring.length",
            &[l.acceptable_min, l.excellent_min, l.excellent_max, l.good_max],
        )?;

        let k = &self.density;
        if !(k.min_percent >= 0.0 && k.min_percent <= k.max_percent) {
            return Err(invalid(
                "scoring.density",
                "need 0 <= min_percent <= max_percent",
            ));
        }

        let r = &self.readability;
        if r.moderate > r.easy || r.easy > 100 {
            return Err(invalid(
                "scoring.readability",
                "need moderate <= easy <= 100",
            ));
        }

        let c = &self.content;
        ordered("scoring.content", &[c.partial_words, c.full_words])?;

        let i = &self.images;
        if !(0.0..=1.0).contains(&i.partial_coverage)
            || !(0.0..=1.0).contains(&i.good_coverage)
            || i.partial_coverage > i.good_coverage
        {
            return Err(invalid(
                "scoring.images",
                "need 0 <= partial_coverage <= good_coverage <= 1",
            ));
        }
        if i.min_caption_quality > 100 {
            return Err(invalid(
                "scoring.images.min_caption_quality",
                "must be at most 100",
            ));
        }

        let kw = &self.keywords;
        ordered("scoring.keywords", &[kw.total_min, kw.total_max])?;

        if !(self.similarity_threshold > 0.0 && self.similarity_threshold <= 1.0) {
            return Err(invalid(
                "scoring.similarity_threshold",
                "must be in (0, 1]",
            ));
        }

        Ok(())
    }
}

fn ordered(field: &'static str, values: &[usize]) -> ConfigResult<()> {
    if values.windows(2).all(|pair| pair[0] <= pair[1]) {
        Ok(())
    } else {
        Err(invalid(field, format!("breakpoints must ascend, got {values:?}")))
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidThreshold {
        field,
        reason: reason.into(),
    }
}
