//! SEO health scoring.
//!
//! [`calculate_seo_score`] scores a [`PageRecord`] in five weighted
//! categories plus two bonus categories, collecting severity-tagged issues
//! and free-text recommendations along the way.
//!
//! | Category             | Max   | Counts toward `overall` |
//! |----------------------|-------|-------------------------|
//! | Meta title           | 25    | yes                     |
//! | Meta description     | 25    | yes                     |
//! | Content quality      | 20    | yes                     |
//! | Schema markup        | 15    | yes                     |
//! | Image optimization   | 15    | yes                     |
//! | Keyword optimization | bonus | no                      |
//! | Technical SEO        | bonus | no (always 0)           |
//!
//! Nothing here fails. Missing input scores 0 with a critical issue;
//! malformed structured data scores 0 with a warning.

mod content;
mod images;
mod keywords;
mod meta;
mod record;
pub mod schema;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use record::{ImageMeta, PageRecord, Variant};

use crate::scoring::ScoringConfig;

/// How urgent an issue is.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Missing input or a problem that costs most of a category's points.
    Critical,
    /// A problem worth fixing.
    Warning,
    /// Informational.
    Info,
}

impl Severity {
    /// Lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// Which part of the page an issue concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    /// Page title.
    MetaTitle,
    /// Meta description variants.
    MetaDescription,
    /// Body content.
    ContentQuality,
    /// Structured data.
    SchemaMarkup,
    /// Images and captions.
    ImageOptimization,
    /// Focus and secondary keywords.
    KeywordOptimization,
}

impl IssueCategory {
    /// Human-readable name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MetaTitle => "meta title",
            Self::MetaDescription => "meta description",
            Self::ContentQuality => "content quality",
            Self::SchemaMarkup => "schema markup",
            Self::ImageOptimization => "image optimization",
            Self::KeywordOptimization => "keyword optimization",
        }
    }
}

/// A single diagnostic finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Issue {
    /// How urgent the issue is.
    pub severity: Severity,
    /// Which part of the page it concerns.
    pub category: IssueCategory,
    /// What is wrong.
    pub message: String,
    /// How to fix it.
    pub fix: String,
}

/// Points per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreBreakdown {
    /// Sum of the five weighted categories, capped at 100.
    pub overall: u8,
    /// 0--25.
    pub meta_title: u8,
    /// 0--25.
    pub meta_description: u8,
    /// 0--20.
    pub content_quality: u8,
    /// 0--15.
    pub schema_markup: u8,
    /// 0--15.
    pub image_optimization: u8,
    /// Bonus, 0--10. Not part of `overall`.
    pub keyword_optimization: u8,
    /// Bonus, reserved. Always 0.
    pub technical_seo: u8,
}

impl ScoreBreakdown {
    /// `min(100, meta_title + meta_description + content_quality +
    /// schema_markup + image_optimization)`.
    pub fn weighted_total(&self) -> u8 {
        let sum: u16 = [
            self.meta_title,
            self.meta_description,
            self.content_quality,
            self.schema_markup,
            self.image_optimization,
        ]
        .into_iter()
        .map(u16::from)
        .sum();
        u8::try_from(sum.min(100)).unwrap_or(100)
    }
}

/// Full health report for one page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct HealthReport {
    /// Points per category.
    pub score: ScoreBreakdown,
    /// Findings in evaluation order.
    pub issues: Vec<Issue>,
    /// Free-text recommendations.
    pub recommendations: Vec<String>,
}

impl HealthReport {
    /// Issues of the given severity.
    pub fn issues_with(&self, severity: Severity) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(move |issue| issue.severity == severity)
    }

    /// Number of critical issues.
    pub fn critical_count(&self) -> usize {
        self.issues_with(Severity::Critical).count()
    }
}

/// Issue and recommendation sink shared by the category scorers.
#[derive(Debug, Default)]
struct Findings {
    issues: Vec<Issue>,
    recommendations: Vec<String>,
}

impl Findings {
    fn issue(
        &mut self,
        severity: Severity,
        category: IssueCategory,
        message: impl Into<String>,
        fix: impl Into<String>,
    ) {
        self.issues.push(Issue {
            severity,
            category,
            message: message.into(),
            fix: fix.into(),
        });
    }

    fn recommend(&mut self, recommendation: impl Into<String>) {
        self.recommendations.push(recommendation.into());
    }
}

/// Score a page record.
#[tracing::instrument(skip_all, fields(text_len = record.content_text().len()))]
pub fn calculate_seo_score(record: &PageRecord, scoring: &ScoringConfig) -> HealthReport {
    let mut findings = Findings::default();

    let meta_title = meta::score_title(record, scoring, &mut findings);
    tracing::debug!(meta_title, "title scored");
    let meta_description = meta::score_descriptions(record, scoring, &mut findings);
    tracing::debug!(meta_description, "descriptions scored");
    let content_quality = content::score_content(record, scoring, &mut findings);
    tracing::debug!(content_quality, "content scored");
    let schema_markup = schema::score_schema(record, &mut findings);
    tracing::debug!(schema_markup, "schema scored");
    let image_optimization = images::score_images(record, scoring, &mut findings);
    tracing::debug!(image_optimization, "images scored");
    let keyword_optimization = keywords::score_keywords(record, scoring, &mut findings);
    tracing::debug!(keyword_optimization, "keywords scored");

    let mut score = ScoreBreakdown {
        overall: 0,
        meta_title,
        meta_description,
        content_quality,
        schema_markup,
        image_optimization,
        keyword_optimization,
        technical_seo: technical_seo(record),
    };
    score.overall = score.weighted_total();
    tracing::debug!(
        overall = score.overall,
        issues = findings.issues.len(),
        "health scored"
    );

    HealthReport {
        score,
        issues: findings.issues,
        recommendations: findings.recommendations,
    }
}

/// Reserved for crawl and performance checks. Always 0.
const fn technical_seo(_record: &PageRecord) -> u8 {
    0
}
