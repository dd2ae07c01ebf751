//! Core library for seo-pulse.
//!
//! A deterministic content-quality and SEO health scoring engine for
//! marketing copy. Every operation is a pure, synchronous computation over
//! the strings and metadata it is given: no I/O, no network, no state
//! between calls.
//!
//! # Modules
//!
//! - [`text`], [`density`], [`readability`], [`length`], [`keywords`],
//!   [`duplicate`] - independent text heuristics
//! - [`analysis`] - content quality composite built from the heuristics
//! - [`health`] - full SEO health report for a [`PageRecord`]
//! - [`grade`] - letter grade for an overall score
//! - [`engine`] - [`Engine`] facade over all of the above
//! - [`scoring`] - tunable thresholds; [`config`] - configuration loading
//! - [`markdown`] - CommonMark body content to plain prose
//!
//! # Quick Start
//!
//! ```
//! use seo_pulse_core::{Engine, PageRecord};
//!
//! let engine = Engine::default();
//! let record = PageRecord {
//!     title: Some("Kış lastiği seçerken dikkat edilmesi gerekenler".into()),
//!     ..PageRecord::default()
//! };
//! let report = engine.calculate_seo_score(&record);
//! assert_eq!(report.score.meta_title, 25);
//! println!("{}", engine.seo_grade(report.score.overall).grade);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod density;
pub mod duplicate;
pub mod engine;
pub mod error;
pub mod grade;
pub mod health;
pub mod keywords;
pub mod length;
pub mod markdown;
pub mod readability;
pub mod scoring;
pub mod text;
pub mod word_lists;

pub use analysis::{ContentAnalysis, ContentInput};
pub use config::{Config, ConfigLoader, LogLevel};
pub use duplicate::{DuplicateIndex, DuplicateReport};
pub use engine::Engine;
pub use error::{ConfigError, ConfigResult};
pub use grade::{Grade, GradeReport};
pub use health::{
    HealthReport, ImageMeta, Issue, IssueCategory, PageRecord, ScoreBreakdown, Severity, Variant,
};
pub use length::LengthReport;
pub use readability::ReadabilityReport;
pub use scoring::ScoringConfig;

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
