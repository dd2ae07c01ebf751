//! Health command: full SEO health report for page records.
//!
//! Several records can be checked in one run. Text output prints one
//! report per record; `--json` prints an array (or a single object for
//! one record). The quality gate fails if any record scores below the
//! minimum.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use seo_pulse_core::config::Config;
use seo_pulse_core::{GradeReport, HealthReport, Severity};

use super::analyze::colored_score;
use super::{engine, read_record};

/// Arguments for the `health` subcommand.
#[derive(Args, Debug)]
pub struct HealthArgs {
    /// Page records (JSON) to score.
    #[arg(required = true)]
    pub files: Vec<Utf8PathBuf>,

    /// Minimum acceptable overall score (0-100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,

    /// Treat each record's content as markdown.
    #[arg(long)]
    pub markdown: bool,
}

#[derive(Serialize)]
struct RecordHealth {
    file: Utf8PathBuf,
    grade: GradeReport,
    #[serde(flatten)]
    report: HealthReport,
}

/// Score the SEO health of one or more page records.
#[instrument(name = "cmd_health", skip_all, fields(files = args.files.len()))]
pub fn cmd_health(
    args: HealthArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(files = ?args.files, "executing health command");

    let engine = engine(config)?;
    let min_score = args.min_score.or(config.min_score);

    let progress = (args.files.len() > 1).then(|| {
        let bar = ProgressBar::new(args.files.len() as u64);
        if let Ok(style) = ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}") {
            bar.set_style(style);
        }
        bar
    });

    let mut results = Vec::with_capacity(args.files.len());
    for file in &args.files {
        if let Some(ref bar) = progress {
            bar.set_message(file.to_string());
        }
        let record = read_record(file, max_input_bytes, args.markdown)?;
        let report = engine.calculate_seo_score(&record);
        let grade = engine.seo_grade(report.score.overall);
        results.push(RecordHealth {
            file: file.clone(),
            grade,
            report,
        });
        if let Some(ref bar) = progress {
            bar.inc(1);
        }
    }
    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    if global_json {
        if let [single] = results.as_slice() {
            println!("{}", serde_json::to_string_pretty(single)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
    } else {
        for result in &results {
            print_health(result);
        }
    }

    if let Some(min) = min_score {
        let failing: Vec<_> = results
            .iter()
            .filter(|r| r.report.score.overall < min)
            .collect();
        for result in &failing {
            warn!(
                file = %result.file,
                score = result.report.score.overall,
                min,
                "below minimum score"
            );
        }
        match failing.as_slice() {
            [] => {}
            [one] => bail!(
                "{} SEO score {} is below minimum {}. Fix the critical issues first.",
                one.file,
                one.report.score.overall,
                min,
            ),
            many => bail!(
                "{} of {} records are below minimum score {min}",
                many.len(),
                results.len(),
            ),
        }
    }

    Ok(())
}

fn print_health(result: &RecordHealth) {
    let score = &result.report.score;
    println!("{}", result.file.bold());
    println!(
        "\n  {} {}/100 ({} {})",
        "Overall:".cyan(),
        colored_score(score.overall),
        result.grade.grade.bold(),
        result.grade.label.dimmed(),
    );
    println!(
        "  {} title {}/25, description {}/25, content {}/20",
        "Breakdown:".cyan(),
        score.meta_title,
        score.meta_description,
        score.content_quality,
    );
    println!(
        "             schema {}/15, images {}/15, keywords {}/10",
        score.schema_markup, score.image_optimization, score.keyword_optimization,
    );

    if !result.report.issues.is_empty() {
        println!("\n  {}", "Issues".bold());
        for issue in &result.report.issues {
            let tag = match issue.severity {
                Severity::Critical => "CRITICAL".red().to_string(),
                Severity::Warning => "WARNING".yellow().to_string(),
                Severity::Info => "INFO".dimmed().to_string(),
            };
            println!("    {tag} [{}] {}", issue.category.label(), issue.message);
            println!("      {} {}", "fix:".dimmed(), issue.fix);
        }
    }

    if !result.report.recommendations.is_empty() {
        println!("\n  {}", "Recommendations".bold());
        for rec in &result.report.recommendations {
            println!("    - {rec}");
        }
    }
    println!();
}
