//! Analyze command: content quality composite for a page record.

use anyhow::bail;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use seo_pulse_core::config::Config;
use seo_pulse_core::{ContentAnalysis, Variant};

use super::{engine, read_record};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Page record (JSON) to analyze.
    pub file: Utf8PathBuf,

    /// Description variant to score (defaults to the record's active variant).
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// Minimum acceptable content score (0-100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,

    /// Treat the record's content as markdown.
    #[arg(long)]
    pub markdown: bool,
}

/// Score content quality of a page record.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, variant = ?args.variant, "executing analyze command");

    let engine = engine(config)?;
    let mut record = read_record(&args.file, max_input_bytes, args.markdown)?;
    if args.variant.is_some() {
        record.active_variant = args.variant;
    }

    let report = engine.analyze_content(&record.content_input());
    let min_score = args.min_score.or(config.min_score);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&args.file, &report);
    }

    if let Some(min) = min_score
        && report.content_score < min
    {
        bail!(
            "{} content score {} is below minimum {}. Address the warnings above.",
            args.file,
            report.content_score,
            min,
        );
    }

    Ok(())
}

fn print_report(file: &Utf8Path, report: &ContentAnalysis) {
    println!("{}", file.bold());
    println!(
        "\n  {} {}/100, {} words, readability {}",
        "Content score:".cyan(),
        colored_score(report.content_score),
        report.word_count,
        report.readability_score,
    );

    if !report.keyword_density.is_empty() {
        let densities: Vec<_> = report
            .keyword_density
            .iter()
            .map(|(keyword, density)| format!("\"{keyword}\" {density:.2}%"))
            .collect();
        println!("  {} {}", "Density:".cyan(), densities.join(", "));
    }

    print_list("Strengths", &report.strengths, |s| s.green().to_string());
    print_list("Warnings", &report.warnings, |s| s.yellow().to_string());
    print_list("Suggestions", &report.suggestions, |s| s.dimmed().to_string());
}

fn print_list(heading: &str, items: &[String], paint: impl Fn(&str) -> String) {
    if items.is_empty() {
        return;
    }
    println!("\n  {}", paint(heading));
    for item in items {
        println!("    - {item}");
    }
}

/// Score colored green, yellow or red.
pub(crate) fn colored_score(score: u8) -> String {
    let text = score.to_string();
    if score >= 80 {
        text.green().to_string()
    } else if score >= 60 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}
