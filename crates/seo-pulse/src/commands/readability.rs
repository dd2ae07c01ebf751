//! Readability command: reading-ease estimate for a text file.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use seo_pulse_core::Engine;

use super::read_prose;

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// File to analyze (markdown is stripped for `.md` files).
    pub file: Utf8PathBuf,

    /// Minimum acceptable reading-ease score (0-100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,
}

/// Estimate readability of a file.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    engine: &Engine,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, min_score = ?args.min_score, "executing readability command");

    let content = read_prose(&args.file, max_input_bytes)?;
    let report = engine.check_readability(&content, args.min_score);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let Some(min) = report.min_score
        && !report.below_min
    {
        println!(
            "{} {} scores {} (min: {})",
            "PASS:".green(),
            args.file,
            report.score,
            min,
        );
    } else if report.min_score.is_none() {
        println!("{}", report.score);
    }

    if report.below_min {
        bail!(
            "{} scores {} (min: {}). Shorten sentences or use simpler words.",
            args.file,
            report.score,
            report.min_score.unwrap_or(0),
        );
    }

    Ok(())
}
