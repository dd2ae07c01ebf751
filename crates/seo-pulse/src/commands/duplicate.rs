//! Duplicate command: word-overlap check against a set of files.
//!
//! Exits non-zero when a duplicate is found, so it can gate publishing.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use seo_pulse_core::{DuplicateIndex, Engine};

use super::read_prose;

/// Arguments for the `duplicate` subcommand.
#[derive(Args, Debug)]
pub struct DuplicateArgs {
    /// File to check (markdown is stripped for `.md` files).
    pub file: Utf8PathBuf,

    /// Existing content to compare against.
    #[arg(long, required = true, num_args = 1..)]
    pub against: Vec<Utf8PathBuf>,

    /// Jaccard similarity at or above which content counts as duplicate (0-1).
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Report the most similar file instead of the first match.
    #[arg(long)]
    pub best_match: bool,
}

/// Check a file for duplicate content.
#[instrument(
    name = "cmd_duplicate",
    skip_all,
    fields(file = %args.file, corpus = args.against.len())
)]
pub fn cmd_duplicate(
    args: DuplicateArgs,
    global_json: bool,
    engine: &Engine,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, threshold = ?args.threshold, "executing duplicate command");

    let threshold = args
        .threshold
        .unwrap_or(engine.scoring().similarity_threshold);
    if !(threshold > 0.0 && threshold <= 1.0) {
        bail!("threshold must be in (0, 1], got {threshold}");
    }

    let content = read_prose(&args.file, max_input_bytes)?;
    let corpus = args
        .against
        .iter()
        .map(|path| read_prose(path, max_input_bytes))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let index = DuplicateIndex::new(&corpus);
    let report = if args.best_match {
        index.best_match(&content, threshold)
    } else {
        index.first_match(&content, threshold)
    };
    let matched = report.duplicate_index.and_then(|i| args.against.get(i));

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let Some(path) = matched {
        println!(
            "{} {} matches {} ({:.0}% similar)",
            "DUPLICATE:".red(),
            args.file,
            path,
            report.similarity * 100.0,
        );
    } else {
        println!(
            "{} {} is unique (threshold {:.0}%)",
            "PASS:".green(),
            args.file,
            threshold * 100.0,
        );
    }

    if let Some(path) = matched {
        bail!("{} duplicates {}", args.file, path);
    }

    Ok(())
}
