//! Length command: word-count band for a text file.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use seo_pulse_core::Engine;

use super::read_prose;

/// Arguments for the `length` subcommand.
#[derive(Args, Debug)]
pub struct LengthArgs {
    /// File to measure (markdown is stripped for `.md` files).
    pub file: Utf8PathBuf,
}

/// Classify the length of a file's content.
#[instrument(name = "cmd_length", skip_all, fields(file = %args.file))]
pub fn cmd_length(
    args: LengthArgs,
    global_json: bool,
    engine: &Engine,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing length command");

    let content = read_prose(&args.file, max_input_bytes)?;
    let report = engine.analyze_content_length(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} words, {} characters, score {}/100",
            report.word_count.bold(),
            report.character_count,
            report.score,
        );
        println!("{}", report.feedback.dimmed());
    }

    Ok(())
}
