//! Grade command: letter grade for an overall score.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::instrument;

use seo_pulse_core::grade;

/// Arguments for the `grade` subcommand.
#[derive(Args, Debug)]
pub struct GradeArgs {
    /// Overall score (0-100).
    #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
    pub score: u8,
}

/// Print the letter grade for a score.
#[instrument(name = "cmd_grade", skip_all, fields(score = args.score))]
pub fn cmd_grade(args: GradeArgs, global_json: bool) -> anyhow::Result<()> {
    let report = grade::seo_grade(args.score);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{} {}", report.grade.bold(), report.label.dimmed());
    }

    Ok(())
}
