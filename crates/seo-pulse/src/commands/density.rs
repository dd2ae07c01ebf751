//! Density command: keyword density in a text file.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use seo_pulse_core::Engine;

use super::read_prose;

/// Arguments for the `density` subcommand.
#[derive(Args, Debug)]
pub struct DensityArgs {
    /// File to analyze (markdown is stripped for `.md` files).
    pub file: Utf8PathBuf,

    /// Keywords to measure (comma-separated or repeated).
    #[arg(short, long = "keyword", value_delimiter = ',', required = true)]
    pub keywords: Vec<String>,
}

/// Report the density of each keyword.
#[instrument(name = "cmd_density", skip_all, fields(file = %args.file))]
pub fn cmd_density(
    args: DensityArgs,
    global_json: bool,
    engine: &Engine,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, keywords = ?args.keywords, "executing density command");

    let content = read_prose(&args.file, max_input_bytes)?;
    let densities = engine.keyword_density(&content, &args.keywords);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&densities)?);
        return Ok(());
    }

    let range = &engine.scoring().density;
    for (keyword, density) in &densities {
        let value = format!("{density:.2}%");
        let value = if *density < range.min_percent {
            value.yellow().to_string()
        } else if *density > range.max_percent {
            value.red().to_string()
        } else {
            value.green().to_string()
        };
        println!("{keyword}: {value}");
    }

    Ok(())
}
