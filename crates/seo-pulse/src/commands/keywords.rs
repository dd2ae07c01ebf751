//! Keywords command: frequent related terms in a text file.

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use seo_pulse_core::Engine;

use super::read_prose;

/// Arguments for the `keywords` subcommand.
#[derive(Args, Debug)]
pub struct KeywordsArgs {
    /// File to analyze (markdown is stripped for `.md` files).
    pub file: Utf8PathBuf,

    /// Primary keyword of the page (reported terms are not filtered by it).
    #[arg(long)]
    pub primary: Option<String>,
}

/// List related terms, most frequent first.
#[instrument(name = "cmd_keywords", skip_all, fields(file = %args.file))]
pub fn cmd_keywords(
    args: KeywordsArgs,
    global_json: bool,
    engine: &Engine,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, primary = ?args.primary, "executing keywords command");

    let content = read_prose(&args.file, max_input_bytes)?;
    let keywords = engine.extract_lsi_keywords(&content, args.primary.as_deref());

    if global_json {
        println!("{}", serde_json::to_string_pretty(&keywords)?);
    } else {
        for keyword in &keywords {
            println!("{keyword}");
        }
    }

    Ok(())
}
