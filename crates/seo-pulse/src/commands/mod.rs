//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

use seo_pulse_core::config::Config;
use seo_pulse_core::{Engine, PageRecord, markdown};

pub mod analyze;
pub mod density;
pub mod duplicate;
pub mod grade;
pub mod health;
pub mod info;
pub mod keywords;
pub mod length;
pub mod readability;
#[cfg(feature = "mcp")]
pub mod serve;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read a text file as prose, stripping markdown when the extension is `.md`.
pub fn read_prose(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let content = read_input_file(path, max_bytes)?;
    if path.extension() == Some("md") {
        Ok(markdown::strip_to_prose(&content))
    } else {
        Ok(content)
    }
}

/// Read a JSON page record.
///
/// With `markdown`, the record's content is treated as CommonMark: it is
/// stripped to prose, and its images fill `images` when the record lists
/// none.
pub fn read_record(
    path: &Utf8Path,
    max_bytes: Option<usize>,
    markdown: bool,
) -> anyhow::Result<PageRecord> {
    let raw = read_input_file(path, max_bytes)?;
    let mut record: PageRecord =
        serde_json::from_str(&raw).with_context(|| format!("invalid page record in {path}"))?;
    if markdown {
        apply_markdown(&mut record);
    }
    Ok(record)
}

/// Convert markdown body content in place.
pub fn apply_markdown(record: &mut PageRecord) {
    let Some(body) = record.content.take() else {
        return;
    };
    if record.images.is_empty() {
        record.images = markdown::images(&body);
    }
    record.content = Some(markdown::strip_to_prose(&body));
}

/// Engine for the loaded configuration.
pub fn engine(config: &Config) -> anyhow::Result<Engine> {
    Engine::new(config.scoring.clone()).context("invalid scoring configuration")
}
