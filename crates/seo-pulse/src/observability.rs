//! Logging setup.
//!
//! Human-readable events go to stderr (stdout is reserved for command
//! output and the MCP transport). When a log file is configured, the same
//! events are also written there as JSON lines.
//!
//! Log file resolution, first match wins:
//! 1. `SEO_PULSE_LOG_PATH` (exact file)
//! 2. `SEO_PULSE_LOG_DIR` + `seo-pulse.jsonl`
//! 3. `log_dir` from the config file + `seo-pulse.jsonl`

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_PATH_ENV: &str = "SEO_PULSE_LOG_PATH";
const LOG_DIR_ENV: &str = "SEO_PULSE_LOG_DIR";
const LOG_FILE_NAME: &str = "seo-pulse.jsonl";

/// Where logs go.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// JSONL log file, if file logging is enabled.
    pub log_file: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve the log file from the environment, falling back to the
    /// configured log directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self {
            log_file: resolve_log_file(
                std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
                std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
                config_log_dir,
            ),
        }
    }
}

fn resolve_log_file(
    explicit: Option<PathBuf>,
    env_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    explicit
        .filter(|path| !path.as_os_str().is_empty())
        .or_else(|| {
            env_dir
                .filter(|dir| !dir.as_os_str().is_empty())
                .or(config_dir)
                .map(|dir| dir.join(LOG_FILE_NAME))
        })
}

/// Default level from the CLI flags.
fn level_for(quiet: bool, verbose: u8, configured: &str) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => configured,
        1 => "debug",
        _ => "trace",
    }
}

/// Build the event filter. `RUST_LOG` wins over every flag.
pub fn env_filter(quiet: bool, verbose: u8, configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(quiet, verbose, configured)))
}

/// Install the global subscriber.
///
/// Hold the returned guard until exit so buffered file events are flushed.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, guard) = match config.log_file.as_deref() {
        Some(path) => {
            let (writer, guard) = file_writer(path)?;
            let layer = fmt::layer().json().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

fn file_writer(
    path: &Path,
) -> anyhow::Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log path has no file name: {}", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let resolved = resolve_log_file(
            Some(PathBuf::from("/var/log/custom.jsonl")),
            Some(PathBuf::from("/tmp/env")),
            Some(PathBuf::from("/tmp/config")),
        );
        assert_eq!(resolved, Some(PathBuf::from("/var/log/custom.jsonl")));
    }

    #[test]
    fn env_dir_beats_config_dir() {
        let resolved = resolve_log_file(
            None,
            Some(PathBuf::from("/tmp/env")),
            Some(PathBuf::from("/tmp/config")),
        );
        assert_eq!(resolved, Some(PathBuf::from("/tmp/env/seo-pulse.jsonl")));
    }

    #[test]
    fn config_dir_is_the_fallback() {
        let resolved = resolve_log_file(Some(PathBuf::new()), None, Some(PathBuf::from("logs")));
        assert_eq!(resolved, Some(PathBuf::from("logs/seo-pulse.jsonl")));
    }

    #[test]
    fn no_sources_means_no_file() {
        assert_eq!(resolve_log_file(None, None, None), None);
    }

    #[test]
    fn flags_pick_the_level() {
        assert_eq!(level_for(false, 0, "warn"), "warn");
        assert_eq!(level_for(false, 1, "warn"), "debug");
        assert_eq!(level_for(false, 3, "warn"), "trace");
        assert_eq!(level_for(true, 2, "warn"), "error");
    }
}
