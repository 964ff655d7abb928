use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use report_core::config::{AppConfig, Config};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Tracing bootstrap ──────────────────────────────────────────────────────────

/// Initialise the diagnostic trace log for this run.
///
/// Tracing is off by default; it is enabled by the `--trace` flag or the
/// `EnableLogging` configuration switch. When disabled, no subscriber is
/// installed and every log call in the pipeline is a no-op, leaving program
/// output unchanged.
///
/// When enabled, the trace file name comes from the configured format string
/// with the `{}` placeholder replaced by `started`, and the chosen path is
/// announced on stdout.
pub fn setup_tracing(
    config: &Config,
    force_trace: bool,
    started: DateTime<Utc>,
) -> anyhow::Result<()> {
    if !force_trace && !config.app.enable_logging {
        return Ok(());
    }

    let file_name = trace_file_name(&config.logging.log_file_name_format, started);
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&file_name)?;

    println!("Writing trace log to {}\n", file_name);

    let layer = fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(EnvFilter::new("debug"))
        .with(layer)
        .init();

    tracing::info!("Trace session starting");

    Ok(())
}

/// Build the trace file name from the configured format string.
///
/// The `{}` placeholder carries the run's start time, formatted without
/// characters that are invalid in file names.
fn trace_file_name(format: &str, started: DateTime<Utc>) -> String {
    let stamp = started.format("%Y-%m-%dT%H-%M-%SZ").to_string();
    format.replace("{}", &stamp)
}

// ── Input-path resolution ──────────────────────────────────────────────────────

/// Resolve the input file path.
///
/// An explicit CLI path wins but must point at an existing file. Without
/// one, the configured relative path is probed against the working directory
/// and each of its ancestors; the first hit wins. Returns `None` when
/// nothing resolves.
pub fn resolve_input_path(arg: Option<&Path>, config: &AppConfig) -> Option<PathBuf> {
    let base = std::env::current_dir().ok()?;
    resolve_input_path_in(arg, config, &base)
}

/// Same as [`resolve_input_path`] but with an explicit base directory,
/// enabling tests that do not touch the process working directory.
pub fn resolve_input_path_in(
    arg: Option<&Path>,
    config: &AppConfig,
    base: &Path,
) -> Option<PathBuf> {
    if let Some(path) = arg {
        return path.is_file().then(|| path.to_path_buf());
    }

    base.ancestors()
        .map(|dir| dir.join(&config.input_file_path))
        .find(|candidate| candidate.is_file())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
