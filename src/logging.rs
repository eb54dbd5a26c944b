//! File-based tracing setup.
//!
//! The terminal belongs to the UI, so log records go to
//! `<log_dir>/college-tui.log` through a non-blocking writer.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE_NAME: &str = "college-tui.log";

/// Install the global tracing subscriber.
///
/// # Arguments
/// * `log_dir` - Directory for the log file, created if missing
/// * `default_level` - Filter used when `RUST_LOG` is unset
///
/// # Returns
/// * `Result<WorkerGuard>` - Guard that flushes pending records when dropped
pub fn init(log_dir: &Path, default_level: &str) -> Result<WorkerGuard> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}
