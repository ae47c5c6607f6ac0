//! Structured logging setup using the `tracing` ecosystem.
//!
//! Provides a console layer, optional daily-rotated file output, and
//! configurable log levels.

use std::path::Path;

use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::Result;

/// Guard that keeps the non-blocking log writer alive.
/// Drop this to flush and close the log file.
pub struct LogGuard {
    _guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Initialize the global tracing subscriber.
///
/// Sets up a compact console layer (stderr) and, when `log_dir` is given, a
/// daily-rotated file layer (JSON format when `json_output` is true).
///
/// # Arguments
/// * `level` - Log level string: "trace", "debug", "info", "warn", "error"
/// * `log_dir` - Directory for log files, or None for console-only
/// * `json_output` - If true, use JSON format for file output
pub fn init_logging(level: &str, log_dir: Option<&Path>, json_output: bool) -> Result<LogGuard> {
    let env_filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    let Some(dir) = log_dir else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .init();
        return Ok(LogGuard { _guard: None });
    };

    std::fs::create_dir_all(dir)?;
    let file_appender = rolling::daily(dir, "pinboard.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    if json_output {
        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .init();
    } else {
        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .init();
    }

    tracing::info!("logging initialized at level={level}, dir={}", dir.display());

    Ok(LogGuard { _guard: Some(guard) })
}
