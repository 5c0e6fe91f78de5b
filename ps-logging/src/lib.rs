//! Tracing initialization for pagestreamer.
//!
//! Filtering uses the standard `RUST_LOG` variable. Other knobs:
//! - `RUST_LOG_FORMAT`: `compact` (default), `pretty` or `json`
//! - `LOG_OUTPUT`: `console` (default, stderr) or `file`
//! - `LOG_FILE_PATH`: log file for `LOG_OUTPUT=file`, rotated daily
//!
//! Stdout is reserved for user-facing output, so console logs go to stderr.

use anyhow::{anyhow, Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Compact,
        }
    }

    fn from_env() -> Self {
        env::var("RUST_LOG_FORMAT")
            .map(|v| Self::parse(&v))
            .unwrap_or(LogFormat::Compact)
    }
}

/// Initialize the global subscriber.
///
/// `default_filter` applies when `RUST_LOG` is unset. `default_log_file` is
/// used for `LOG_OUTPUT=file` when `LOG_FILE_PATH` is unset. The returned
/// guard must be held until exit so buffered file output is flushed.
pub fn init(default_filter: &str, default_log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let format = LogFormat::from_env();
    let output = env::var("LOG_OUTPUT").unwrap_or_else(|_| "console".to_string());

    if output != "file" {
        install(env_filter, format, std::io::stderr, true)?;
        return Ok(None);
    }

    let log_path = env::var("LOG_FILE_PATH")
        .ok()
        .map(PathBuf::from)
        .or_else(|| default_log_file.map(Path::to_path_buf))
        .context("LOG_OUTPUT=file requires LOG_FILE_PATH")?;
    let log_dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let log_filename = log_path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", log_path.display()))?;

    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    install(env_filter, format, non_blocking, false)?;

    Ok(Some(guard))
}

fn install<W>(env_filter: EnvFilter, format: LogFormat, writer: W, ansi: bool) -> Result<()>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(env_filter);
    let layer = fmt::layer().with_writer(writer).with_ansi(ansi);

    match format {
        LogFormat::Json => registry.with(layer.json()).try_init(),
        LogFormat::Pretty => registry.with(layer.pretty()).try_init(),
        LogFormat::Compact => registry.with(layer.compact()).try_init(),
    }
    .map_err(|e| anyhow!("Failed to initialize tracing: {e}"))
}
