// Standard library
use std::path::PathBuf;
use std::process::ExitCode;

// External crates
use clap::Parser;
use tracing::{debug, info_span};
use uuid::Uuid;

// Internal imports
use ps_core::user_paths;
use ps_core::{ps_error, ps_error_hint, ps_warning};

// Local modules
mod cli;
mod commands;
mod prompt;

use cli::Args;
use commands::execute_command;

/// Set to any value to keep stdout and stderr free of log output.
const TEST_MODE_ENV: &str = "PAGESTREAMER_TEST_MODE";

fn main() -> ExitCode {
    let args = Args::parse();

    // The guard flushes buffered file logs when it goes out of scope
    let _log_guard = if std::env::var_os(TEST_MODE_ENV).is_none() {
        let default_filter = if args.debug { "debug" } else { "warn" };
        let log_file = log_file_path(&args);
        match ps_logging::init(default_filter, log_file.as_deref()) {
            Ok(guard) => guard,
            Err(e) => {
                ps_warning!("Failed to initialize logging: {}", e);
                None
            }
        }
    } else {
        None
    };

    let request_id = Uuid::new_v4();
    let span = info_span!(
        "request",
        request_id = %request_id,
        command = args.command.name(),
    );
    let _span_guard = span.enter();
    debug!(?args, "parsed arguments");

    match execute_command(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            ps_error!("{}", e);
            if let Some(hint) = e.remediation() {
                ps_error_hint!("{}", hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn log_file_path(args: &Args) -> Option<PathBuf> {
    match &args.config_dir {
        Some(dir) => Some(dir.join(user_paths::LOG_FILE_NAME)),
        None => user_paths::default_log_path().ok(),
    }
}
