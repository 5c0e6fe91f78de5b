//! Per-user default locations.
//!
//! These are only consulted at the call site when no explicit directory was
//! given on the command line or in the environment.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Name of the container directory under the user's home.
pub const CONTAINER_DIR_NAME: &str = ".pagestreamer";

/// Name of the key=value file inside the container directory.
pub const ENV_FILE_NAME: &str = ".env";

/// Name of the log file used with `LOG_OUTPUT=file`.
pub const LOG_FILE_NAME: &str = "pagestreamer.log";

/// Default scripts directory, relative to the working directory.
pub const DEFAULT_SCRIPTS_DIR: &str = "./scripts";

/// Get the user's home directory.
#[must_use = "home directory path should be used"]
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Could not determine home directory")
}

/// Get the default container directory (`~/.pagestreamer`).
#[must_use = "configuration directory path should be used"]
pub fn default_config_dir() -> Result<PathBuf> {
    Ok(home_dir()?.join(CONTAINER_DIR_NAME))
}

/// Get the default log file path (`~/.pagestreamer/pagestreamer.log`).
#[must_use = "log file path should be used"]
pub fn default_log_path() -> Result<PathBuf> {
    Ok(default_config_dir()?.join(LOG_FILE_NAME))
}
