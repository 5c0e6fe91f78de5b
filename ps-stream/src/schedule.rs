//! Cron schedule installation.
//!
//! The schedule itself is a crontab file the user edits by hand; installing
//! it is delegated to an update script next to it.

use crate::manager::run_checked;
use ps_core::error::Result;
use ps_core::CommandRunner;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Crontab source, relative to the scripts directory.
pub const CRONTAB_FILE: &str = "cron/crontab.txt";
/// Script that installs [`CRONTAB_FILE`], relative to the scripts directory.
pub const CRON_UPDATE_SCRIPT: &str = "cron/update_crontab.sh";

#[derive(Debug)]
pub struct Scheduler<R: CommandRunner> {
    runner: R,
    scripts_dir: PathBuf,
}

impl<R: CommandRunner> Scheduler<R> {
    pub fn new(runner: R, scripts_dir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            scripts_dir: scripts_dir.into(),
        }
    }

    pub fn crontab_path(&self) -> PathBuf {
        self.scripts_dir.join(CRONTAB_FILE)
    }

    pub fn update_script_path(&self) -> PathBuf {
        self.scripts_dir.join(CRON_UPDATE_SCRIPT)
    }

    /// Marks the update script executable and runs it.
    pub fn install(&self) -> Result<()> {
        let script = self.update_script_path();
        if script.is_file() {
            if let Err(e) = make_executable(&script) {
                warn!(
                    path = %script.display(),
                    error = %e,
                    "could not mark update script executable"
                );
            }
        }

        info!(crontab = %self.crontab_path().display(), "installing cron schedule");
        run_checked(&self.runner, CRON_UPDATE_SCRIPT)
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut permissions = std::fs::metadata(path)?.permissions();
    permissions.set_mode(permissions.mode() | 0o755);
    std::fs::set_permissions(path, permissions)
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
