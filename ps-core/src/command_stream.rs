// Standard library
use std::path::{Path, PathBuf};

// External crates
use crate::error::{Result, StreamerError};
use duct::cmd;
use tracing::{debug, warn};
use which::which;

/// Runs a named stream script and reports its exit code.
///
/// Success or failure is decided by the caller from the code alone; the
/// runner never interprets script output.
pub trait CommandRunner {
    /// Runs `script` (a path relative to the scripts directory) to completion.
    fn run(&self, script: &str) -> Result<i32>;

    /// Human-readable form of the command, used in error hints.
    fn describe(&self, script: &str) -> String {
        script.to_string()
    }
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, script: &str) -> Result<i32> {
        (**self).run(script)
    }

    fn describe(&self, script: &str) -> String {
        (**self).describe(script)
    }
}

/// Runs scripts with `bash` from inside a fixed scripts directory.
#[derive(Debug, Clone)]
pub struct ScriptRunner {
    scripts_dir: PathBuf,
    shell: String,
}

impl ScriptRunner {
    pub fn new(scripts_dir: impl Into<PathBuf>) -> Self {
        Self {
            scripts_dir: scripts_dir.into(),
            shell: "bash".to_string(),
        }
    }

    pub fn scripts_dir(&self) -> &Path {
        &self.scripts_dir
    }

    pub fn script_path(&self, script: &str) -> PathBuf {
        self.scripts_dir.join(script)
    }
}

impl CommandRunner for ScriptRunner {
    fn run(&self, script: &str) -> Result<i32> {
        if !is_tool_installed(&self.shell) {
            return Err(StreamerError::ToolMissing(self.shell.clone()));
        }

        let path = self.script_path(script);
        if !path.is_file() {
            return Err(StreamerError::ScriptMissing(path));
        }

        debug!(
            script,
            dir = %self.scripts_dir.display(),
            "running stream script"
        );

        // stdout/stderr stay attached to the terminal so the user sees the script
        let output = cmd(self.shell.as_str(), [script])
            .dir(&self.scripts_dir)
            .unchecked()
            .run()?;

        // -1 means the script was terminated by a signal
        let code = output.status.code().unwrap_or(-1);
        if code != 0 {
            warn!(script, code, "stream script exited with nonzero status");
        }
        Ok(code)
    }

    fn describe(&self, script: &str) -> String {
        format!(
            "cd {} && {} {}",
            self.scripts_dir.display(),
            self.shell,
            script
        )
    }
}

/// Checks if a command-line tool is available in the system's PATH.
pub fn is_tool_installed(tool_name: &str) -> bool {
    which(tool_name).is_ok()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_exit_code_is_reported() {
        if !is_tool_installed("bash") {
            return;
        }
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("ok.sh"), "exit 0\n").unwrap();
        fs::write(dir.path().join("fail.sh"), "exit 7\n").unwrap();

        let runner = ScriptRunner::new(dir.path());
        assert_eq!(runner.run("ok.sh").unwrap(), 0);
        assert_eq!(runner.run("fail.sh").unwrap(), 7);
    }

    #[test]
    fn test_scripts_run_inside_scripts_dir() {
        if !is_tool_installed("bash") {
            return;
        }
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("touch.sh"), "touch marker\n").unwrap();

        ScriptRunner::new(dir.path()).run("touch.sh").unwrap();
        assert!(dir.path().join("marker").exists());
    }

    #[test]
    fn test_missing_script_is_an_error() {
        let dir = TempDir::new().unwrap();
        let runner = ScriptRunner::new(dir.path());
        match runner.run("absent.sh") {
            Err(StreamerError::ScriptMissing(path)) => assert!(path.ends_with("absent.sh")),
            Err(StreamerError::ToolMissing(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_describe_mentions_directory() {
        let runner = ScriptRunner::new("/opt/stream/scripts");
        assert_eq!(
            runner.describe("start_stream.sh"),
            "cd /opt/stream/scripts && bash start_stream.sh"
        );
    }
}
