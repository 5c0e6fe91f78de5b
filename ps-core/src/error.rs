use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StreamerError {
    /// The env file or its directory could not be created, written or swapped.
    Storage {
        message: String,
        remediation: String,
    },
    /// `start` was requested before the required keys were set.
    ConfigIncomplete { missing: Vec<String> },
    /// A stream script exited with a nonzero status.
    ExternalProcessFailed {
        script: String,
        command: String,
        code: i32,
    },
    ScriptMissing(PathBuf),
    ToolMissing(String),
    Prompt(String),
    Io(#[from] std::io::Error),
    Other(#[from] anyhow::Error),
}

impl StreamerError {
    /// Suggested next step for the user, printed after the error itself.
    pub fn remediation(&self) -> Option<String> {
        match self {
            StreamerError::Storage { remediation, .. } => Some(remediation.clone()),
            StreamerError::ConfigIncomplete { .. } => Some(
                "Configure the stream first:\n  • Run: pagestreamer config\n  • Check: pagestreamer config see"
                    .to_string(),
            ),
            StreamerError::ExternalProcessFailed { command, .. } => Some(format!(
                "Check the stream logs for details, or run the script manually:\n  {command}"
            )),
            StreamerError::ScriptMissing(_) => Some(
                "Point pagestreamer at the scripts directory with --scripts-dir or PAGESTREAMER_SCRIPTS"
                    .to_string(),
            ),
            StreamerError::ToolMissing(tool) => {
                Some(format!("Install {tool} and make sure it is on your PATH"))
            }
            StreamerError::Prompt(_) | StreamerError::Io(_) | StreamerError::Other(_) => None,
        }
    }
}

impl Display for StreamerError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            StreamerError::Storage { message, .. } => write!(f, "Storage error: {}", message),
            StreamerError::ConfigIncomplete { missing } => write!(
                f,
                "Configuration incomplete: missing {}",
                missing.join(", ")
            ),
            StreamerError::ExternalProcessFailed { script, code, .. } => {
                write!(f, "Script {} failed with exit code {}", script, code)
            }
            StreamerError::ScriptMissing(path) => {
                write!(f, "Script not found: {}", path.display())
            }
            StreamerError::ToolMissing(tool) => write!(f, "Dependency not found: {}", tool),
            StreamerError::Prompt(s) => write!(f, "Input error: {}", s),
            StreamerError::Io(e) => write!(f, "I/O error: {}", e),
            StreamerError::Other(e) => write!(f, "{}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, StreamerError>;
