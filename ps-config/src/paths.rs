use ps_core::user_paths::ENV_FILE_NAME;
use std::path::{Path, PathBuf};

/// Location of the env file: a container directory plus a file name.
///
/// The store never resolves `$HOME` itself; callers build this from the
/// command line, the environment, or [`ps_core::user_paths`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    container_dir: PathBuf,
    file_name: String,
}

impl ConfigPaths {
    pub fn new(container_dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            container_dir: container_dir.into(),
            file_name: file_name.into(),
        }
    }

    /// Uses the standard `.env` file name inside `container_dir`.
    pub fn in_dir(container_dir: impl Into<PathBuf>) -> Self {
        Self::new(container_dir, ENV_FILE_NAME)
    }

    pub fn container_dir(&self) -> &Path {
        &self.container_dir
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn file_path(&self) -> PathBuf {
        self.container_dir.join(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_path_joins_dir_and_name() {
        let paths = ConfigPaths::in_dir("/home/streamer/.pagestreamer");
        assert_eq!(
            paths.file_path(),
            PathBuf::from("/home/streamer/.pagestreamer/.env")
        );
        assert_eq!(paths.file_name(), ".env");
    }
}
