//! Env file persistence.
//!
//! Every write is a full rewrite: existing lines are copied into a temporary
//! file in the same directory with one key replaced or appended, and the
//! temporary file is renamed over the original. Readers see either the old
//! file or the new one, never a partial write.

use crate::{ConfigEntry, ConfigKey, ConfigPaths};
use ps_core::error::StreamerError;
use ps_messages::msg;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Mode of the container directory when this program creates it.
pub const CONTAINER_DIR_MODE: u32 = 0o755;
/// Mode of the env file.
pub const ENV_FILE_MODE: u32 = 0o644;

/// Step of a write that could not be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageStage {
    CreateDirectory,
    CreateFile,
    WriteTemporary,
}

impl fmt::Display for StorageStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StorageStage::CreateDirectory => "create the configuration directory",
            StorageStage::CreateFile => "create the env file",
            StorageStage::WriteTemporary => "write the temporary file",
        };
        f.write_str(text)
    }
}

/// Errors that can occur while reading or rewriting the env file.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("cannot {stage} for {}: {source}", .file.display())]
    PermissionDenied {
        stage: StorageStage,
        file: PathBuf,
        source: io::Error,
    },
    #[error("cannot swap new contents into {}: {source}", .file.display())]
    SwapFailed { file: PathBuf, source: io::Error },
    #[error("cannot read {}: {source}", .file.display())]
    Unreadable { file: PathBuf, source: io::Error },
    #[error("value for {key} must be a single line")]
    InvalidValue { key: ConfigKey },
}

impl StorageError {
    pub fn file(&self) -> Option<&Path> {
        match self {
            StorageError::PermissionDenied { file, .. }
            | StorageError::SwapFailed { file, .. }
            | StorageError::Unreadable { file, .. } => Some(file),
            StorageError::InvalidValue { .. } => None,
        }
    }
}

impl From<StorageError> for StreamerError {
    fn from(err: StorageError) -> Self {
        let file = err
            .file()
            .map(|f| f.display().to_string())
            .unwrap_or_default();
        let dir = err
            .file()
            .and_then(Path::parent)
            .map(|d| d.display().to_string())
            .unwrap_or_default();

        let (message, remediation) = match &err {
            StorageError::PermissionDenied {
                stage: StorageStage::CreateDirectory,
                source,
                ..
            } => (
                msg!(storage.create_dir_failed, dir = &dir, error = source),
                msg!(storage.create_hint, dir = &dir, file = &file),
            ),
            StorageError::PermissionDenied {
                stage: StorageStage::CreateFile,
                source,
                ..
            } => (
                msg!(storage.create_file_failed, file = &file, error = source),
                msg!(storage.create_hint, dir = &dir, file = &file),
            ),
            StorageError::PermissionDenied {
                stage: StorageStage::WriteTemporary,
                source,
                ..
            }
            | StorageError::Unreadable { source, .. } => (
                msg!(storage.write_failed, file = &file, error = source),
                msg!(storage.write_hint, dir = &dir),
            ),
            StorageError::SwapFailed { source, .. } => (
                msg!(storage.swap_failed, file = &file, error = source),
                msg!(storage.swap_hint, file = &file, dir = &dir),
            ),
            StorageError::InvalidValue { .. } => (
                err.to_string(),
                "Enter the value again without line breaks".to_string(),
            ),
        };

        StreamerError::Storage {
            message,
            remediation,
        }
    }
}

/// Reads and rewrites the env file described by a [`ConfigPaths`].
#[derive(Debug, Clone)]
pub struct ConfigStore {
    paths: ConfigPaths,
}

impl ConfigStore {
    pub fn new(paths: ConfigPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    pub fn file_path(&self) -> PathBuf {
        self.paths.file_path()
    }

    /// Makes sure the container directory exists, creating it with mode 755.
    ///
    /// An existing directory is left as is; if its owner cannot write to it
    /// the temporary file step reports the problem.
    pub fn ensure_container(&self) -> Result<(), StorageError> {
        let dir = self.paths.container_dir();
        let denied = |source| StorageError::PermissionDenied {
            stage: StorageStage::CreateDirectory,
            file: self.paths.file_path(),
            source,
        };

        if dir.is_dir() {
            return Ok(());
        }

        fs::create_dir_all(dir).map_err(denied)?;
        set_mode(dir, CONTAINER_DIR_MODE).map_err(denied)?;
        debug!(dir = %dir.display(), "created configuration directory");
        Ok(())
    }

    /// All recognized entries, first occurrence of each key only.
    ///
    /// A missing file reads as empty.
    pub fn read_all(&self) -> Result<Vec<ConfigEntry>, StorageError> {
        let content = match self.read_raw()? {
            Some(content) => content,
            None => return Ok(Vec::new()),
        };

        let mut entries: Vec<ConfigEntry> = Vec::new();
        for line in content.split(|&b| b == b'\n') {
            if let Some((key, value)) = ConfigKey::parse_line(strip_cr(line)) {
                if !entries.iter().any(|entry| entry.key == key) {
                    entries.push(ConfigEntry::new(key, String::from_utf8_lossy(value)));
                }
            }
        }
        Ok(entries)
    }

    pub fn get(&self, key: ConfigKey) -> Result<Option<String>, StorageError> {
        Ok(self
            .read_all()?
            .into_iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value))
    }

    /// Replaces (or appends) `key` and atomically swaps the result into place.
    pub fn set(&self, key: ConfigKey, value: &str) -> Result<(), StorageError> {
        if value.contains(|c: char| c == '\n' || c == '\r') {
            return Err(StorageError::InvalidValue { key });
        }

        self.ensure_container()?;

        let file = self.paths.file_path();
        if !file.exists() {
            create_empty(&file).map_err(|source| StorageError::PermissionDenied {
                stage: StorageStage::CreateFile,
                file: file.clone(),
                source,
            })?;
        }

        let existing = self.read_raw()?.unwrap_or_default();
        let rewritten = rewrite_lines(&existing, key, value);
        replace_file(self.paths.container_dir(), &file, &rewritten)?;

        debug!(key = %key, file = %file.display(), "updated env file");
        Ok(())
    }

    fn read_raw(&self) -> Result<Option<Vec<u8>>, StorageError> {
        let file = self.paths.file_path();
        match fs::read(&file) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Unreadable { file, source }),
        }
    }
}

/// Writes `contents` to a temporary file in `dir` and renames it over
/// `target`. `target` is never opened for writing, so it keeps its old
/// contents unless the rename succeeds.
fn replace_file(dir: &Path, target: &Path, contents: &[u8]) -> Result<(), StorageError> {
    let write_failed = |source| StorageError::PermissionDenied {
        stage: StorageStage::WriteTemporary,
        file: target.to_path_buf(),
        source,
    };

    // Dropping the temp file on any early return removes it
    let mut temp_file = tempfile::Builder::new()
        .prefix(".env-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(write_failed)?;
    temp_file.write_all(contents).map_err(write_failed)?;
    temp_file.as_file().sync_all().map_err(write_failed)?;
    set_mode(temp_file.path(), ENV_FILE_MODE).map_err(write_failed)?;

    temp_file
        .persist(target)
        .map_err(|e| StorageError::SwapFailed {
            file: target.to_path_buf(),
            source: e.error,
        })?;
    Ok(())
}

/// Copies `existing` line by line, replacing the first `key=` line and
/// dropping later duplicates of it. Appends when the key is absent.
///
/// Other lines are copied byte for byte with their own terminators. New
/// lines use the terminator of the file's last line.
fn rewrite_lines(existing: &[u8], key: ConfigKey, value: &str) -> Vec<u8> {
    let newline: &[u8] = if existing.ends_with(b"\r\n") {
        b"\r\n"
    } else {
        b"\n"
    };
    let replacement = format!("{}={}", key.as_str(), value);
    let mut out = Vec::with_capacity(existing.len() + replacement.len() + 2);
    let mut replaced = false;

    for line in existing.split_inclusive(|&b| b == b'\n') {
        let body = strip_cr(line.strip_suffix(b"\n").unwrap_or(line));
        if key.match_line(body).is_some() {
            if !replaced {
                out.extend_from_slice(replacement.as_bytes());
                out.extend_from_slice(&line[body.len()..]);
                replaced = true;
            }
            continue;
        }
        out.extend_from_slice(line);
    }

    if !out.is_empty() && !out.ends_with(b"\n") {
        out.extend_from_slice(newline);
    }
    if !replaced {
        out.extend_from_slice(replacement.as_bytes());
        out.extend_from_slice(newline);
    }
    out
}

fn strip_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn create_empty(path: &Path) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(ENV_FILE_MODE);
    }
    match options.open(path) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> io::Result<()> {
    Ok(())
}
