use ps_config::{ConfigEntry, ConfigKey, ConfigStore};
use ps_core::error::{Result, StreamerError};
use ps_core::CommandRunner;
use tracing::{debug, info};

pub const START_SCRIPT: &str = "start_stream.sh";
pub const STOP_SCRIPT: &str = "stop_stream.sh";
pub const STATUS_SCRIPT: &str = "status_stream.sh";

/// Settings that must be present and non-empty before a stream may start.
const REQUIRED_KEYS: [ConfigKey; 2] = [ConfigKey::Platform, ConfigKey::StreamKey];

/// Starts, stops and queries the stream through the external scripts.
#[derive(Debug)]
pub struct StreamManager<R: CommandRunner> {
    runner: R,
    store: ConfigStore,
}

impl<R: CommandRunner> StreamManager<R> {
    pub fn new(runner: R, store: ConfigStore) -> Self {
        Self { runner, store }
    }

    /// Keys from [`REQUIRED_KEYS`] that are missing or empty.
    pub fn missing_settings(&self) -> Result<Vec<ConfigKey>> {
        Ok(missing_from(&self.store.read_all()?))
    }

    /// Runs the start script, refusing to do so on an incomplete configuration.
    ///
    /// Returns the configured platform URL.
    pub fn start(&self) -> Result<String> {
        self.start_with(|_| {})
    }

    /// [`start`](Self::start), calling `announce` with the platform URL after
    /// the configuration check and before the script runs.
    pub fn start_with(&self, announce: impl FnOnce(&str)) -> Result<String> {
        let entries = self.store.read_all()?;
        let missing = missing_from(&entries);
        if !missing.is_empty() {
            debug!(?missing, "refusing to start with incomplete configuration");
            return Err(StreamerError::ConfigIncomplete {
                missing: missing.iter().map(ToString::to_string).collect(),
            });
        }

        let platform = entries
            .into_iter()
            .find(|entry| entry.key == ConfigKey::Platform)
            .map(|entry| entry.value)
            .unwrap_or_default();
        announce(&platform);

        info!(platform = %platform, "starting stream");
        run_checked(&self.runner, START_SCRIPT)?;
        Ok(platform)
    }

    pub fn stop(&self) -> Result<()> {
        info!("stopping stream");
        run_checked(&self.runner, STOP_SCRIPT)
    }

    /// `true` when the status script exits with 0.
    pub fn is_running(&self) -> Result<bool> {
        let code = self.runner.run(STATUS_SCRIPT)?;
        debug!(code, "status script finished");
        Ok(code == 0)
    }
}

fn missing_from(entries: &[ConfigEntry]) -> Vec<ConfigKey> {
    REQUIRED_KEYS
        .into_iter()
        .filter(|key| {
            !entries
                .iter()
                .any(|entry| entry.key == *key && !entry.value.is_empty())
        })
        .collect()
}

/// Runs `script` and turns a nonzero exit code into an error.
pub(crate) fn run_checked<R: CommandRunner>(runner: &R, script: &str) -> Result<()> {
    let code = runner.run(script)?;
    if code != 0 {
        return Err(StreamerError::ExternalProcessFailed {
            script: script.to_string(),
            command: runner.describe(script),
            code,
        });
    }
    Ok(())
}
