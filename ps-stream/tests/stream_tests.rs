use anyhow::Result;
use ps_config::{ConfigKey, ConfigPaths, ConfigStore};
use ps_core::StreamerError;
use ps_stream::mock::MockRunner;
use ps_stream::{
    Scheduler, StreamManager, CRON_UPDATE_SCRIPT, START_SCRIPT, STATUS_SCRIPT, STOP_SCRIPT,
};
use std::fs;
use tempfile::TempDir;

/// Test fixture with an isolated env file
struct StreamFixture {
    temp_dir: TempDir,
}

impl StreamFixture {
    fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    fn store(&self) -> ConfigStore {
        ConfigStore::new(ConfigPaths::in_dir(self.temp_dir.path().join(".pagestreamer")))
    }

    fn configured_store(&self) -> Result<ConfigStore> {
        let store = self.store();
        store.set(ConfigKey::Platform, "rtmp://a.rtmp.youtube.com/live2")?;
        store.set(ConfigKey::StreamKey, "xxxx-yyyy-zzzz")?;
        Ok(store)
    }
}

#[test]
fn test_start_without_stream_key_never_runs_script() -> Result<()> {
    let fixture = StreamFixture::new()?;
    let store = fixture.store();
    store.set(ConfigKey::Platform, "rtmp://live.twitch.tv/app")?;

    let runner = MockRunner::new();
    let manager = StreamManager::new(&runner, store);

    match manager.start() {
        Err(StreamerError::ConfigIncomplete { missing }) => {
            assert_eq!(missing, vec!["STREAM_KEY".to_string()]);
        }
        other => panic!("expected ConfigIncomplete, got {other:?}"),
    }
    assert!(runner.calls().is_empty());
    Ok(())
}

#[test]
fn test_start_on_empty_configuration_lists_both_keys() -> Result<()> {
    let fixture = StreamFixture::new()?;
    let runner = MockRunner::new();
    let manager = StreamManager::new(&runner, fixture.store());

    match manager.start() {
        Err(StreamerError::ConfigIncomplete { missing }) => {
            assert_eq!(missing, vec!["PLATFORM".to_string(), "STREAM_KEY".to_string()]);
        }
        other => panic!("expected ConfigIncomplete, got {other:?}"),
    }
    assert!(runner.calls().is_empty());
    Ok(())
}

#[test]
fn test_start_runs_script_when_configured() -> Result<()> {
    let fixture = StreamFixture::new()?;
    let runner = MockRunner::new();
    let manager = StreamManager::new(&runner, fixture.configured_store()?);

    manager.start()?;
    assert_eq!(runner.calls(), vec![START_SCRIPT.to_string()]);
    Ok(())
}

#[test]
fn test_start_failure_reports_exit_code() -> Result<()> {
    let fixture = StreamFixture::new()?;
    let runner = MockRunner::new().with_exit_code(START_SCRIPT, 1);
    let manager = StreamManager::new(&runner, fixture.configured_store()?);

    let err = manager.start().unwrap_err();
    assert!(matches!(
        err,
        StreamerError::ExternalProcessFailed { code: 1, .. }
    ));
    Ok(())
}

#[test]
fn test_stop_is_always_attempted() -> Result<()> {
    let fixture = StreamFixture::new()?;
    let runner = MockRunner::new().with_exit_code(STOP_SCRIPT, 4);
    let manager = StreamManager::new(&runner, fixture.store());

    let err = manager.stop().unwrap_err();
    assert!(matches!(
        err,
        StreamerError::ExternalProcessFailed { code: 4, .. }
    ));
    assert_eq!(runner.calls(), vec![STOP_SCRIPT.to_string()]);
    Ok(())
}

#[test]
fn test_status_is_a_boolean_not_an_error() -> Result<()> {
    let fixture = StreamFixture::new()?;

    let running = MockRunner::new();
    assert!(StreamManager::new(&running, fixture.store()).is_running()?);

    let stopped = MockRunner::new().with_exit_code(STATUS_SCRIPT, 3);
    assert!(!StreamManager::new(&stopped, fixture.store()).is_running()?);
    Ok(())
}

#[test]
fn test_scheduler_runs_update_script() -> Result<()> {
    let fixture = StreamFixture::new()?;
    let scripts_dir = fixture.temp_dir.path().join("scripts");
    fs::create_dir_all(scripts_dir.join("cron"))?;
    fs::write(scripts_dir.join(CRON_UPDATE_SCRIPT), "crontab cron/crontab.txt\n")?;

    let runner = MockRunner::new();
    let scheduler = Scheduler::new(&runner, &scripts_dir);
    scheduler.install()?;

    assert_eq!(runner.calls(), vec![CRON_UPDATE_SCRIPT.to_string()]);
    assert!(scheduler.crontab_path().ends_with("cron/crontab.txt"));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(scheduler.update_script_path())?.permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }
    Ok(())
}

#[test]
fn test_scheduler_failure_is_reported() -> Result<()> {
    let fixture = StreamFixture::new()?;
    let runner = MockRunner::new().with_exit_code(CRON_UPDATE_SCRIPT, 1);
    let scheduler = Scheduler::new(&runner, fixture.temp_dir.path());

    assert!(matches!(
        scheduler.install(),
        Err(StreamerError::ExternalProcessFailed { .. })
    ));
    Ok(())
}
