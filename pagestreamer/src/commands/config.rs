// Interactive configuration commands

use crate::cli::ConfigTarget;
use crate::prompt::Prompt;
use ps_config::{ConfigKey, ConfigStore, ConfigView};
use ps_core::{ps_error, ps_error_hint, ps_info, ps_println, ps_success, Result};
use ps_messages::{msg, MESSAGES};
use std::io::{BufRead, Write};
use tracing::warn;

/// Runs one configuration step, or all of them when `target` is `None`.
pub fn handle_config<R: BufRead, W: Write>(
    target: Option<ConfigTarget>,
    store: &ConfigStore,
    prompt: &mut Prompt<R, W>,
) -> Result<bool> {
    match target {
        Some(ConfigTarget::Platform) => configure_platform(store, prompt),
        Some(ConfigTarget::StreamKey) => configure_stream_key(store, prompt),
        Some(ConfigTarget::StreamUrl) => configure_stream_url(store, prompt),
        Some(ConfigTarget::See) => show_config(store),
        None => configure_all(store, prompt),
    }
}

/// Platform, then key, then URL. Every step runs even after a failure.
pub fn configure_all<R: BufRead, W: Write>(
    store: &ConfigStore,
    prompt: &mut Prompt<R, W>,
) -> Result<bool> {
    let platform = report_step(configure_platform(store, prompt))?;
    ps_println!();
    let stream_key = report_step(configure_stream_key(store, prompt))?;
    ps_println!();
    let stream_url = report_step(configure_stream_url(store, prompt))?;
    ps_println!();

    if platform && stream_key && stream_url {
        ps_success!("{}", MESSAGES.config.saved);
        ps_info!("{}", MESSAGES.config.change_hint);
        ps_info!("{}", MESSAGES.config.view_hint);
        Ok(true)
    } else {
        ps_error!("{}", MESSAGES.config.failed);
        Ok(false)
    }
}

pub fn configure_platform<R: BufRead, W: Write>(
    store: &ConfigStore,
    prompt: &mut Prompt<R, W>,
) -> Result<bool> {
    let choice = prompt.choose_platform()?;
    ps_info!("{}", msg!(config.platform_set, name = choice.name));
    store.set(ConfigKey::Platform, &choice.rtmp_url)?;
    Ok(true)
}

pub fn configure_stream_key<R: BufRead, W: Write>(
    store: &ConfigStore,
    prompt: &mut Prompt<R, W>,
) -> Result<bool> {
    let key = prompt.read_secret()?;
    if key.is_empty() {
        ps_error!("{}", MESSAGES.config.stream_key_empty);
        return Ok(false);
    }
    store.set(ConfigKey::StreamKey, &key)?;
    Ok(true)
}

pub fn configure_stream_url<R: BufRead, W: Write>(
    store: &ConfigStore,
    prompt: &mut Prompt<R, W>,
) -> Result<bool> {
    let url = prompt.read_stream_url()?;
    store.set(ConfigKey::StreamUrl, &url)?;
    Ok(true)
}

/// Read-only: prints the masked view.
pub fn show_config(store: &ConfigStore) -> Result<bool> {
    let view = ConfigView::from_entries(&store.read_all()?);
    ps_println!("{}", view);
    Ok(true)
}

/// Storage failures inside a full run are reported and count as a failed
/// step; prompt I/O failures still abort.
fn report_step(outcome: Result<bool>) -> Result<bool> {
    match outcome {
        Ok(done) => Ok(done),
        Err(e @ ps_core::StreamerError::Prompt(_)) => Err(e),
        Err(e) => {
            warn!(error = %e, "configuration step failed");
            ps_error!("{}", e);
            if let Some(hint) = e.remediation() {
                ps_error_hint!("{}", hint);
            }
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ps_config::ConfigPaths;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, ConfigStore) {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::new(ConfigPaths::in_dir(dir.path().join(".pagestreamer")));
        (dir, store)
    }

    fn prompt(input: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
        Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_full_run_stores_all_three_settings() {
        let (_dir, store) = fixture();
        let mut p = prompt("2\nlive_abc\nexample.org\n");

        assert!(configure_all(&store, &mut p).unwrap());
        assert_eq!(
            store.get(ConfigKey::Platform).unwrap().as_deref(),
            Some("rtmp://live.twitch.tv/app")
        );
        assert_eq!(store.get(ConfigKey::StreamKey).unwrap().as_deref(), Some("live_abc"));
        assert_eq!(
            store.get(ConfigKey::StreamUrl).unwrap().as_deref(),
            Some("https://example.org")
        );
    }

    #[test]
    fn test_empty_key_fails_but_later_steps_still_run() {
        let (_dir, store) = fixture();
        let mut p = prompt("1\n\nhttps://example.net/\n");

        assert!(!configure_all(&store, &mut p).unwrap());
        assert_eq!(store.get(ConfigKey::StreamKey).unwrap(), None);
        assert_eq!(
            store.get(ConfigKey::StreamUrl).unwrap().as_deref(),
            Some("https://example.net/")
        );
    }

    #[test]
    fn test_empty_key_leaves_previous_value() {
        let (_dir, store) = fixture();
        store.set(ConfigKey::StreamKey, "kept").unwrap();

        let outcome = handle_config(Some(ConfigTarget::StreamKey), &store, &mut prompt("\n"));
        assert!(!outcome.unwrap());
        assert_eq!(store.get(ConfigKey::StreamKey).unwrap().as_deref(), Some("kept"));
    }

    #[test]
    fn test_see_never_writes() {
        let (dir, store) = fixture();
        assert!(handle_config(Some(ConfigTarget::See), &store, &mut prompt("")).unwrap());
        assert!(!dir.path().join(".pagestreamer").exists());
    }
}
