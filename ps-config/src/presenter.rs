//! Masked view of the stored settings, as printed by `config see`.

use crate::{ConfigEntry, ConfigKey};
use colored::Colorize;
use ps_messages::MESSAGES;
use std::fmt;

/// Hides the middle of a secret.
///
/// Longer than 8 characters keeps the first and last 4; 2 to 8 keeps the
/// first and last one; a single character is shown as is; empty is
/// reported as not configured. Counts are in characters, not bytes.
pub fn mask_secret(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let len = chars.len();

    let visible = match len {
        0 => return MESSAGES.config.not_configured.to_string(),
        1 => return value.to_string(),
        2..=8 => 1,
        _ => 4,
    };

    let mut masked = String::with_capacity(value.len());
    masked.extend(&chars[..visible]);
    masked.push_str(&"*".repeat(len.saturating_sub(visible * 2)));
    masked.extend(&chars[len - visible..]);
    masked
}

/// The three settings as they should be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigView {
    pub platform: String,
    pub stream_key: String,
    pub stream_url: String,
}

impl ConfigView {
    pub fn from_entries(entries: &[ConfigEntry]) -> Self {
        let lookup = |key: ConfigKey| {
            entries
                .iter()
                .find(|entry| entry.key == key && !entry.value.is_empty())
                .map(|entry| entry.value.as_str())
        };
        let not_configured = || MESSAGES.config.not_configured.to_string();

        Self {
            platform: lookup(ConfigKey::Platform)
                .map(str::to_string)
                .unwrap_or_else(not_configured),
            stream_key: lookup(ConfigKey::StreamKey)
                .map(mask_secret)
                .unwrap_or_else(not_configured),
            stream_url: lookup(ConfigKey::StreamUrl)
                .map(str::to_string)
                .unwrap_or_else(not_configured),
        }
    }
}

impl fmt::Display for ConfigView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", MESSAGES.config.current_header.bold().cyan())?;
        writeln!(
            f,
            "{}{}",
            MESSAGES.config.platform_label.cyan(),
            self.platform
        )?;
        writeln!(
            f,
            "{}{}",
            MESSAGES.config.stream_key_label.cyan(),
            self.stream_key
        )?;
        write!(
            f,
            "{}{}",
            MESSAGES.config.stream_url_label.cyan(),
            self.stream_url
        )
    }
}
