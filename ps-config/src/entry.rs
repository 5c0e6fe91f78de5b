use std::fmt;
use std::str::FromStr;

/// The settings pagestreamer knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    /// RTMP ingest base URL of the target platform.
    Platform,
    /// Secret credential for the platform ingest.
    StreamKey,
    /// HTTP(S) address of the page to capture.
    StreamUrl,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 3] = [
        ConfigKey::Platform,
        ConfigKey::StreamKey,
        ConfigKey::StreamUrl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::Platform => "PLATFORM",
            ConfigKey::StreamKey => "STREAM_KEY",
            ConfigKey::StreamUrl => "STREAM_URL",
        }
    }

    /// Returns the raw value if `line` is a `KEY=value` line for this key.
    ///
    /// Works on bytes so lines in other encodings never stop a match; the
    /// line must already be stripped of its terminator.
    pub fn match_line<'a>(&self, line: &'a [u8]) -> Option<&'a [u8]> {
        line.strip_prefix(self.as_str().as_bytes())?.strip_prefix(b"=")
    }

    /// Recognizes a line as an entry for any known key.
    pub fn parse_line(line: &[u8]) -> Option<(ConfigKey, &[u8])> {
        Self::ALL
            .iter()
            .find_map(|key| key.match_line(line).map(|value| (*key, value)))
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("Unknown configuration key '{s}'"))
    }
}

/// One recognized `KEY=value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: ConfigKey,
    pub value: String,
}

impl ConfigEntry {
    pub fn new(key: ConfigKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}
