//! Line-based interactive input for `config` and `schedule`.
//!
//! Invalid answers are never errors here: they fall back to a default or
//! produce a value the caller rejects. Only I/O failures are reported as
//! [`StreamerError::Prompt`].

#[cfg(unix)]
mod echo;
mod platform;

#[cfg(unix)]
use echo::EchoGuard;
use platform::{Platform, PLATFORMS};

pub use platform::PlatformChoice;

use colored::Colorize;
use ps_core::{Result, StreamerError};
use ps_messages::{msg, MESSAGES};
use std::io::{self, BufRead, IsTerminal, StdinLock, Stdout, Write};
#[cfg(unix)]
use std::os::fd::AsFd;
use tracing::{debug, warn};

/// Page streamed when the user enters nothing.
pub const DEFAULT_STREAM_URL: &str = "https://example.com/";

/// Answers accepted by [`Prompt::confirm_schedule`].
const CONFIRM_ANSWERS: [&str; 3] = ["yes", "YES", "Yes"];

pub struct Prompt<R, W> {
    input: R,
    output: W,
    /// Turn terminal echo off while reading secrets.
    conceal: bool,
}

impl Prompt<StdinLock<'static>, Stdout> {
    /// Prompt bound to the process's stdin and stdout.
    pub fn terminal() -> Self {
        let stdin = io::stdin();
        let conceal = stdin.is_terminal();
        Self {
            input: stdin.lock(),
            output: io::stdout(),
            conceal,
        }
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            conceal: false,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Shows the platform menu and returns the selection.
    ///
    /// Anything other than a valid menu number selects the first platform.
    pub fn choose_platform(&mut self) -> Result<PlatformChoice> {
        self.say(&MESSAGES.config.platform_header.bold().to_string())?;
        for (index, platform) in PLATFORMS.iter().enumerate() {
            let line = msg!(config.platform_option, index = index + 1, name = platform.name);
            self.say(&line)?;
        }

        let prompt = msg!(config.platform_prompt, count = PLATFORMS.len());
        let answer = self.ask(&prompt)?.unwrap_or_default();
        let platform = match Platform::from_selection(&answer) {
            Some(platform) => platform,
            None => {
                warn!(input = %answer.trim(), "invalid platform selection");
                self.say(&MESSAGES.config.platform_invalid.yellow().to_string())?;
                &PLATFORMS[0]
            }
        };

        let rtmp_url = if platform.is_custom() {
            let answer = self.ask(MESSAGES.config.platform_custom_prompt)?;
            answer.unwrap_or_default().trim().to_string()
        } else {
            platform.rtmp_url.to_string()
        };

        Ok(PlatformChoice {
            name: platform.name.to_string(),
            rtmp_url,
        })
    }

    /// Reads the stream key without echoing it when attached to a terminal.
    pub fn read_secret(&mut self) -> Result<String> {
        self.say(&MESSAGES.config.stream_key_header.bold().to_string())?;
        self.say(MESSAGES.config.stream_key_hidden_hint)?;
        self.write(MESSAGES.config.stream_key_prompt)?;

        let line = if self.conceal {
            self.read_hidden()?
        } else {
            self.read_line()?
        };
        Ok(line.unwrap_or_default().trim().to_string())
    }

    /// Reads the page URL, defaulting and adding a scheme where needed.
    pub fn read_stream_url(&mut self) -> Result<String> {
        self.say(&MESSAGES.config.stream_url_header.bold().to_string())?;
        let answer = self.ask(MESSAGES.config.stream_url_prompt)?.unwrap_or_default();

        let token = answer.split_whitespace().next().unwrap_or("");
        if token.is_empty() {
            let line = msg!(config.stream_url_default, url = DEFAULT_STREAM_URL);
            self.say(&line)?;
            return Ok(DEFAULT_STREAM_URL.to_string());
        }
        if !token.starts_with("http") {
            self.say(&MESSAGES.config.stream_url_prefixed.yellow().to_string())?;
            return Ok(format!("https://{token}"));
        }
        Ok(token.to_string())
    }

    /// `true` only for an explicit yes.
    pub fn confirm_schedule(&mut self) -> Result<bool> {
        let answer = self.ask(MESSAGES.schedule.confirm_prompt)?.unwrap_or_default();
        let answer = answer.trim();
        let confirmed = CONFIRM_ANSWERS.iter().any(|accepted| *accepted == answer);
        debug!(confirmed, "schedule confirmation");
        Ok(confirmed)
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.write(prompt)?;
        self.read_line()
    }

    #[cfg(unix)]
    fn read_hidden(&mut self) -> Result<Option<String>> {
        self.read_line_without_echo(io::stdin())
    }

    #[cfg(not(unix))]
    fn read_hidden(&mut self) -> Result<Option<String>> {
        self.read_line()
    }

    /// Reads one line from `input` while echo is off on `terminal`.
    ///
    /// Echo comes back before this returns, also when the read fails.
    #[cfg(unix)]
    fn read_line_without_echo<F: AsFd>(&mut self, terminal: F) -> Result<Option<String>> {
        let guard = EchoGuard::disable(terminal)?;
        let line = self.read_line();
        let concealed = guard.is_some();
        drop(guard);

        if concealed {
            // The user's ENTER was not echoed
            self.say("")?;
        }
        line
    }

    /// `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(prompt_error)?;
        Ok((read > 0).then_some(line))
    }

    fn write(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}").map_err(prompt_error)?;
        self.output.flush().map_err(prompt_error)
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").map_err(prompt_error)
    }
}

fn prompt_error(e: io::Error) -> StreamerError {
    StreamerError::Prompt(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
        colored::control::set_override(false);
        Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(prompt: Prompt<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompt.into_output()).unwrap()
    }

    #[test]
    fn test_choose_listed_platform() {
        let mut p = prompt("2\n");
        let choice = p.choose_platform().unwrap();
        assert_eq!(choice.name, "Twitch");
        assert_eq!(choice.rtmp_url, "rtmp://live.twitch.tv/app");

        let out = output_of(p);
        assert!(out.contains("1. YouTube"));
        assert!(out.contains("7. Custom"));
        assert!(out.contains("Enter number (1-7): "));
    }

    #[test]
    fn test_invalid_selection_falls_back_to_youtube() {
        for input in ["9\n", "abc\n", "0\n", "\n", ""] {
            let mut p = prompt(input);
            let choice = p.choose_platform().unwrap();
            assert_eq!(choice.name, "YouTube", "input {:?}", input);
            assert_eq!(choice.rtmp_url, "rtmp://a.rtmp.youtube.com/live2");
            assert!(output_of(p).contains("Invalid selection. Using YouTube as default."));
        }
    }

    #[test]
    fn test_rest_of_bad_line_is_consumed() {
        let mut p = prompt("3 extra words\nmy-key\n");
        assert_eq!(p.choose_platform().unwrap().name, "YouTube");
        assert_eq!(p.read_secret().unwrap(), "my-key");
    }

    #[test]
    fn test_custom_platform_reads_url() {
        let mut p = prompt("7\n  rtmp://ingest.example.net/live  \n");
        let choice = p.choose_platform().unwrap();
        assert_eq!(choice.name, "Custom");
        assert_eq!(choice.rtmp_url, "rtmp://ingest.example.net/live");
        assert!(output_of(p).contains("Enter custom RTMP URL: "));
    }

    #[test]
    fn test_secret_is_trimmed() {
        let mut p = prompt("  live_abc123  \n");
        assert_eq!(p.read_secret().unwrap(), "live_abc123");
    }

    #[test]
    fn test_secret_at_eof_is_empty() {
        let mut p = prompt("");
        assert_eq!(p.read_secret().unwrap(), "");
    }

    #[test]
    fn test_stream_url_defaults_when_empty() {
        let mut p = prompt("\n");
        assert_eq!(p.read_stream_url().unwrap(), "https://example.com/");
        assert!(output_of(p).contains("Using default: https://example.com/"));
    }

    #[test]
    fn test_stream_url_gets_scheme() {
        let mut p = prompt("example.org/dashboard\n");
        assert_eq!(p.read_stream_url().unwrap(), "https://example.org/dashboard");
    }

    #[test]
    fn test_stream_url_keeps_first_token() {
        let mut p = prompt("http://localhost:8080/page trailing\n");
        assert_eq!(p.read_stream_url().unwrap(), "http://localhost:8080/page");
    }

    #[test]
    fn test_schedule_confirmation_answers() {
        for (input, expected) in [
            ("yes\n", true),
            ("YES\n", true),
            ("Yes\n", true),
            ("y\n", false),
            ("yEs\n", false),
            ("no\n", false),
            ("", false),
        ] {
            let mut p = prompt(input);
            assert_eq!(p.confirm_schedule().unwrap(), expected, "input {:?}", input);
        }
    }

    #[cfg(unix)]
    mod concealed {
        use super::super::echo::tests::echo_enabled;
        use super::*;
        use nix::pty::openpty;
        use std::cell::Cell;
        use std::io::{BufReader, Read};
        use std::os::fd::OwnedFd;

        /// Reader that records the terminal's echo state and then fails.
        struct FailingTerminalReader<'a> {
            terminal: &'a OwnedFd,
            echo_during_read: &'a Cell<Option<bool>>,
        }

        impl Read for FailingTerminalReader<'_> {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                self.echo_during_read.set(Some(echo_enabled(self.terminal)));
                Err(io::Error::other("terminal went away"))
            }
        }

        #[test]
        fn test_secret_read_restores_echo_and_ends_line() {
            let pty = openpty(None, None).unwrap();
            let mut p = prompt("hunter2\n");

            let line = p.read_line_without_echo(&pty.slave).unwrap();
            assert_eq!(line.as_deref(), Some("hunter2\n"));
            assert!(echo_enabled(&pty.slave));
            assert_eq!(output_of(p), "\n");
        }

        #[test]
        fn test_failed_secret_read_still_restores_echo() {
            let pty = openpty(None, None).unwrap();
            let echo_during_read = Cell::new(None);
            let reader = FailingTerminalReader {
                terminal: &pty.slave,
                echo_during_read: &echo_during_read,
            };
            let mut p = Prompt::new(BufReader::new(reader), Vec::new());

            let result = p.read_line_without_echo(&pty.slave);
            assert!(matches!(result, Err(StreamerError::Prompt(_))));
            assert_eq!(echo_during_read.get(), Some(false));
            assert!(echo_enabled(&pty.slave));
        }
    }
}
