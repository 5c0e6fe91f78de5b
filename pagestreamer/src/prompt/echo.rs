//! Scoped suppression of terminal echo for secret input.

use nix::errno::Errno;
use nix::sys::termios::{tcgetattr, tcsetattr, LocalFlags, SetArg, Termios};
use ps_core::{Result, StreamerError};
use std::os::fd::AsFd;
use tracing::{debug, warn};

/// Turns echo off on a terminal and restores the saved settings when dropped.
pub struct EchoGuard<F: AsFd> {
    terminal: F,
    saved: Termios,
}

impl<F: AsFd> EchoGuard<F> {
    /// Returns `None` when `terminal` is not a tty; nothing is changed then.
    pub fn disable(terminal: F) -> Result<Option<Self>> {
        let saved = match tcgetattr(terminal.as_fd()) {
            Ok(saved) => saved,
            Err(Errno::ENOTTY) => return Ok(None),
            Err(e) => {
                return Err(StreamerError::Prompt(format!(
                    "cannot read terminal settings: {e}"
                )))
            }
        };

        let mut silent = saved.clone();
        silent.local_flags.remove(LocalFlags::ECHO);
        tcsetattr(terminal.as_fd(), SetArg::TCSANOW, &silent)
            .map_err(|e| StreamerError::Prompt(format!("cannot disable terminal echo: {e}")))?;

        debug!("terminal echo disabled");
        Ok(Some(Self { terminal, saved }))
    }
}

impl<F: AsFd> Drop for EchoGuard<F> {
    fn drop(&mut self) {
        match tcsetattr(self.terminal.as_fd(), SetArg::TCSANOW, &self.saved) {
            Ok(()) => debug!("terminal echo restored"),
            Err(e) => warn!(error = %e, "failed to restore terminal settings"),
        }
    }
}
