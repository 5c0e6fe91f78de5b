//! Control of the external stream scripts.
//!
//! Capture and encoding happen entirely in shell scripts; this crate decides
//! when a script may run and turns its exit code into an outcome.

pub mod manager;
pub mod schedule;

// When the `test-helpers` feature is enabled, include the mock runner.
#[cfg(feature = "test-helpers")]
pub mod mock;

pub use manager::{StreamManager, START_SCRIPT, STATUS_SCRIPT, STOP_SCRIPT};
pub use schedule::{Scheduler, CRONTAB_FILE, CRON_UPDATE_SCRIPT};
