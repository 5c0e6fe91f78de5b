//! Central registry for all user-facing message templates.
//!
//! Organized by domain:
//! - `config` - interactive configuration and the `config see` view
//! - `stream` - start/stop/status banners
//! - `schedule` - cron schedule screen
//! - `storage` - env file failure hints
//!
//! Templates use `{variable}` syntax for runtime values, which are
//! substituted by the `MessageBuilder`.

mod config;
mod schedule;
mod storage;
mod stream;

pub use config::{ConfigMessages, CONFIG_MESSAGES};
pub use schedule::{ScheduleMessages, SCHEDULE_MESSAGES};
pub use storage::{StorageMessages, STORAGE_MESSAGES};
pub use stream::{StreamMessages, STREAM_MESSAGES};

pub struct Messages {
    pub config: ConfigMessages,
    pub schedule: ScheduleMessages,
    pub storage: StorageMessages,
    pub stream: StreamMessages,
}

/// Global messages constant - main entry point for all message templates
pub const MESSAGES: Messages = Messages {
    config: CONFIG_MESSAGES,
    schedule: SCHEDULE_MESSAGES,
    storage: STORAGE_MESSAGES,
    stream: STREAM_MESSAGES,
};
