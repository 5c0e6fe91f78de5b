pub mod command_stream;
pub mod error;
pub mod output_macros;
pub mod user_paths;

pub use command_stream::{is_tool_installed, CommandRunner, ScriptRunner};
pub use error::{Result, StreamerError};
