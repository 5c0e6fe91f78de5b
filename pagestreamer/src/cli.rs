// CLI argument parsing and definitions

use clap::{Parser, Subcommand, ValueEnum};
use ps_core::user_paths::DEFAULT_SCRIPTS_DIR;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "pagestreamer")]
#[command(about = "Stream a web page to YouTube, Twitch and other RTMP platforms")]
#[command(version)]
#[command(arg_required_else_help = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the .env settings file (default: ~/.pagestreamer)
    #[arg(long, global = true, env = "PAGESTREAMER_HOME", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Directory holding the stream scripts
    #[arg(
        long,
        global = true,
        env = "PAGESTREAMER_SCRIPTS",
        value_name = "DIR",
        default_value = DEFAULT_SCRIPTS_DIR
    )]
    pub scripts_dir: PathBuf,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,
}

/// Which setting `config` should touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigTarget {
    /// Choose the streaming platform
    #[value(name = "PLATFORM")]
    Platform,
    /// Enter the stream key (input is hidden)
    #[value(name = "STREAM_KEY")]
    StreamKey,
    /// Enter the URL of the page to stream
    #[value(name = "STREAM_URL")]
    StreamUrl,
    /// Show the current settings with the key masked
    #[value(name = "see")]
    See,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start streaming with the saved settings
    Start,
    /// Stop the running stream
    Stop,
    /// Report whether a stream is running
    Status,
    /// Configure settings interactively (all of them when no setting is given)
    Config {
        #[arg(value_enum)]
        target: Option<ConfigTarget>,
    },
    /// Install the cron schedule from the crontab file
    Schedule,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Stop => "stop",
            Command::Status => "status",
            Command::Config { .. } => "config",
            Command::Schedule => "schedule",
        }
    }
}
