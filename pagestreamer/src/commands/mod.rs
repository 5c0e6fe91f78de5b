// Command handlers for pagestreamer

use crate::cli::{Args, Command};
use crate::prompt::Prompt;
use ps_config::{ConfigPaths, ConfigStore};
use ps_core::user_paths;
use ps_core::{Result, ScriptRunner};
use std::path::PathBuf;
use tracing::debug;

pub mod config;
pub mod schedule;
pub mod stream;

/// Everything a command needs, resolved once from the arguments.
pub struct CommandContext {
    pub store: ConfigStore,
    pub runner: ScriptRunner,
}

impl CommandContext {
    pub fn from_args(args: &Args) -> Result<Self> {
        let container_dir: PathBuf = match &args.config_dir {
            Some(dir) => dir.clone(),
            None => user_paths::default_config_dir()?,
        };
        debug!(
            config_dir = %container_dir.display(),
            scripts_dir = %args.scripts_dir.display(),
            "resolved paths"
        );

        Ok(Self {
            store: ConfigStore::new(ConfigPaths::in_dir(container_dir)),
            runner: ScriptRunner::new(&args.scripts_dir),
        })
    }
}

/// Main command dispatcher.
///
/// `Ok(false)` means the command ran but did not succeed (declined prompt,
/// empty stream key, stream not running) and the process should exit 1.
#[must_use = "command execution results should be handled"]
pub fn execute_command(args: Args) -> Result<bool> {
    let ctx = CommandContext::from_args(&args)?;

    match args.command {
        Command::Start => {
            debug!("Handling start command");
            stream::handle_start(&ctx)
        }
        Command::Stop => {
            debug!("Handling stop command");
            stream::handle_stop(&ctx)
        }
        Command::Status => {
            debug!("Handling status command");
            stream::handle_status(&ctx)
        }
        Command::Config { target } => {
            debug!(?target, "Handling config command");
            config::handle_config(target, &ctx.store, &mut Prompt::terminal())
        }
        Command::Schedule => {
            debug!("Handling schedule command");
            schedule::handle_schedule(&ctx, &mut Prompt::terminal())
        }
    }
}
