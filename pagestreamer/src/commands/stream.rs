// Stream lifecycle commands

use super::CommandContext;
use ps_core::{ps_info, ps_success, Result};
use ps_messages::{msg, MESSAGES};
use ps_stream::StreamManager;

pub fn handle_start(ctx: &CommandContext) -> Result<bool> {
    let manager = StreamManager::new(&ctx.runner, ctx.store.clone());

    manager.start_with(|platform| {
        ps_info!("{}", msg!(stream.starting, platform = platform));
    })?;

    ps_success!("{}", MESSAGES.stream.started);
    Ok(true)
}

pub fn handle_stop(ctx: &CommandContext) -> Result<bool> {
    let manager = StreamManager::new(&ctx.runner, ctx.store.clone());

    ps_info!("{}", MESSAGES.stream.stopping);
    manager.stop()?;

    ps_success!("{}", MESSAGES.stream.stopped);
    Ok(true)
}

/// Exit status mirrors the status script: 0 only while streaming.
pub fn handle_status(ctx: &CommandContext) -> Result<bool> {
    let manager = StreamManager::new(&ctx.runner, ctx.store.clone());

    if manager.is_running()? {
        ps_success!("{}", MESSAGES.stream.running);
        Ok(true)
    } else {
        ps_info!("{}", MESSAGES.stream.not_running);
        Ok(false)
    }
}
