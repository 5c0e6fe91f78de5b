// Cron schedule command

use super::CommandContext;
use crate::prompt::Prompt;
use colored::Colorize;
use ps_core::{ps_error, ps_info, ps_println, ps_success, Result};
use ps_messages::{msg, MESSAGES};
use ps_stream::Scheduler;
use std::io::{BufRead, Write};

pub fn handle_schedule<R: BufRead, W: Write>(
    ctx: &CommandContext,
    prompt: &mut Prompt<R, W>,
) -> Result<bool> {
    let scheduler = Scheduler::new(&ctx.runner, ctx.runner.scripts_dir());

    ps_println!("{}", MESSAGES.schedule.header.bold());
    ps_println!("{}", MESSAGES.schedule.intro);
    ps_println!(
        "{}",
        msg!(
            schedule.crontab_location,
            path = scheduler.crontab_path().display()
        )
    );
    ps_println!();
    ps_println!("{}", MESSAGES.schedule.default_schedule);
    ps_println!();

    if !prompt.confirm_schedule()? {
        ps_info!("{}", MESSAGES.schedule.cancelled);
        return Ok(false);
    }

    ps_info!("{}", MESSAGES.schedule.updating);
    if let Err(e) = scheduler.install() {
        ps_error!("{}", MESSAGES.schedule.failed);
        return Err(e);
    }

    ps_success!("{}", MESSAGES.schedule.success);
    Ok(true)
}
