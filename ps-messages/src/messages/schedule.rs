//! Cron schedule messages

pub struct ScheduleMessages {
    pub header: &'static str,
    pub intro: &'static str,
    pub crontab_location: &'static str,
    pub default_schedule: &'static str,
    pub confirm_prompt: &'static str,
    pub updating: &'static str,
    pub success: &'static str,
    pub failed: &'static str,
    pub cancelled: &'static str,
}

pub const SCHEDULE_MESSAGES: ScheduleMessages = ScheduleMessages {
    header: "Schedule Configuration",
    intro: "You can edit the crontab file to customize your streaming schedule.",
    crontab_location: "Crontab file location: {path}",
    default_schedule: "Default schedule:\n- Start: Friday, Saturday, Sunday at 20:30 (Paris time)\n- Stop: Saturday, Sunday, Monday at 03:30 (Paris time)",
    confirm_prompt: "Once you've edited the crontab file, type 'yes' to update\nor 'no' to cancel: ",
    updating: "Updating crontab...",
    success: "Schedule updated successfully!",
    failed: "Failed to update schedule. Check permissions and try again.",
    cancelled: "Schedule update cancelled.",
};
