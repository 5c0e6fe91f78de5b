//! Stream lifecycle messages (start, stop, status)

pub struct StreamMessages {
    pub starting: &'static str,
    pub started: &'static str,
    pub stopping: &'static str,
    pub stopped: &'static str,
    pub running: &'static str,
    pub not_running: &'static str,
}

pub const STREAM_MESSAGES: StreamMessages = StreamMessages {
    starting: "Starting stream to {platform}...",
    started: "Stream started successfully.",
    stopping: "Stopping stream...",
    stopped: "Stream stopped successfully.",
    running: "Stream is currently running.",
    not_running: "Stream is not running.",
};
