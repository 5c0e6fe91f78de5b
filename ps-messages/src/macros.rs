/// Renders a message from [`MESSAGES`](crate::MESSAGES) by domain and field.
///
/// ```
/// use ps_messages::msg;
///
/// let line = msg!(stream.starting, platform = "rtmp://live.twitch.tv/app");
/// assert_eq!(line, "Starting stream to rtmp://live.twitch.tv/app...");
/// ```
#[macro_export]
macro_rules! msg {
    ($domain:ident . $field:ident $(, $name:ident = $value:expr)* $(,)?) => {
        $crate::builder::MessageBuilder::new($crate::MESSAGES.$domain.$field)
            $(.var(stringify!($name), $value))*
            .build()
    };
}
