//! Interactive configuration messages (platform, stream key, stream URL, view)

pub struct ConfigMessages {
    // ============================================================================
    // Platform
    // ============================================================================
    pub platform_header: &'static str,
    pub platform_option: &'static str,
    pub platform_prompt: &'static str,
    pub platform_invalid: &'static str,
    pub platform_custom_prompt: &'static str,
    pub platform_set: &'static str,

    // ============================================================================
    // Stream key
    // ============================================================================
    pub stream_key_header: &'static str,
    pub stream_key_prompt: &'static str,
    pub stream_key_hidden_hint: &'static str,
    pub stream_key_empty: &'static str,

    // ============================================================================
    // Stream URL
    // ============================================================================
    pub stream_url_header: &'static str,
    pub stream_url_prompt: &'static str,
    pub stream_url_default: &'static str,
    pub stream_url_prefixed: &'static str,

    // ============================================================================
    // Outcome and view
    // ============================================================================
    pub saved: &'static str,
    pub change_hint: &'static str,
    pub view_hint: &'static str,
    pub failed: &'static str,
    pub current_header: &'static str,
    pub platform_label: &'static str,
    pub stream_key_label: &'static str,
    pub stream_url_label: &'static str,
    pub not_configured: &'static str,
}

pub const CONFIG_MESSAGES: ConfigMessages = ConfigMessages {
    // Platform
    platform_header: "Select streaming platform:",
    platform_option: "{index}. {name}",
    platform_prompt: "Enter number (1-{count}): ",
    platform_invalid: "Invalid selection. Using YouTube as default.",
    platform_custom_prompt: "Enter custom RTMP URL: ",
    platform_set: "Setting platform to: {name}",

    // Stream key
    stream_key_header: "Stream Key Configuration",
    stream_key_prompt: "Enter your stream key: ",
    stream_key_hidden_hint: "(what you type or paste stays hidden; on Linux paste with CTRL+SHIFT+V, then press ENTER)",
    stream_key_empty: "Stream key cannot be empty",

    // Stream URL
    stream_url_header: "Stream URL Configuration",
    stream_url_prompt: "Enter the URL of the website you want to stream: ",
    stream_url_default: "Using default: {url}",
    stream_url_prefixed: "URL should start with http:// or https://, adding https://",

    // Outcome and view
    saved: "Configuration saved successfully!",
    change_hint: "You can change settings anytime with: pagestreamer config",
    view_hint: "You can view current settings with: pagestreamer config see",
    failed: "Configuration failed",
    current_header: "Current Configuration:",
    platform_label: "Platform: ",
    stream_key_label: "Stream Key: ",
    stream_url_label: "Stream URL: ",
    not_configured: "Not configured",
};
