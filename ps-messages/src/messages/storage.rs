//! Env file failure messages and remediation hints

pub struct StorageMessages {
    pub create_dir_failed: &'static str,
    pub create_file_failed: &'static str,
    pub create_hint: &'static str,
    pub write_failed: &'static str,
    pub write_hint: &'static str,
    pub swap_failed: &'static str,
    pub swap_hint: &'static str,
}

pub const STORAGE_MESSAGES: StorageMessages = StorageMessages {
    create_dir_failed: "Could not create configuration directory {dir}: {error}",
    create_file_failed: "Could not create {file}: {error}",
    create_hint: "Check permissions for {dir}\nTry running: mkdir -p {dir} && touch {file} && chmod 644 {file}",
    write_failed: "Could not open {file} for writing: {error}",
    write_hint: "Check that {dir} is writable with 'ls -la {dir}'\nTry running: sudo chown -R $USER:$USER {dir}",
    swap_failed: "Could not update {file}: {error}",
    swap_hint: "The previous contents of {file} were left unchanged\nCheck that {dir} is writable with 'ls -la {dir}'",
};
