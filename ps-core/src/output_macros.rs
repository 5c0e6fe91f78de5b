//! Output macros for the pagestreamer CLI.
//!
//! User-facing text goes through these macros so every command shares the
//! same prefixes. Diagnostics belong in `tracing`, not here.

#[macro_export]
macro_rules! ps_println {
    () => {
        println!();
    };
    ($($arg:tt)*) => {
        println!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! ps_error {
    ($($arg:tt)*) => {
        eprintln!("❌ {}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! ps_error_hint {
    ($($arg:tt)*) => {
        eprintln!("💡 {}", format!($($arg)*));
    };
}

#[macro_export]
macro_rules! ps_success {
    ($($arg:tt)*) => {
        println!("✓ {}", format!($($arg)*));
    };
}

#[macro_export]
macro_rules! ps_info {
    ($($arg:tt)*) => {
        println!("ℹ {}", format!($($arg)*));
    };
}

#[macro_export]
macro_rules! ps_warning {
    ($($arg:tt)*) => {
        eprintln!("⚠ {}", format!($($arg)*));
    };
}
