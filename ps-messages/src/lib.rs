//! ps-messages
//!
//! User-facing message templates for the pagestreamer CLI, plus the
//! `msg!` macro that fills in `{variable}` placeholders.

pub mod builder;
pub mod macros;
pub mod messages;

pub use messages::MESSAGES;
