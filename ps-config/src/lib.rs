//! Persistent stream settings.
//!
//! Settings live in a small `KEY=value` file. [`ConfigStore`] reads it and
//! rewrites it one key at a time through an atomic rename; the presenter
//! turns the entries into the masked view shown by `config see`.

pub mod entry;
pub mod paths;
pub mod presenter;
pub mod store;

pub use entry::{ConfigEntry, ConfigKey};
pub use paths::ConfigPaths;
pub use presenter::{mask_secret, ConfigView};
pub use store::{ConfigStore, StorageError, StorageStage};
