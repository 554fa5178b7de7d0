//! Infrastructure layer
//!
//! Concrete implementations of the domain ports: local disk, extensions
//! directory scanning, TOML preferences, terminal notifications.

pub mod fs;
pub mod notify;
pub mod preferences;
pub mod registry;

pub use fs::{expand_home, LocalFs};
pub use notify::ConsoleNotifier;
pub use preferences::TomlPreferenceStore;
pub use registry::DirScanRegistry;
