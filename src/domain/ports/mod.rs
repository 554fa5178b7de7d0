//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod extension_registry;
pub mod file_system;
pub mod notifier;
pub mod preference_store;

pub use extension_registry::ExtensionRegistry;
pub use file_system::{FileSystem, FsError, FsResult};
pub use notifier::{Consent, Notifier, ReloadChoice};
pub use preference_store::{PreferenceError, PreferenceStore};
