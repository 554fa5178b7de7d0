//! ExtensionRegistry port
//!
//! The one question the integrator asks the host: where is a given extension
//! installed? Resolved fresh on every operation.

use std::path::PathBuf;

/// Lookup of installed host-editor extensions by identifier.
pub trait ExtensionRegistry {
    /// Install root of the extension, or `None` when it is not installed.
    fn locate(&self, id: &str) -> Option<PathBuf>;
}
