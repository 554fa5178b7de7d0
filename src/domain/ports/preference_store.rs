//! PreferenceStore port
//!
//! Durable per-installation boolean flags. The integration uses exactly one:
//! the skip-integration preference set by "Don't ask again". Flags survive
//! process restarts and are never auto-cleared.

use std::path::PathBuf;

/// Preference store errors
#[derive(Debug)]
pub enum PreferenceError {
    /// Store file could not be read or written
    Access { path: PathBuf, message: String },
    /// Store file exists but could not be parsed
    Corrupted { path: PathBuf, message: String },
}

impl std::fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreferenceError::Access { path, message } => {
                write!(f, "cannot access {}: {}", path.display(), message)
            }
            PreferenceError::Corrupted { path, message } => {
                write!(f, "corrupted preferences {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for PreferenceError {}

/// Get/set of persisted boolean flags keyed by fixed strings.
pub trait PreferenceStore {
    /// Read a flag; an absent flag (or an unreadable store) reads as `false`.
    fn get(&self, key: &str) -> bool;

    /// Persist a flag.
    fn set(&self, key: &str, value: bool) -> Result<(), PreferenceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preference_error_display() {
        let err = PreferenceError::Corrupted {
            path: PathBuf::from("preferences.toml"),
            message: "unexpected token".to_string(),
        };
        assert!(err.to_string().contains("preferences.toml"));
        assert!(err.to_string().contains("unexpected token"));
    }
}
