//! Error types for kemet-host
//!
//! Library errors use `thiserror`; binary command handlers wrap them in
//! `anyhow` at the edge.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::file_system::FsError;
use crate::domain::ports::preference_store::PreferenceError;

/// Result type alias for kemet-host operations
pub type KemetResult<T> = Result<T, KemetError>;

/// Main error type for kemet-host operations
///
/// Every variant is terminal for the invocation that hit it. The integrator
/// catches these at its boundary and converts them to notifier output; nothing
/// here crosses a public operation.
#[derive(Error, Debug)]
pub enum KemetError {
    /// Bundled icon asset missing (broken install of this crate itself)
    #[error("bundled icon asset not found: {path} - reinstall kemet-host")]
    SourceAssetMissing { path: PathBuf },

    /// Theme extension layout is not what we expect (version incompatibility)
    #[error("icon directory not found in theme extension: {path}")]
    IconsDirMissing { path: PathBuf },

    /// Theme manifest exists but is not valid JSON; the file is left untouched
    #[error("invalid icon manifest {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// File system operation failed
    #[error("file system error: {0}")]
    Fs(#[from] FsError),

    /// Preference store operation failed
    #[error("preference store error: {0}")]
    Preference(#[from] PreferenceError),

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
