//! Directory-scan extension registry
//!
//! Implements the ExtensionRegistry port against the host editor's
//! extensions directory, where each installed extension lives in a
//! `<publisher>.<name>-<version>` directory. The scan runs on every lookup;
//! nothing is cached, so reinstalls between operations are picked up.

use std::path::{Path, PathBuf};

use crate::domain::ports::ExtensionRegistry;

/// Registry backed by a scan of the editor's extensions directory.
#[derive(Debug, Clone)]
pub struct DirScanRegistry {
    extensions_dir: PathBuf,
}

impl DirScanRegistry {
    pub fn new(extensions_dir: PathBuf) -> Self {
        Self { extensions_dir }
    }

    /// Default extensions directory of the host editor (`~/.vscode/extensions`).
    pub fn default_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".vscode").join("extensions"))
    }

    pub fn extensions_dir(&self) -> &Path {
        &self.extensions_dir
    }
}

impl ExtensionRegistry for DirScanRegistry {
    fn locate(&self, id: &str) -> Option<PathBuf> {
        // Install directories are lowercased; ids are not
        let prefix = format!("{}-", id.to_lowercase());

        let entries = std::fs::read_dir(&self.extensions_dir).ok()?;
        let mut best: Option<(Vec<u32>, PathBuf)> = None;

        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(version) = name.strip_prefix(&prefix) else {
                continue;
            };

            let key = version_key(version);
            match &best {
                Some((current, _)) if *current >= key => {}
                _ => best = Some((key, path)),
            }
        }

        best.map(|(_, path)| path)
    }
}

/// Numeric sort key for a version suffix like `5.1.0` or `5.1.0-universal`.
fn version_key(version: &str) -> Vec<u32> {
    version
        .split(['.', '-'])
        .map_while(|segment| segment.parse::<u32>().ok())
        .collect()
}
