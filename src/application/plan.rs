//! Integration planning (dry run)
//!
//! Computes what `integrate(forced = true)` would do without writing
//! anything, so the command layer can render a preview diff.

use std::path::{Path, PathBuf};

use crate::domain::manifest::IconManifest;
use crate::domain::ports::{ExtensionRegistry, FileSystem};
use crate::domain::theme::ThemeTarget;
use crate::error::{KemetError, KemetResult};

/// Planned asset copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyStep {
    pub source: PathBuf,
    pub dest: PathBuf,
    /// Destination already exists and would be overwritten
    pub overwrite: bool,
}

/// Planned manifest rewrite, with before/after text for diff rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestStep {
    pub path: PathBuf,
    pub before: String,
    pub after: String,
}

impl ManifestStep {
    /// The rewrite would not change the file's parsed content.
    pub fn is_noop(&self) -> bool {
        IconManifest::parse(&self.before)
            .map(|m| m.is_registered())
            .unwrap_or(false)
    }
}

/// Everything a forced integration would touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrationPlan {
    pub target_root: PathBuf,
    pub copy: CopyStep,
    /// Absent when the theme ships no manifest (asset-only integration)
    pub manifest: Option<ManifestStep>,
}

/// Compute the integration plan. Returns `None` when the theme extension is
/// not installed; fails on the same conditions a real run would fail on.
pub fn plan_integration<R, F>(
    registry: &R,
    fs: &F,
    source_icon: &Path,
) -> KemetResult<Option<IntegrationPlan>>
where
    R: ExtensionRegistry,
    F: FileSystem,
{
    let Some(target) = ThemeTarget::resolve(registry) else {
        return Ok(None);
    };

    if !fs.exists(source_icon) {
        return Err(KemetError::SourceAssetMissing {
            path: source_icon.to_path_buf(),
        });
    }

    let icons_dir = target.icons_dir();
    if !fs.exists(&icons_dir) {
        return Err(KemetError::IconsDirMissing { path: icons_dir });
    }

    let dest = target.icon_path();
    let copy = CopyStep {
        source: source_icon.to_path_buf(),
        dest: dest.clone(),
        overwrite: fs.exists(&dest),
    };

    let manifest_path = target.manifest_path();
    let manifest = if fs.exists(&manifest_path) {
        let before = fs.read(&manifest_path)?;
        let mut parsed =
            IconManifest::parse(&before).map_err(|err| KemetError::ManifestParse {
                path: manifest_path.clone(),
                message: err.to_string(),
            })?;
        parsed.register();
        Some(ManifestStep {
            path: manifest_path,
            before,
            after: parsed.to_pretty(),
        })
    } else {
        None
    };

    Ok(Some(IntegrationPlan {
        target_root: target.root().to_path_buf(),
        copy,
        manifest,
    }))
}
