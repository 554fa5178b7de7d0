//! Icon theme integration use case
//!
//! The consent-gated, idempotent workflow that installs the kemet icon into
//! the Material Icon Theme's assets and manifest, and its structural inverse.
//!
//! Both operations are infallible at their boundary: every internal failure
//! is caught here, surfaced through the notifier, and mapped to a `Failed`
//! outcome. Whether the integration is present is inferred from the
//! filesystem on every call, never cached, so external reinstalls or updates
//! of the theme extension between calls are tolerated.

use std::path::{Path, PathBuf};

use crate::domain::manifest::IconManifest;
use crate::domain::ports::{
    Consent, ExtensionRegistry, FileSystem, Notifier, PreferenceStore, ReloadChoice,
};
use crate::domain::theme::{ThemeTarget, SKIP_INTEGRATION_KEY};
use crate::error::{KemetError, KemetResult};

const CONSENT_PROMPT: &str = "Would you like to add Kemet file icons to Material Icon Theme?";
const NOT_INSTALLED_MSG: &str = "Material Icon Theme is not installed.";

/// What an `integrate` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrateOutcome {
    /// Theme extension not installed (warned only when forced)
    TargetNotInstalled,
    /// Icon already present and the call was not forced; nothing touched
    AlreadyIntegrated,
    /// User declined the consent prompt (or dismissed it)
    Declined,
    /// User declined and the skip preference was persisted
    Suppressed,
    /// Integration ran; `manifest_updated` is false when the manifest file
    /// was absent and only the asset copy happened
    Completed { manifest_updated: bool },
    /// An error occurred; it was reported through the notifier
    Failed,
}

/// What a `remove` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Theme extension not installed
    TargetNotInstalled,
    /// Removal ran; both flags false means there was nothing to remove
    Removed {
        asset_deleted: bool,
        manifest_updated: bool,
    },
    /// An error occurred; it was reported through the notifier
    Failed,
}

impl RemoveOutcome {
    /// True when the call completed but found nothing integrated.
    pub fn was_noop(&self) -> bool {
        matches!(
            self,
            RemoveOutcome::Removed {
                asset_deleted: false,
                manifest_updated: false,
            }
        )
    }
}

/// Icon theme integrator.
///
/// Generic over the four capability ports so the workflow is testable
/// without a live host process.
pub struct IconIntegrator<R, P, N, F>
where
    R: ExtensionRegistry,
    P: PreferenceStore,
    N: Notifier,
    F: FileSystem,
{
    registry: R,
    prefs: P,
    notifier: N,
    fs: F,
    source_icon: PathBuf,
}

impl<R, P, N, F> IconIntegrator<R, P, N, F>
where
    R: ExtensionRegistry,
    P: PreferenceStore,
    N: Notifier,
    F: FileSystem,
{
    /// Create an integrator. `source_icon` is the bundled SVG shipped with
    /// this crate.
    pub fn new(registry: R, prefs: P, notifier: N, fs: F, source_icon: PathBuf) -> Self {
        Self {
            registry,
            prefs,
            notifier,
            fs,
            source_icon,
        }
    }

    /// Register the kemet icon with the theme extension.
    ///
    /// `forced` skips both the already-integrated short-circuit and the
    /// consent prompt, making it the repair/upgrade path.
    pub fn integrate(&self, forced: bool) -> IntegrateOutcome {
        match self.try_integrate(forced) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.notifier.error(&format!(
                    "Failed to integrate Kemet icons with Material Icon Theme: {}",
                    err
                ));
                IntegrateOutcome::Failed
            }
        }
    }

    /// Remove the kemet icon from the theme extension. Unconditional: absent
    /// pieces are skipped silently, so removing twice is a no-op.
    pub fn remove(&self) -> RemoveOutcome {
        match self.try_remove() {
            Ok(outcome) => outcome,
            Err(err) => {
                self.notifier.error(&format!(
                    "Failed to remove Kemet icons from Material Icon Theme: {}",
                    err
                ));
                RemoveOutcome::Failed
            }
        }
    }

    fn try_integrate(&self, forced: bool) -> KemetResult<IntegrateOutcome> {
        let Some(target) = ThemeTarget::resolve(&self.registry) else {
            // No nagging when the theme is not even present
            if forced {
                self.notifier.warn(NOT_INSTALLED_MSG);
            }
            return Ok(IntegrateOutcome::TargetNotInstalled);
        };

        let icon_dest = target.icon_path();
        if self.fs.exists(&icon_dest) && !forced {
            return Ok(IntegrateOutcome::AlreadyIntegrated);
        }

        if !forced {
            match self.notifier.ask_consent(CONSENT_PROMPT) {
                Consent::Accepted => {}
                Consent::Declined => return Ok(IntegrateOutcome::Declined),
                Consent::DeclinedPermanently => {
                    self.prefs.set(SKIP_INTEGRATION_KEY, true)?;
                    return Ok(IntegrateOutcome::Suppressed);
                }
            }
        }

        if !self.fs.exists(&self.source_icon) {
            return Err(KemetError::SourceAssetMissing {
                path: self.source_icon.clone(),
            });
        }

        let icons_dir = target.icons_dir();
        if !self.fs.exists(&icons_dir) {
            return Err(KemetError::IconsDirMissing { path: icons_dir });
        }

        self.fs.copy_file(&self.source_icon, &icon_dest)?;
        self.notifier
            .info("Kemet icon copied into Material Icon Theme.");

        let manifest_path = target.manifest_path();
        if !self.fs.exists(&manifest_path) {
            // Partial integration is tolerated: the copy alone is harmless
            // and takes effect once the theme ships a manifest that maps it.
            self.notifier.warn(
                "Material Icon Theme manifest not found; file associations were not registered.",
            );
            return Ok(IntegrateOutcome::Completed {
                manifest_updated: false,
            });
        }

        let mut manifest = self.read_manifest(&manifest_path)?;
        manifest.register();
        self.fs.write(&manifest_path, &manifest.to_pretty())?;

        self.offer_reload(
            "Kemet icons added to Material Icon Theme! Reload the editor to see changes.",
        );

        Ok(IntegrateOutcome::Completed {
            manifest_updated: true,
        })
    }

    fn try_remove(&self) -> KemetResult<RemoveOutcome> {
        let Some(target) = ThemeTarget::resolve(&self.registry) else {
            self.notifier.warn(NOT_INSTALLED_MSG);
            return Ok(RemoveOutcome::TargetNotInstalled);
        };

        let icon_dest = target.icon_path();
        let asset_deleted = if self.fs.exists(&icon_dest) {
            self.fs.remove(&icon_dest)?;
            true
        } else {
            false
        };

        let manifest_path = target.manifest_path();
        let manifest_updated = if self.fs.exists(&manifest_path) {
            let mut manifest = self.read_manifest(&manifest_path)?;
            let before = manifest.clone();
            manifest.unregister();
            if manifest == before {
                false
            } else {
                self.fs.write(&manifest_path, &manifest.to_pretty())?;
                true
            }
        } else {
            false
        };

        if asset_deleted || manifest_updated {
            self.offer_reload(
                "Kemet icons removed from Material Icon Theme. Reload the editor to see changes.",
            );
        }

        Ok(RemoveOutcome::Removed {
            asset_deleted,
            manifest_updated,
        })
    }

    fn read_manifest(&self, path: &Path) -> KemetResult<IconManifest> {
        let text = self.fs.read(path)?;
        IconManifest::parse(&text).map_err(|err| KemetError::ManifestParse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    fn offer_reload(&self, message: &str) {
        match self.notifier.ask_reload(message) {
            ReloadChoice::Now => self.notifier.request_reload(),
            ReloadChoice::Later => {}
        }
    }
}
