//! Integration status report
//!
//! Read-only health checks over the current filesystem state: is the theme
//! installed, is the icon in place and current, are the manifest entries
//! registered. Purely informational; mutates nothing.

use std::path::Path;

use crate::domain::manifest::IconManifest;
use crate::domain::ports::{ExtensionRegistry, FileSystem, PreferenceStore};
use crate::domain::theme::{ThemeTarget, SKIP_INTEGRATION_KEY};

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

/// One line of the status report
#[derive(Debug, Clone)]
pub struct StatusCheck {
    pub name: &'static str,
    pub status: CheckStatus,
    pub message: String,
}

/// Full status report
#[derive(Debug, Clone, Default)]
pub struct StatusReport {
    pub checks: Vec<StatusCheck>,
}

impl StatusReport {
    pub fn passes(&self) -> usize {
        self.count(CheckStatus::Pass)
    }

    pub fn warnings(&self) -> usize {
        self.count(CheckStatus::Warning)
    }

    pub fn errors(&self) -> usize {
        self.count(CheckStatus::Error)
    }

    pub fn is_success(&self) -> bool {
        self.errors() == 0
    }

    fn count(&self, status: CheckStatus) -> usize {
        self.checks.iter().filter(|c| c.status == status).count()
    }

    fn push(&mut self, name: &'static str, status: CheckStatus, message: impl Into<String>) {
        self.checks.push(StatusCheck {
            name,
            status,
            message: message.into(),
        });
    }
}

/// Run all status checks.
pub fn run_status<R, P, F>(
    registry: &R,
    prefs: &P,
    fs: &F,
    source_icon: &Path,
) -> StatusReport
where
    R: ExtensionRegistry,
    P: PreferenceStore,
    F: FileSystem,
{
    let mut report = StatusReport::default();

    if fs.exists(source_icon) {
        report.push(
            "bundled asset",
            CheckStatus::Pass,
            source_icon.display().to_string(),
        );
    } else {
        report.push(
            "bundled asset",
            CheckStatus::Error,
            format!("missing: {} (broken install)", source_icon.display()),
        );
    }

    let Some(target) = ThemeTarget::resolve(registry) else {
        report.push(
            "theme extension",
            CheckStatus::Warning,
            "Material Icon Theme is not installed",
        );
        push_preference_check(&mut report, prefs);
        return report;
    };
    report.push(
        "theme extension",
        CheckStatus::Pass,
        target.root().display().to_string(),
    );

    let icon_path = target.icon_path();
    if fs.exists(&icon_path) {
        report.push("icon asset", CheckStatus::Pass, "installed");

        match (fs.hash(&icon_path), fs.hash(source_icon)) {
            (Ok(installed), Ok(bundled)) if installed == bundled => {
                report.push("icon freshness", CheckStatus::Pass, "matches bundled icon");
            }
            (Ok(_), Ok(_)) => {
                report.push(
                    "icon freshness",
                    CheckStatus::Warning,
                    "differs from bundled icon; run `kemet-host integrate` to refresh",
                );
            }
            _ => {
                report.push(
                    "icon freshness",
                    CheckStatus::Warning,
                    "could not compare installed icon with bundled icon",
                );
            }
        }
    } else {
        report.push("icon asset", CheckStatus::Warning, "not integrated");
    }

    let manifest_path = target.manifest_path();
    if !fs.exists(&manifest_path) {
        report.push(
            "manifest",
            CheckStatus::Warning,
            "theme ships no manifest; file associations unavailable",
        );
    } else {
        match fs.read(&manifest_path).map_err(|e| e.to_string()).and_then(
            |text| IconManifest::parse(&text).map_err(|e| e.to_string()),
        ) {
            Ok(manifest) => {
                let missing = manifest.missing_entries();
                if missing.is_empty() {
                    report.push("manifest", CheckStatus::Pass, "all four entries registered");
                } else {
                    report.push(
                        "manifest",
                        CheckStatus::Warning,
                        format!("entries missing: {}", missing.join(", ")),
                    );
                }
            }
            Err(message) => {
                report.push("manifest", CheckStatus::Error, message);
            }
        }
    }

    push_preference_check(&mut report, prefs);
    report
}

fn push_preference_check<P: PreferenceStore>(report: &mut StatusReport, prefs: &P) {
    if prefs.get(SKIP_INTEGRATION_KEY) {
        report.push(
            "skip preference",
            CheckStatus::Warning,
            "set; automatic integration is disabled",
        );
    } else {
        report.push("skip preference", CheckStatus::Pass, "not set");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::LocalFs;
    use crate::testing::{StaticRegistry, StubPrefs};
    use tempfile::tempdir;

    #[test]
    fn status_for_absent_target() {
        let dir = tempdir().unwrap();
        let icon = dir.path().join("kemet-file.svg");
        std::fs::write(&icon, "<svg/>").unwrap();

        let report = run_status(
            &StaticRegistry::absent(),
            &StubPrefs::default(),
            &LocalFs::new(),
            &icon,
        );

        assert!(report.is_success());
        assert_eq!(report.warnings(), 1);
        assert!(report
            .checks
            .iter()
            .any(|c| c.name == "theme extension" && c.status == CheckStatus::Warning));
    }

    #[test]
    fn status_for_fully_integrated_target() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("theme");
        std::fs::create_dir_all(root.join("icons")).unwrap();
        std::fs::create_dir_all(root.join("dist")).unwrap();
        let icon = dir.path().join("kemet-file.svg");
        std::fs::write(&icon, "<svg/>").unwrap();
        std::fs::write(root.join("icons/kemet.svg"), "<svg/>").unwrap();

        let mut manifest = IconManifest::empty();
        manifest.register();
        std::fs::write(root.join("dist/material-icons.json"), manifest.to_pretty()).unwrap();

        let report = run_status(
            &StaticRegistry::installed(&root),
            &StubPrefs::default(),
            &LocalFs::new(),
            &icon,
        );

        assert!(report.is_success());
        assert_eq!(report.warnings(), 0, "report: {:?}", report);
        assert_eq!(report.passes(), report.checks.len());
    }

    #[test]
    fn status_flags_stale_icon() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("theme");
        std::fs::create_dir_all(root.join("icons")).unwrap();
        let icon = dir.path().join("kemet-file.svg");
        std::fs::write(&icon, "<svg>new</svg>").unwrap();
        std::fs::write(root.join("icons/kemet.svg"), "<svg>old</svg>").unwrap();

        let report = run_status(
            &StaticRegistry::installed(&root),
            &StubPrefs::default(),
            &LocalFs::new(),
            &icon,
        );

        assert!(report
            .checks
            .iter()
            .any(|c| c.name == "icon freshness" && c.status == CheckStatus::Warning));
    }

    #[test]
    fn status_reports_malformed_manifest_as_error() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("theme");
        std::fs::create_dir_all(root.join("dist")).unwrap();
        std::fs::write(root.join("dist/material-icons.json"), "broken").unwrap();
        let icon = dir.path().join("kemet-file.svg");
        std::fs::write(&icon, "<svg/>").unwrap();

        let report = run_status(
            &StaticRegistry::installed(&root),
            &StubPrefs::default(),
            &LocalFs::new(),
            &icon,
        );

        assert!(!report.is_success());
    }

    #[test]
    fn status_reports_skip_preference() {
        let dir = tempdir().unwrap();
        let icon = dir.path().join("kemet-file.svg");
        std::fs::write(&icon, "<svg/>").unwrap();
        let prefs = StubPrefs::default();
        prefs.set(SKIP_INTEGRATION_KEY, true).unwrap();

        let report = run_status(&StaticRegistry::absent(), &prefs, &LocalFs::new(), &icon);

        assert!(report
            .checks
            .iter()
            .any(|c| c.name == "skip preference" && c.status == CheckStatus::Warning));
    }
}
